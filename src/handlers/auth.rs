use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::models::User;
use crate::service::password;
use crate::{MedialertError, router::MedialertState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub rut: Option<String>,
    pub contrasena: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub rut: Option<String>,
    pub contrasena: Option<String>,
    pub rol: Option<String>,
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub rut_cuidador: Option<String>,
}

fn require(value: Option<String>, field: &str) -> Result<String, MedialertError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MedialertError::Validation(format!(
            "El campo '{field}' es obligatorio"
        ))),
    }
}

/// POST /login
///
/// Looks the user up by `rut` and verifies the argon2 hash. Unknown rut
/// and wrong password answer the same 401, so the response leaks nothing
/// about which half of the pair failed.
pub async fn login(
    State(state): State<MedialertState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, MedialertError> {
    let rut = require(body.rut, "rut")?;
    let contrasena = require(body.contrasena, "contrasena")?;

    let Some(user) = state.storage.find_user_by_rut(&rut).await? else {
        return Err(MedialertError::Unauthorized);
    };
    if !password::verify(&contrasena, &user.contrasena) {
        return Err(MedialertError::Unauthorized);
    }

    info!(rut = %user.rut, rol = %user.rol, "login successful");
    // `contrasena` is skipped during serialization
    Ok(Json(user))
}

/// POST /registro
///
/// Single insert; the primary key on `rut` turns a concurrent duplicate
/// registration into a unique violation, mapped to the conflict error.
pub async fn register(
    State(state): State<MedialertState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, MedialertError> {
    let rut = require(body.rut, "rut")?;
    let contrasena = require(body.contrasena, "contrasena")?;
    let rol = require(body.rol, "rol")?;
    let nombre = require(body.nombre, "nombre")?;
    let telefono = require(body.telefono, "telefono")?;

    let user = User {
        rut,
        contrasena: password::hash(&contrasena)?,
        rol,
        nombre,
        telefono,
        rut_cuidador: body.rut_cuidador,
    };
    state.storage.insert_user(&user).await?;

    info!(rut = %user.rut, "user registered");
    Ok(Json(json!({ "mensaje": "Usuario registrado exitosamente" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_blank_values() {
        assert!(require(None, "rut").is_err());
        assert!(require(Some("   ".into()), "rut").is_err());
        assert_eq!(require(Some("11111111-1".into()), "rut").unwrap(), "11111111-1");
    }

    #[test]
    fn require_names_the_field_in_the_message() {
        let err = require(None, "contrasena").unwrap_err();
        assert!(err.to_string().contains("contrasena"));
    }
}
