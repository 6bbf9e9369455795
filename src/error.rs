use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum MedialertError {
    /// A required request field is missing or empty. No write has occurred.
    #[error("{0}")]
    Validation(String),

    /// Credential pair matched no user.
    #[error("Credenciales incorrectas")]
    Unauthorized,

    /// Referenced row does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// Duplicate `rut` on registration.
    #[error("El usuario ya existe")]
    DuplicateUser,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
}

/// Flat error body, `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for MedialertError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            MedialertError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            MedialertError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            MedialertError::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
            MedialertError::DuplicateUser => (StatusCode::BAD_REQUEST, self.to_string()),
            MedialertError::Database(e) => {
                error!(error = %e, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            MedialertError::PasswordHash(e) => {
                error!(error = %e, "password hashing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let cases = [
            (
                MedialertError::Validation("Faltan campos".into()),
                StatusCode::BAD_REQUEST,
            ),
            (MedialertError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                MedialertError::NotFound("Medicamento no encontrado"),
                StatusCode::NOT_FOUND,
            ),
            (MedialertError::DuplicateUser, StatusCode::BAD_REQUEST),
            (
                MedialertError::Database(SqlxError::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn storage_errors_do_not_leak_detail() {
        let resp = MedialertError::Database(SqlxError::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
