use crate::error::MedialertError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `usuarios`.
///
/// The credential hash is never serialized to the client; login responses
/// carry the remaining attributes only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub rut: String,
    #[serde(skip_serializing)]
    pub contrasena: String,
    pub rol: String,
    pub nombre: String,
    pub telefono: String,
    pub rut_cuidador: Option<String>,
}

/// A row of `medicamentos`. `dias` and `horas` are stored comma-joined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Medication {
    pub id: i64,
    pub nombre: String,
    pub dosis: String,
    pub dias: String,
    pub horas: String,
    pub rut_paciente: String,
}

/// Flattened projection for the admin assignment view. The caregiver side
/// of the join is a left join, so its name may be absent.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assignment {
    pub medicamento_id: i64,
    pub nombre_cuidador: Option<String>,
    pub nombre_paciente: String,
    pub nombre_medicamento: String,
    pub dias: String,
    pub horas: String,
}

/// Day/time field as accepted on the wire: either a list of labels or an
/// already comma-joined string. Resolved to the canonical joined form
/// before persistence.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScheduleField {
    List(Vec<String>),
    Joined(String),
}

impl ScheduleField {
    /// Canonical comma-joined representation. An empty list or blank
    /// string is a validation error naming the offending field.
    pub fn into_joined(self, field: &str) -> Result<String, MedialertError> {
        let joined = match self {
            ScheduleField::List(items) => items.join(","),
            ScheduleField::Joined(s) => s,
        };
        if joined.trim().is_empty() {
            return Err(MedialertError::Validation(format!(
                "El campo '{field}' no puede estar vacío"
            )));
        }
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_joins_with_commas() {
        let field = ScheduleField::List(vec!["Mon".into(), "Wed".into()]);
        assert_eq!(field.into_joined("dias").unwrap(), "Mon,Wed");
    }

    #[test]
    fn joined_string_passes_through() {
        let field = ScheduleField::Joined("08:00,20:00".into());
        assert_eq!(field.into_joined("horas").unwrap(), "08:00,20:00");
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = ScheduleField::List(vec![]).into_joined("dias").unwrap_err();
        assert!(matches!(err, MedialertError::Validation(_)));
    }

    #[test]
    fn blank_string_is_rejected() {
        let err = ScheduleField::Joined("   ".into())
            .into_joined("horas")
            .unwrap_err();
        assert!(matches!(err, MedialertError::Validation(_)));
    }

    #[test]
    fn untagged_deserialization_accepts_both_shapes() {
        let list: ScheduleField = serde_json::from_str(r#"["Mon","Wed"]"#).unwrap();
        assert_eq!(list, ScheduleField::List(vec!["Mon".into(), "Wed".into()]));

        let joined: ScheduleField = serde_json::from_str(r#""Mon,Wed""#).unwrap();
        assert_eq!(joined, ScheduleField::Joined("Mon,Wed".into()));
    }

    #[test]
    fn user_serialization_omits_the_credential() {
        let user = User {
            rut: "11111111-1".into(),
            contrasena: "$argon2id$hash".into(),
            rol: "paciente".into(),
            nombre: "Ana".into(),
            telefono: "555".into(),
            rut_cuidador: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("contrasena"));
        assert!(!json.contains("argon2id"));
        assert!(json.contains(r#""rut":"11111111-1""#));
    }
}
