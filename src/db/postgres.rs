use crate::db::models::{Assignment, Medication, User};
use crate::db::schema::POSTGRES_INIT;
use crate::error::MedialertError;
use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

/// Pooled access to the `usuarios` and `medicamentos` tables. One method
/// per endpoint operation; every method borrows a connection from the
/// shared pool for the duration of its single statement.
#[derive(Clone)]
pub struct MedialertStorage {
    pool: PgPool,
}

impl MedialertStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), MedialertError> {
        for stmt in POSTGRES_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new user. The primary key on `rut` makes the duplicate
    /// check atomic; a unique violation maps to the conflict error.
    pub async fn insert_user(&self, user: &User) -> Result<(), MedialertError> {
        let result = sqlx::query(
            r#"INSERT INTO usuarios (rut, contrasena, rol, nombre, telefono, rut_cuidador)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(&user.rut)
        .bind(&user.contrasena)
        .bind(&user.rol)
        .bind(&user.nombre)
        .bind(&user.telefono)
        .bind(&user.rut_cuidador)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(MedialertError::DuplicateUser)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_user_by_rut(&self, rut: &str) -> Result<Option<User>, MedialertError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT rut, contrasena, rol, nombre, telefono, rut_cuidador
               FROM usuarios WHERE rut = $1"#,
        )
        .bind(rut)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_medications(&self) -> Result<Vec<Medication>, MedialertError> {
        let rows = sqlx::query_as::<_, Medication>(
            "SELECT id, nombre, dosis, dias, horas, rut_paciente FROM medicamentos",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_medications_by_patient(
        &self,
        rut_paciente: &str,
    ) -> Result<Vec<Medication>, MedialertError> {
        let rows = sqlx::query_as::<_, Medication>(
            r#"SELECT id, nombre, dosis, dias, horas, rut_paciente
               FROM medicamentos WHERE rut_paciente = $1"#,
        )
        .bind(rut_paciente)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a schedule entry and return the stored row including the
    /// generated id.
    pub async fn insert_medication(
        &self,
        nombre: &str,
        dosis: &str,
        dias: &str,
        horas: &str,
        rut_paciente: &str,
    ) -> Result<Medication, MedialertError> {
        let row = sqlx::query_as::<_, Medication>(
            r#"INSERT INTO medicamentos (nombre, dosis, dias, horas, rut_paciente)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, nombre, dosis, dias, horas, rut_paciente"#,
        )
        .bind(nombre)
        .bind(dosis)
        .bind(dias)
        .bind(horas)
        .bind(rut_paciente)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Wholesale replace of the four editable fields. `None` when the id
    /// matches no row.
    pub async fn update_medication(
        &self,
        id: i64,
        nombre: &str,
        dosis: &str,
        dias: &str,
        horas: &str,
    ) -> Result<Option<Medication>, MedialertError> {
        let row = sqlx::query_as::<_, Medication>(
            r#"UPDATE medicamentos
               SET nombre = $1, dosis = $2, dias = $3, horas = $4
               WHERE id = $5
               RETURNING id, nombre, dosis, dias, horas, rut_paciente"#,
        )
        .bind(nombre)
        .bind(dosis)
        .bind(dias)
        .bind(horas)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// `true` when a row was deleted, `false` when the id matched nothing.
    pub async fn delete_medication(&self, id: i64) -> Result<bool, MedialertError> {
        let result = sqlx::query("DELETE FROM medicamentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_patients_by_caregiver(
        &self,
        rut_cuidador: &str,
    ) -> Result<Vec<User>, MedialertError> {
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT rut, contrasena, rol, nombre, telefono, rut_cuidador
               FROM usuarios WHERE rol = 'paciente' AND rut_cuidador = $1"#,
        )
        .bind(rut_cuidador)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Admin view: medications joined to their patient, the patient left
    /// joined to its caregiver. Entries whose patient has no caregiver
    /// still appear, with a null caregiver name.
    pub async fn list_assignments(&self) -> Result<Vec<Assignment>, MedialertError> {
        let rows = sqlx::query_as::<_, Assignment>(
            r#"SELECT m.id AS medicamento_id,
                      c.nombre AS nombre_cuidador,
                      p.nombre AS nombre_paciente,
                      m.nombre AS nombre_medicamento,
                      m.dias,
                      m.horas
               FROM medicamentos m
               JOIN usuarios p ON p.rut = m.rut_paciente
               LEFT JOIN usuarios c ON c.rut = p.rut_cuidador"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
