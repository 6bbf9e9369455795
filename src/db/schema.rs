//! SQL DDL for initializing the two MediAlert tables.

/// PostgreSQL schema with:
/// - `usuarios.rut` as the primary key, making duplicate registration a
///   unique-violation at the storage layer instead of a racy pre-check
/// - `contrasena` holding an argon2id hash, never plaintext
/// - `rut_cuidador` as a nullable weak reference to another user's `rut`
/// - `medicamentos.dias` / `horas` as comma-joined label sets
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS usuarios (
    rut TEXT PRIMARY KEY,
    contrasena TEXT NOT NULL,
    rol TEXT NOT NULL,
    nombre TEXT NOT NULL,
    telefono TEXT NOT NULL,
    rut_cuidador TEXT NULL
);

CREATE TABLE IF NOT EXISTS medicamentos (
    id BIGSERIAL PRIMARY KEY,
    nombre TEXT NOT NULL,
    dosis TEXT NOT NULL,
    dias TEXT NOT NULL,
    horas TEXT NOT NULL,
    rut_paciente TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_medicamentos_rut_paciente ON medicamentos(rut_paciente);

CREATE INDEX IF NOT EXISTS idx_usuarios_rut_cuidador ON usuarios(rut_cuidador);
"#;
