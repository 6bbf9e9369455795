use axum::Router;
use axum::routing::{get, post, put};

use crate::db::MedialertStorage;
use crate::handlers::{auth, caregivers, medications};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct MedialertState {
    pub storage: MedialertStorage,
}

impl MedialertState {
    pub fn new(storage: MedialertStorage) -> Self {
        Self { storage }
    }
}

async fn banner() -> &'static str {
    "Servidor MediAlert conectado a PostgreSQL"
}

/// Build the full route table. The caregiver lookup is registered exactly
/// once; the upstream service carried a second identical registration that
/// was dead code.
pub fn medialert_router(state: MedialertState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api/medicamentos", get(medications::list_all))
        .route("/login", post(auth::login))
        .route("/registro", post(auth::register))
        .route("/medicamentos_por_rut", post(medications::create))
        .route("/medicamentos_por_rut/{rut}", get(medications::list_by_patient))
        .route(
            "/pacientes_por_cuidador/{rut}",
            get(caregivers::patients_by_caregiver),
        )
        .route("/admin/asignaciones", get(caregivers::list_assignments))
        .route(
            "/medicamentos/{id}",
            put(medications::update).delete(medications::delete),
        )
        .with_state(state)
}
