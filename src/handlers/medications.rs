use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::models::{Medication, ScheduleField};
use crate::{MedialertError, router::MedialertState};

#[derive(Debug, Deserialize)]
pub struct CreateMedicationRequest {
    pub nombre: Option<String>,
    pub dosis: Option<String>,
    pub dias: Option<ScheduleField>,
    pub horas: Option<ScheduleField>,
    pub rut_paciente: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMedicationRequest {
    pub nombre: Option<String>,
    pub dosis: Option<String>,
    pub dias: Option<ScheduleField>,
    pub horas: Option<ScheduleField>,
}

fn require_text(value: Option<String>, field: &str) -> Result<String, MedialertError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MedialertError::Validation(format!(
            "El campo '{field}' es obligatorio"
        ))),
    }
}

fn require_schedule(
    value: Option<ScheduleField>,
    field: &str,
) -> Result<String, MedialertError> {
    match value {
        Some(v) => v.into_joined(field),
        None => Err(MedialertError::Validation(format!(
            "El campo '{field}' es obligatorio"
        ))),
    }
}

/// GET /api/medicamentos — unconditional full-table fetch.
pub async fn list_all(
    State(state): State<MedialertState>,
) -> Result<Json<Vec<Medication>>, MedialertError> {
    let rows = state.storage.list_medications().await?;
    Ok(Json(rows))
}

/// GET /medicamentos_por_rut/{rut} — empty list when the patient has no
/// entries, never an error.
pub async fn list_by_patient(
    State(state): State<MedialertState>,
    Path(rut): Path<String>,
) -> Result<Json<Vec<Medication>>, MedialertError> {
    let rows = state.storage.list_medications_by_patient(&rut).await?;
    Ok(Json(rows))
}

/// POST /medicamentos_por_rut — all fields validated before any write.
pub async fn create(
    State(state): State<MedialertState>,
    Json(body): Json<CreateMedicationRequest>,
) -> Result<impl IntoResponse, MedialertError> {
    let nombre = require_text(body.nombre, "nombre")?;
    let dosis = require_text(body.dosis, "dosis")?;
    let dias = require_schedule(body.dias, "dias")?;
    let horas = require_schedule(body.horas, "horas")?;
    let rut_paciente = require_text(body.rut_paciente, "rut_paciente")?;

    let row = state
        .storage
        .insert_medication(&nombre, &dosis, &dias, &horas, &rut_paciente)
        .await?;

    info!(id = row.id, rut_paciente = %row.rut_paciente, "medication created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /medicamentos/{id} — wholesale replace of the four editable
/// fields. `dias`/`horas` accept an array or a pre-joined string.
pub async fn update(
    State(state): State<MedialertState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMedicationRequest>,
) -> Result<Json<Medication>, MedialertError> {
    let nombre = require_text(body.nombre, "nombre")?;
    let dosis = require_text(body.dosis, "dosis")?;
    let dias = require_schedule(body.dias, "dias")?;
    let horas = require_schedule(body.horas, "horas")?;

    let Some(row) = state
        .storage
        .update_medication(id, &nombre, &dosis, &dias, &horas)
        .await?
    else {
        return Err(MedialertError::NotFound("Medicamento no encontrado"));
    };

    info!(id = row.id, "medication updated");
    Ok(Json(row))
}

/// DELETE /medicamentos/{id}
pub async fn delete(
    State(state): State<MedialertState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, MedialertError> {
    if !state.storage.delete_medication(id).await? {
        return Err(MedialertError::NotFound("Medicamento no encontrado"));
    }
    info!(id, "medication deleted");
    Ok(Json(json!({ "mensaje": "Medicamento eliminado exitosamente" })))
}
