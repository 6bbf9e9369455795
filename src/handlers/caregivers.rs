use axum::Json;
use axum::extract::{Path, State};

use crate::db::models::{Assignment, User};
use crate::{MedialertError, router::MedialertState};

/// GET /pacientes_por_cuidador/{rut}
///
/// Patients assigned to the caregiver; an unassigned caregiver gets an
/// empty list, not an error. Credential hashes are skipped on the way out.
pub async fn patients_by_caregiver(
    State(state): State<MedialertState>,
    Path(rut): Path<String>,
) -> Result<Json<Vec<User>>, MedialertError> {
    let rows = state.storage.list_patients_by_caregiver(&rut).await?;
    Ok(Json(rows))
}

/// GET /admin/asignaciones
///
/// Flattened medication→patient→caregiver projection; the caregiver leg
/// is a left join, so `nombre_cuidador` may be null.
pub async fn list_assignments(
    State(state): State<MedialertState>,
) -> Result<Json<Vec<Assignment>>, MedialertError> {
    let rows = state.storage.list_assignments().await?;
    Ok(Json(rows))
}
