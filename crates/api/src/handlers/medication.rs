//! Handlers for the `/medication` resource.
//!
//! Every handler follows the same error policy: a missing record is a 404,
//! malformed client input (id syntax, JSON body) is a 400, and anything else
//! is a 500 whose cause is logged but not returned.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hippo_core::types::MedicationId;

use crate::dto::MedicationDto;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse the `{id}` path segment as a UUID.
fn parse_id(raw: &str) -> AppResult<MedicationId> {
    MedicationId::parse_str(raw)
        .map_err(|e| AppError::BadRequest(format!("unable to parse id: {e}")))
}

/// Decode a JSON request body regardless of its `Content-Type`.
///
/// Only a body that is not valid JSON for [`MedicationDto`] is a 400; missing
/// fields fall back to their defaults.
fn decode_body(body: &[u8]) -> AppResult<MedicationDto> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(reason = %e, "Invalid JSON request body");
        AppError::BadRequest("Invalid JSON request body".into())
    })
}

/// GET /medication/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MedicationDto>>> {
    let medications = state
        .medications
        .list()
        .await
        .map_err(|e| AppError::internal("unable to list medications", e))?;
    Ok(Json(medications.into_iter().map(MedicationDto::from).collect()))
}

/// GET /medication/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MedicationDto>> {
    let id = parse_id(&id)?;
    let medication = state
        .medications
        .get(id)
        .await
        .map_err(|e| AppError::classify(e, "unable to get medication"))?;
    Ok(Json(medication.into()))
}

/// POST /medication/
///
/// Any `id` in the body is ignored; the service assigns a new one.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<MedicationDto>> {
    let input = decode_body(&body)?
        .into_medication()
        .map_err(|e| AppError::internal("can't convert to service model", e))?;

    let created = state
        .medications
        .create(input)
        .await
        .map_err(|e| AppError::internal("unable to create medication", e))?;

    tracing::info!(medication_id = %created.id, "Medication created");
    Ok(Json(created.into()))
}

/// PUT /medication/{id}
///
/// The record must exist. The path id always wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<MedicationDto>> {
    let id = parse_id(&id)?;

    state
        .medications
        .get(id)
        .await
        .map_err(|e| AppError::classify(e, "unable to get medication"))?;

    let mut input = decode_body(&body)?
        .into_medication()
        .map_err(|e| AppError::internal("can't convert to service model", e))?;
    input.id = id;

    let updated = state
        .medications
        .update(input)
        .await
        .map_err(|e| AppError::internal("unable to update medication", e))?;

    tracing::info!(medication_id = %id, "Medication updated");
    Ok(Json(updated.into()))
}

/// DELETE /medication/{id}
///
/// Deleting an id that does not exist still returns 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .medications
        .delete(id)
        .await
        .map_err(|e| AppError::internal("unable to delete medication", e))?;

    tracing::info!(medication_id = %id, "Medication deleted");
    Ok(StatusCode::NO_CONTENT)
}
