//! Patient record HTTP handlers

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use health_advisor_core::{NewPatientRecord, PatientRecord, filter_by_name};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::SharedStore;
use crate::error::AppError;

/// Query parameters for listing records
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    /// Case-insensitive substring of the patient name
    pub name: Option<String>,
}

/// Response body for a saved record
#[derive(Serialize)]
pub struct CreatedResponse {
    id: Uuid,
}

/// POST /patients - Save a patient record
pub async fn create(
    State(store): State<SharedStore>,
    payload: Result<Json<NewPatientRecord>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(record) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let id = store.insert(record).await.inspect_err(|err| {
        tracing::error!(error = ?err, "Failed to save patient record");
    })?;
    tracing::info!(patient_id = %id, "Patient record saved");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /patients - List records newest first, optionally filtered by name
pub async fn list(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PatientRecord>>, AppError> {
    let records = store.list().await?;

    let records = match params.name {
        Some(term) => filter_by_name(records, &term),
        None => records,
    };

    Ok(Json(records))
}
