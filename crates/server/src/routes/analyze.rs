//! Symptom analysis endpoint

use axum::{
    Extension, Json,
    body::Bytes,
    extract::rejection::BytesRejection,
};
use health_advisor_core::{AnalysisError, AnalysisResult, PatientSubmission};

use crate::ai::{CompletionClient, symptoms};
use crate::config::AI_GATEWAY_API_KEY_VAR;
use crate::error::AppError;

/// POST /analyze-symptoms - Preliminary assessment of a symptom report
///
/// The body is read as JSON whatever its content type and forwarded as given;
/// field validation is the caller's job. Every failure becomes a `{error}`
/// body, with 429 and 402 passed through from the gateway and 500 for
/// everything else.
pub async fn analyze(
    Extension(client): Extension<Option<CompletionClient>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = run(client, body).await;
    if let Err(ref err) = result {
        tracing::error!(error = ?err, "Error in analyze-symptoms");
    }
    result.map(Json)
}

async fn run(
    client: Option<CompletionClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<AnalysisResult, AppError> {
    let body = body.map_err(|rejection| AppError::Internal(rejection.body_text()))?;
    let submission: PatientSubmission = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Invalid request body: {}", e)))?;

    let client = client.ok_or(AnalysisError::MissingCredential(AI_GATEWAY_API_KEY_VAR))?;

    Ok(symptoms::analyze(&client, &submission).await?)
}
