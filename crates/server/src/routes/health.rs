//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::db::SharedStore;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Check record store connectivity and return server health status
pub async fn check(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                reason: None,
            }),
        ),
        Err(err) => {
            tracing::error!(error = ?err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    reason: Some(err.message()),
                }),
            )
        }
    }
}
