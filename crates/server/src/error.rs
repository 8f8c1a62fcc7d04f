//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use health_advisor_core::{AnalysisError, ValidationError};
use serde::Serialize;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Analysis(AnalysisError),
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Analysis(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::Unauthorized(msg) | AppError::Internal(msg) => {
                msg.clone()
            }
            AppError::Analysis(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for AppError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        AppError::Internal(format!("Database pool error: {}", err))
    }
}

impl From<tokio_postgres::Error> for AppError {
    fn from(err: tokio_postgres::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}
