use thiserror::Error;

/// Failures while producing an assessment from the AI gateway.
///
/// Each variant's `Display` text is the message returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI service unavailable. Please contact support.")]
    QuotaExhausted,

    #[error("AI Gateway error: {0}")]
    Upstream(u16),

    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Unexpected AI response: {0}")]
    UnexpectedResponse(String),
}

impl AnalysisError {
    /// HTTP status the caller should see for this failure.
    ///
    /// Rate limiting and quota failures pass the upstream status through,
    /// everything else collapses to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::RateLimited => 429,
            AnalysisError::QuotaExhausted => 402,
            _ => 500,
        }
    }
}

/// Form-boundary validation failures for patient data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Age must be between 1 and 120, got {0}")]
    AgeOutOfRange(i32),
}
