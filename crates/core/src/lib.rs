//! health-advisor-core: domain types for the symptom analysis service
//!
//! This crate holds the transport-agnostic pieces: patient submissions and
//! records, normalization of AI completions into assessments, and the error
//! taxonomy the HTTP layer maps onto status codes.

pub mod analysis;
pub mod error;
pub mod record;
pub mod submission;

pub use analysis::{
    AnalysisResult, FALLBACK_DIAGNOSIS, ParsedAnalysis, fallback_plain_text,
    normalize_completion, parse_structured, strip_code_fences,
};
pub use error::{AnalysisError, ValidationError};
pub use record::{
    MAX_AGE, MIN_AGE, NewPatientRecord, PatientRecord, filter_by_name, sort_newest_first,
};
pub use submission::PatientSubmission;
