use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Youngest accepted patient age, in years
pub const MIN_AGE: i32 = 1;

/// Oldest accepted patient age, in years
pub const MAX_AGE: i32 = 120;

/// Patient entry to be inserted into the record store.
///
/// `id` and `created_at` are deliberately absent: the store assigns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPatientRecord {
    pub name: String,
    pub age: i32,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_info: Option<String>,
    pub symptoms: String,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub recommendations: Option<String>,
}

impl NewPatientRecord {
    /// Check the intake form rules: non-blank name and symptoms, age in range
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.symptoms.trim().is_empty() {
            return Err(ValidationError::MissingField("symptoms"));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        Ok(())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A persisted patient entry. Read-only once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub contact_info: Option<String>,
    pub symptoms: String,
    pub diagnosis: Option<String>,
    pub recommendations: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PatientRecord {
    /// Materialize a stored record from its insert payload
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, record: NewPatientRecord) -> Self {
        Self {
            id,
            name: record.name,
            age: record.age,
            contact_info: record.contact_info,
            symptoms: record.symptoms,
            diagnosis: record.diagnosis,
            recommendations: record.recommendations,
            created_at,
        }
    }
}

/// Order records newest first. Stable for equal timestamps.
pub fn sort_newest_first(records: &mut [PatientRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Keep records whose name contains `term`, ignoring case.
///
/// A blank term keeps everything.
pub fn filter_by_name(records: Vec<PatientRecord>, term: &str) -> Vec<PatientRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}
