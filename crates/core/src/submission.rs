use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A patient's symptom report as posted to the analysis endpoint.
///
/// Never persisted and never validated. Missing `name` or `symptoms`
/// deserialize to empty strings, and `age` keeps whatever JSON value the
/// caller sent so it can be forwarded into the prompt unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    #[serde(default)]
    pub symptoms: String,
}

impl PatientSubmission {
    pub fn new(name: impl Into<String>, age: impl Into<Value>, symptoms: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: Some(age.into()),
            symptoms: symptoms.into(),
        }
    }

    /// Age as it appears in the prompt.
    ///
    /// Strings are inserted without quotes, an explicit `null` reads `null`
    /// and an absent field reads `undefined`.
    pub fn age_text(&self) -> String {
        match &self.age {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

// Keeps an explicit `null` distinct from a missing field
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> PatientSubmission {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn integer_age_renders_as_number() {
        let submission = PatientSubmission::new("Jane Doe", 34, "headache");
        assert_eq!(submission.age_text(), "34");
        assert_eq!(parse(r#"{"age": 34}"#).age_text(), "34");
    }

    #[test]
    fn non_integer_ages_are_kept() {
        assert_eq!(parse(r#"{"age": 34.5}"#).age_text(), "34.5");
        assert_eq!(parse(r#"{"age": "34"}"#).age_text(), "34");
        assert_eq!(parse(r#"{"age": -3}"#).age_text(), "-3");
    }

    #[test]
    fn null_and_missing_age_differ() {
        let explicit = parse(r#"{"name": "Jane", "age": null}"#);
        assert_eq!(explicit.age, Some(Value::Null));
        assert_eq!(explicit.age_text(), "null");

        let missing = parse(r#"{"name": "Jane", "symptoms": "cough"}"#);
        assert_eq!(missing.age, None);
        assert_eq!(missing.age_text(), "undefined");
    }

    #[test]
    fn missing_text_fields_deserialize_empty() {
        let submission = parse(r#"{"age": 40}"#);
        assert_eq!(submission.name, "");
        assert_eq!(submission.symptoms, "");
    }

    #[test]
    fn wrong_typed_name_is_rejected() {
        let result = serde_json::from_str::<PatientSubmission>(r#"{"name": 7, "age": 3}"#);
        assert!(result.is_err());
    }
}
