//! Preliminary symptom assessment using the AI gateway

use super::client::CompletionClient;
use health_advisor_core::{AnalysisError, AnalysisResult, PatientSubmission, normalize_completion};

const SYSTEM_PROMPT: &str = r#"You are a medical assistant AI that analyzes patient symptoms and provides preliminary health assessments.

IMPORTANT: You are NOT providing medical diagnosis or treatment. You are providing educational information only.

For each patient analysis, provide:
1. A possible condition or health concern based on symptoms (clearly state this is NOT a medical diagnosis)
2. 3-5 practical health tips and recommendations
3. Advice to seek professional medical care when appropriate

Format your response as JSON with this structure:
{
  "diagnosis": "Brief description of possible condition (1-2 sentences)",
  "recommendations": "Detailed health tips and recommendations (3-5 bullet points as a single formatted string)"
}

Keep the tone professional, empathetic, and clear. Always remind that this is preliminary information and professional medical consultation is important."#;

const TEMPERATURE: f32 = 0.7;

/// Interpolate the patient's details into the user message, verbatim
pub fn user_prompt(submission: &PatientSubmission) -> String {
    format!(
        "Patient Information:\n- Name: {}\n- Age: {}\n- Symptoms: {}\n\nPlease analyze these symptoms and provide health guidance.",
        submission.name,
        submission.age_text(),
        submission.symptoms
    )
}

/// Ask the gateway for an assessment of one submission.
///
/// Upstream failures are returned as typed errors. A reply that is not the
/// requested JSON still succeeds through the plain-text fallback.
pub async fn analyze(
    client: &CompletionClient,
    submission: &PatientSubmission,
) -> Result<AnalysisResult, AnalysisError> {
    tracing::info!(
        name = %submission.name,
        age = %submission.age_text(),
        model = client.model(),
        "Analyzing symptoms"
    );
    tracing::debug!(symptoms = %submission.symptoms, "Symptom text");

    let text = client
        .complete(SYSTEM_PROMPT, &user_prompt(submission), TEMPERATURE)
        .await?;

    let parsed = normalize_completion(&text);
    if parsed.is_fallback() {
        tracing::warn!(
            length = text.len(),
            "AI response was not valid JSON, using plain-text fallback"
        );
    }

    Ok(parsed.into_result())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_includes_fields_verbatim() {
        let submission = PatientSubmission::new(
            "Jane Doe",
            34,
            "persistent headache and mild fever for 3 days",
        );
        let prompt = user_prompt(&submission);

        assert!(prompt.contains("- Name: Jane Doe\n"));
        assert!(prompt.contains("- Age: 34\n"));
        assert!(prompt.contains("- Symptoms: persistent headache and mild fever for 3 days\n"));
    }

    #[test]
    fn user_prompt_forwards_unvalidated_age() {
        let submission: PatientSubmission =
            serde_json::from_str(r#"{"name": "Jane", "age": 34.5, "symptoms": "fever"}"#).unwrap();
        assert!(user_prompt(&submission).contains("- Age: 34.5\n"));

        let submission: PatientSubmission = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        let prompt = user_prompt(&submission);
        assert!(prompt.contains("- Age: undefined\n"));
        assert!(prompt.contains("- Symptoms: \n"));
    }

    #[test]
    fn system_prompt_requests_both_keys() {
        assert!(SYSTEM_PROMPT.contains("\"diagnosis\""));
        assert!(SYSTEM_PROMPT.contains("\"recommendations\""));
        assert!(SYSTEM_PROMPT.contains("NOT a medical diagnosis"));
    }
}
