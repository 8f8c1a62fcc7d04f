//! Chat-completion client for the OpenAI-compatible AI gateway

use health_advisor_core::AnalysisError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Client for the AI gateway chat-completions API
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

/// A message in the prompt
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionClient {
    /// Create a new client for the given endpoint and model
    pub fn new(api_key: String, endpoint: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system and one user message, return the first completion's text.
    ///
    /// Single attempt: a failed upstream call is reported immediately.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, AnalysisError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![Message::system(system), Message::user(user)],
            temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "AI gateway error");

            return Err(match status.as_u16() {
                429 => AnalysisError::RateLimited,
                402 => AnalysisError::QuotaExhausted,
                code => AnalysisError::Upstream(code),
            });
        }

        let data = response.json::<ApiResponse>().await.map_err(|e| {
            AnalysisError::UnexpectedResponse(format!("Failed to parse response: {}", e))
        })?;

        tracing::info!(model = %self.model, "AI response received");
        extract_text(data)
    }
}

/// Pull the first choice's message text out of a response
pub fn extract_text(response: ApiResponse) -> Result<String, AnalysisError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AnalysisError::UnexpectedResponse("No completion text in response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_two_messages() {
        let request = ApiRequest {
            model: DEFAULT_MODEL,
            messages: vec![Message::system("sys"), Message::user("usr")],
            temperature: 0.7,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "google/gemini-2.5-flash");
        assert_eq!(value["messages"][0], json!({"role": "system", "content": "sys"}));
        assert_eq!(value["messages"][1], json!({"role": "user", "content": "usr"}));
        assert!(value.get("stream").is_none());
    }

    #[test]
    fn extracts_first_choice() {
        let response: ApiResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn missing_choices_is_unexpected() {
        let response: ApiResponse = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(AnalysisError::UnexpectedResponse(_))
        ));

        let response: ApiResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": null}}]})).unwrap();
        assert!(extract_text(response).is_err());
    }
}
