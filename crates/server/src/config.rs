//! Server configuration

use crate::ai::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Environment variable holding the AI gateway credential
pub const AI_GATEWAY_API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";

/// Server configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub bind_address: String,
    /// Postgres connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// Publishable key clients must present as a bearer token, if set
    pub api_key: Option<String>,
    pub ai_gateway_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub ai_model: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            database_url: non_empty_var("DATABASE_URL"),
            api_key: non_empty_var("GATEWAY_API_KEY"),
            ai_gateway_api_key: non_empty_var(AI_GATEWAY_API_KEY_VAR),
            ai_gateway_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
            ai_model: std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
