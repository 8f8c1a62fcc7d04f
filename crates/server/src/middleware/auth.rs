use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorBody;

/// Publishable-key check in front of the API.
///
/// When no key is configured every request passes.
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    fn allows(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = self.api_key.as_deref() else {
            return true;
        };

        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|token| token.trim() == expected)
    }
}

/// Reject requests without `Authorization: Bearer <key>` when a key is configured
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let allowed = request
        .extensions()
        .get::<ApiKeyAuth>()
        .is_none_or(|auth| auth.allows(request.headers()));

    if !allowed {
        tracing::warn!(path = %request.uri().path(), "Rejected request with missing or invalid API key");
        let body = ErrorBody {
            error: "Missing or invalid authorization".to_string(),
        };
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    next.run(request).await
}
