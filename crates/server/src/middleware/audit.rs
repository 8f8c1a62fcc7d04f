//! Audit logging for analysis requests and record writes

use axum::{body::Body, extract::Request, http::Method, middleware::Next, response::Response};

use super::request_id::RequestId;

/// Log every POST (analysis requests and saved records) with its outcome
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    if *request.method() != Method::POST {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    tracing::info!(
        target: "audit",
        request_id = %request_id,
        path = %path,
        status = response.status().as_u16(),
        "POST request"
    );

    response
}
