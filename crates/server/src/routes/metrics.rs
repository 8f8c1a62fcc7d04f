//! Prometheus scrape endpoint

use axum::{Extension, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /metrics - Request counters and latency histograms in Prometheus text format
pub async fn get(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        handle.render(),
    )
}
