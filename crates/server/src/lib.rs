//! health-advisor-server library crate
//!
//! Exposes `build_app`, `config` and `db` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

mod ai;
pub mod config;
pub mod db;
mod error;
mod middleware;
mod routes;

use axum::{
    Extension, Router,
    http::{HeaderName, Method, header},
    middleware as axum_mw,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::SharedStore;
use middleware::ApiKeyAuth;

pub use error::{AppError, ErrorBody};

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(store: SharedStore, config: &Config) -> Router {
    let auth = ApiKeyAuth::new(config.api_key.clone());

    // None when AI_GATEWAY_API_KEY is unset; every analysis then fails with 500
    let completion_client: Option<ai::CompletionClient> =
        config.ai_gateway_api_key.as_ref().map(|key| {
            ai::CompletionClient::new(
                key.clone(),
                config.ai_gateway_url.clone(),
                config.ai_model.clone(),
            )
        });

    // Protected routes (publishable key, when configured)
    let protected_routes = Router::new()
        .route("/analyze-symptoms", post(routes::analyze::analyze))
        .route(
            "/patients",
            get(routes::patients::list).post(routes::patients::create),
        )
        .layer(axum_mw::from_fn(middleware::auth_middleware))
        .layer(Extension(auth))
        .layer(Extension(completion_client));

    // Use build_recorder() + set_global_recorder() so that repeated calls
    // (e.g. in integration tests) don't panic; the second install is
    // ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(store)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

/// Browser clients call the API cross-origin from any host; pre-flights are
/// answered here and every response carries `Access-Control-Allow-Origin: *`.
fn cors_layer() -> CorsLayer {
    let allowed_headers = [
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        HeaderName::from_static("x-request-id"),
    ];

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(allowed_headers)
}
