//! health-advisor-server: symptom analysis HTTP service binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use health_advisor_server::config::Config;
use health_advisor_server::db::{self, InMemoryPatientStore, PgPatientRepository, SharedStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();

    let store: SharedStore = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url)
                .await
                .expect("Failed to create database pool");
            db::migrate(&pool)
                .await
                .expect("Failed to create patients table");
            tracing::info!("Using Postgres record store");
            Arc::new(PgPatientRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            Arc::new(InMemoryPatientStore::new())
        }
    };

    // Log startup info
    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("API key authentication disabled (no GATEWAY_API_KEY env var)");
    }
    if config.ai_gateway_api_key.is_some() {
        tracing::info!(model = %config.ai_model, "AI gateway configured");
    } else {
        tracing::error!("AI_GATEWAY_API_KEY not set, every analysis request will fail");
    }

    // Build application
    let app = health_advisor_server::build_app(store, &config);

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting health advisor server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
