//! Patient record store: trait plus Postgres and in-memory backends

mod memory;
mod repository;

pub use memory::InMemoryPatientStore;
pub use repository::PgPatientRepository;

use std::sync::Arc;

use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use health_advisor_core::{NewPatientRecord, PatientRecord};
use tokio_postgres::NoTls;
use uuid::Uuid;

use crate::error::AppError;

/// Persisted collection of patient entries.
///
/// Records are insert-only: there is no update or delete.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Store a record, returning its server-assigned id.
    /// Fails when required fields are missing.
    async fn insert(&self, record: NewPatientRecord) -> Result<Uuid, AppError>;

    /// All records, newest `created_at` first
    async fn list(&self) -> Result<Vec<PatientRecord>, AppError>;

    /// Check the backend is reachable
    async fn ping(&self) -> Result<(), AppError>;
}

/// Store handle shared across handlers
pub type SharedStore = Arc<dyn PatientStore>;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    id              uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    name            text NOT NULL,
    age             integer NOT NULL,
    contact_info    text,
    symptoms        text NOT NULL,
    diagnosis       text,
    recommendations text,
    created_at      timestamptz NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS patients_created_at_idx ON patients (created_at DESC);
"#;

/// Create a connection pool from a database URL
pub async fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Create the `patients` table if it does not exist yet
pub async fn migrate(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;
    client.batch_execute(SCHEMA).await?;
    Ok(())
}
