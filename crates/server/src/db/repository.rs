use async_trait::async_trait;
use deadpool_postgres::Pool;
use health_advisor_core::{NewPatientRecord, PatientRecord};
use tokio_postgres::Row;
use uuid::Uuid;

use super::PatientStore;
use crate::error::AppError;

/// Postgres-backed patient store
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: Pool,
}

impl PgPatientRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &Row) -> PatientRecord {
    PatientRecord {
        id: row.get("id"),
        name: row.get("name"),
        age: row.get("age"),
        contact_info: row.get("contact_info"),
        symptoms: row.get("symptoms"),
        diagnosis: row.get("diagnosis"),
        recommendations: row.get("recommendations"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl PatientStore for PgPatientRepository {
    async fn insert(&self, record: NewPatientRecord) -> Result<Uuid, AppError> {
        record.validate()?;

        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO patients (name, age, contact_info, symptoms, diagnosis, recommendations) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
                &[
                    &record.name,
                    &record.age,
                    &record.contact_info,
                    &record.symptoms,
                    &record.diagnosis,
                    &record.recommendations,
                ],
            )
            .await?;
        Ok(row.get(0))
    }

    async fn list(&self) -> Result<Vec<PatientRecord>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, name, age, contact_info, symptoms, diagnosis, recommendations, created_at \
                 FROM patients ORDER BY created_at DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}
