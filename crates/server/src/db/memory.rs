use async_trait::async_trait;
use chrono::Utc;
use health_advisor_core::{NewPatientRecord, PatientRecord, sort_newest_first};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PatientStore;
use crate::error::AppError;

/// Process-local patient store, used when no database is configured
#[derive(Default)]
pub struct InMemoryPatientStore {
    records: RwLock<Vec<PatientRecord>>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    async fn insert(&self, record: NewPatientRecord) -> Result<Uuid, AppError> {
        record.validate()?;

        let id = Uuid::new_v4();
        let mut records = self.records.write().await;
        records.push(PatientRecord::from_new(id, Utc::now(), record));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<PatientRecord>, AppError> {
        // Reverse first so records sharing a timestamp list latest insert first
        let mut records: Vec<_> = self.records.read().await.iter().rev().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
