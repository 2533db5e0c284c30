//! In-memory [`MedicationRepository`] backed by a map keyed by id.
//!
//! Used by tests and by the `memory` storage backend for running the API
//! without a database. Mirrors the PostgreSQL repository's semantics,
//! including the write-then-read shape of `create` and `update`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::medication::Medication;
use crate::repository::MedicationRepository;
use crate::types::MedicationId;

#[derive(Debug, Default)]
pub struct InMemoryMedicationRepository {
    rows: RwLock<HashMap<MedicationId, Medication>>,
}

impl InMemoryMedicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicationRepository for InMemoryMedicationRepository {
    async fn create(&self, medication: &Medication) -> CoreResult<Medication> {
        {
            let mut rows = self.rows.write().await;
            if rows.contains_key(&medication.id) {
                return Err(CoreError::Storage(format!(
                    "duplicate key value violates unique constraint (ID: {})",
                    medication.id
                )));
            }
            rows.insert(medication.id, medication.clone());
        }
        self.get(medication.id).await
    }

    async fn list(&self) -> CoreResult<Vec<Medication>> {
        let rows = self.rows.read().await;
        let mut all: Vec<Medication> = rows.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn get(&self, id: MedicationId) -> CoreResult<Medication> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::medication_not_found(id))
    }

    async fn update(&self, medication: &Medication) -> CoreResult<Medication> {
        if let Some(row) = self.rows.write().await.get_mut(&medication.id) {
            *row = medication.clone();
        }
        self.get(medication.id).await
    }

    async fn delete(&self, id: MedicationId) -> CoreResult<()> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
