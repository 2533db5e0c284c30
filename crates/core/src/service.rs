//! Service port and its default implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::medication::Medication;
use crate::repository::MedicationRepository;
use crate::types::MedicationId;

/// Operations the HTTP layer performs on medications.
#[async_trait]
pub trait MedicationService: Send + Sync {
    async fn create(&self, medication: Medication) -> CoreResult<Medication>;
    async fn list(&self) -> CoreResult<Vec<Medication>>;
    async fn get(&self, id: MedicationId) -> CoreResult<Medication>;
    async fn update(&self, medication: Medication) -> CoreResult<Medication>;
    async fn delete(&self, id: MedicationId) -> CoreResult<()>;
}

/// Default [`MedicationService`]: assigns ids on create and delegates
/// everything else to the repository unchanged.
#[derive(Clone)]
pub struct MedicationManager {
    repo: Arc<dyn MedicationRepository>,
}

impl MedicationManager {
    pub fn new(repo: Arc<dyn MedicationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MedicationService for MedicationManager {
    /// Any id supplied by the caller is discarded.
    async fn create(&self, mut medication: Medication) -> CoreResult<Medication> {
        medication.id = MedicationId::new_v4();
        self.repo.create(&medication).await
    }

    async fn list(&self) -> CoreResult<Vec<Medication>> {
        self.repo.list().await
    }

    async fn get(&self, id: MedicationId) -> CoreResult<Medication> {
        self.repo.get(id).await
    }

    /// The caller is responsible for setting the id it means to update.
    async fn update(&self, medication: Medication) -> CoreResult<Medication> {
        self.repo.update(&medication).await
    }

    async fn delete(&self, id: MedicationId) -> CoreResult<()> {
        self.repo.delete(id).await
    }
}
