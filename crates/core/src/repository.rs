//! Persistence port for medications.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::medication::Medication;
use crate::types::MedicationId;

/// Durable CRUD storage for [`Medication`] records, keyed by id.
///
/// Implementations must agree on two behaviours: `get` on a missing id
/// returns [`CoreError::NotFound`](crate::error::CoreError::NotFound), and
/// `delete` on a missing id succeeds. Every other failure is reported as
/// [`CoreError::Storage`](crate::error::CoreError::Storage).
#[async_trait]
pub trait MedicationRepository: Send + Sync {
    /// Insert a medication whose id is already assigned, then read it back.
    async fn create(&self, medication: &Medication) -> CoreResult<Medication>;

    /// All stored medications, ordered by name then id.
    async fn list(&self) -> CoreResult<Vec<Medication>>;

    async fn get(&self, id: MedicationId) -> CoreResult<Medication>;

    /// Overwrite every field except the id, then read the row back.
    ///
    /// A missing id is not detected up front; the read-back reports it.
    async fn update(&self, medication: &Medication) -> CoreResult<Medication>;

    async fn delete(&self, id: MedicationId) -> CoreResult<()>;
}
