use std::sync::Arc;

use hippo_core::service::MedicationService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service is behind an `Arc` and the pool is a handle.
#[derive(Clone)]
pub struct AppState {
    /// Medication service; stateless apart from the repository it wraps.
    pub medications: Arc<dyn MedicationService>,
    /// Database pool. `None` when running on the in-memory backend.
    pub pool: Option<hippo_db::DbPool>,
}
