//! Repository layer.
//!
//! Each repository wraps a [`DbPool`](crate::DbPool) and implements the
//! matching port trait from `hippo_core`.

pub mod medication_repo;

pub use medication_repo::PgMedicationRepository;
