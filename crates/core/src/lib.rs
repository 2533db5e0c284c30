//! Domain layer for the medication service.
//!
//! Holds the [`medication::Medication`] entity, the error taxonomy shared by
//! every layer, and the repository/service ports that the persistence and
//! HTTP crates plug into.

pub mod error;
pub mod medication;
pub mod memory;
pub mod repository;
pub mod seed;
pub mod service;
pub mod types;
