//! Row structs mapping database tables to domain entities.
//!
//! Each submodule contains a `FromRow` row struct plus conversions to and
//! from the corresponding `hippo_core` entity.

pub mod medication;
