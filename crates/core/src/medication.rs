//! Medication entity and its dosage form.
//!
//! [`Form`] is a closed set. Every textual representation of it (database
//! column, JSON label, `Display`) goes through [`Form::as_str`] and
//! [`Form::from_str_db`] so the two directions cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::MedicationId;

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Physical form a medication is dispensed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Tablet,
    Capsule,
    Liquid,
}

impl Form {
    /// Every variant, in declaration order.
    pub const ALL: [Form; 3] = [Form::Tablet, Form::Capsule, Form::Liquid];

    /// Parse a form label. Matching is exact and case-sensitive.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|form| form.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid medication form '{s}'. Must be one of: tablet, capsule, liquid"
                ))
            })
    }

    /// Label stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Capsule => "capsule",
            Self::Liquid => "liquid",
        }
    }
}

impl FromStr for Form {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_db(s)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Medication
// ---------------------------------------------------------------------------

/// A medication record as seen by the service and repository layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    /// Assigned by the service on create; never changes afterwards.
    pub id: MedicationId,
    pub name: String,
    /// Quantity in the medication's implicit unit.
    pub dosage: i64,
    pub form: Form,
}

impl Medication {
    /// Build a medication that has not been assigned an identifier yet.
    ///
    /// The nil UUID is a placeholder; `MedicationService::create` replaces it.
    pub fn unsaved(name: impl Into<String>, dosage: i64, form: Form) -> Self {
        Self {
            id: MedicationId::nil(),
            name: name.into(),
            dosage,
            form,
        }
    }
}
