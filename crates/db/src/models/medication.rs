//! Medication row model.

use hippo_core::error::CoreError;
use hippo_core::medication::{Form, Medication};
use hippo_core::types::MedicationId;
use sqlx::FromRow;

/// A row from the `medication` table. `form` is kept as raw text so a
/// corrupt value surfaces as a conversion error rather than a decode panic.
#[derive(Debug, Clone, FromRow)]
pub struct MedicationRow {
    pub id: MedicationId,
    pub name: String,
    pub dosage: i64,
    pub form: String,
}

impl TryFrom<MedicationRow> for Medication {
    type Error = CoreError;

    /// Fails with [`CoreError::Storage`] when the stored form is unknown.
    fn try_from(row: MedicationRow) -> Result<Self, Self::Error> {
        let form = Form::from_str_db(&row.form).map_err(|e| {
            CoreError::Storage(format!("unable to parse medication {} from db: {e}", row.id))
        })?;
        Ok(Medication {
            id: row.id,
            name: row.name,
            dosage: row.dosage,
            form,
        })
    }
}

impl From<&Medication> for MedicationRow {
    fn from(m: &Medication) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            dosage: m.dosage,
            form: m.form.as_str().to_string(),
        }
    }
}
