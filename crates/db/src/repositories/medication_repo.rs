//! Repository for the `medication` table.

use async_trait::async_trait;
use hippo_core::error::{CoreError, CoreResult};
use hippo_core::medication::Medication;
use hippo_core::repository::MedicationRepository;
use hippo_core::types::MedicationId;

use crate::models::medication::MedicationRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, dosage, form";

/// PostgreSQL-backed [`MedicationRepository`].
#[derive(Clone)]
pub struct PgMedicationRepository {
    pool: DbPool,
}

impl PgMedicationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Wrap a driver error as a storage fault, keeping `context` for the log.
fn storage(context: &str, err: sqlx::Error) -> CoreError {
    CoreError::Storage(format!("{context}: {err}"))
}

#[async_trait]
impl MedicationRepository for PgMedicationRepository {
    async fn create(&self, medication: &Medication) -> CoreResult<Medication> {
        let row = MedicationRow::from(medication);
        sqlx::query("INSERT INTO medication (id, name, dosage, form) VALUES ($1, $2, $3, $4)")
            .bind(row.id)
            .bind(&row.name)
            .bind(row.dosage)
            .bind(&row.form)
            .execute(&self.pool)
            .await
            .map_err(|e| storage("unable to insert medication", e))?;
        self.get(medication.id).await
    }

    async fn list(&self) -> CoreResult<Vec<Medication>> {
        let query = format!("SELECT {COLUMNS} FROM medication ORDER BY name, id");
        let rows = sqlx::query_as::<_, MedicationRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage("unable to list medications", e))?;
        rows.into_iter().map(Medication::try_from).collect()
    }

    async fn get(&self, id: MedicationId) -> CoreResult<Medication> {
        let query = format!("SELECT {COLUMNS} FROM medication WHERE id = $1");
        let row = sqlx::query_as::<_, MedicationRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage("unable to get medication", e))?
            .ok_or_else(|| CoreError::medication_not_found(id))?;
        Medication::try_from(row)
    }

    async fn update(&self, medication: &Medication) -> CoreResult<Medication> {
        let row = MedicationRow::from(medication);
        let result = sqlx::query(
            "UPDATE medication SET name = $2, dosage = $3, form = $4 WHERE id = $1",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(row.dosage)
        .bind(&row.form)
        .execute(&self.pool)
        .await
        .map_err(|e| storage("unable to update medication", e))?;
        tracing::debug!(id = %row.id, rows = result.rows_affected(), "Medication row updated");
        self.get(medication.id).await
    }

    async fn delete(&self, id: MedicationId) -> CoreResult<()> {
        sqlx::query("DELETE FROM medication WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage("unable to delete medication", e))?;
        Ok(())
    }
}
