/// Medication primary keys are UUIDs, generated server-side.
pub type MedicationId = uuid::Uuid;
