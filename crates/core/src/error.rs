use crate::types::MedicationId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found (ID: {id})")]
    NotFound {
        entity: &'static str,
        id: MedicationId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Not-found error for the `medication` entity.
    pub fn medication_not_found(id: MedicationId) -> Self {
        Self::NotFound {
            entity: "medication",
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias used by the repository and service ports.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_id() {
        let id = uuid::Uuid::nil();
        let err = CoreError::medication_not_found(id);
        assert_eq!(
            err.to_string(),
            "medication not found (ID: 00000000-0000-0000-0000-000000000000)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn storage_error_is_not_not_found() {
        assert!(!CoreError::Storage("connection refused".into()).is_not_found());
    }
}
