//! Wire format for medications.
//!
//! Keeps the JSON shape independent of the domain types: the id travels as a
//! string and the form as its text label.

use hippo_core::error::CoreError;
use hippo_core::medication::{Form, Medication};
use hippo_core::types::MedicationId;
use serde::{Deserialize, Serialize};

/// `{"id": string, "name": string, "dosage": integer, "form": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationDto {
    /// Ignored on input; the server decides the id.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: i64,
    /// An absent form decodes as `""` and is rejected by [`Self::into_medication`].
    #[serde(default)]
    pub form: String,
}

impl MedicationDto {
    /// Convert to a domain value with a placeholder (nil) id.
    ///
    /// Fails with [`CoreError::Validation`] when `form` is not a known label.
    pub fn into_medication(self) -> Result<Medication, CoreError> {
        let form = Form::from_str_db(&self.form)?;
        Ok(Medication {
            id: MedicationId::nil(),
            name: self.name,
            dosage: self.dosage,
            form,
        })
    }
}

impl From<Medication> for MedicationDto {
    fn from(m: Medication) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name,
            dosage: m.dosage,
            form: m.form.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_without_id() {
        let dto: MedicationDto =
            serde_json::from_value(json!({"name": "Aspirin", "dosage": 500, "form": "tablet"}))
                .unwrap();
        assert_eq!(dto.id, "");
        assert_eq!(dto.dosage, 500);
    }

    #[test]
    fn missing_fields_default_then_fail_on_form() {
        let dto: MedicationDto = serde_json::from_value(json!({"name": "Aspirin"})).unwrap();
        assert_eq!(dto.dosage, 0);
        assert_eq!(dto.form, "");
        assert_matches!(dto.into_medication(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let result =
            serde_json::from_value::<MedicationDto>(json!({"name": "Aspirin", "dosage": "lots"}));
        assert!(result.is_err());
    }

    #[test]
    fn body_id_is_discarded() {
        let dto = MedicationDto {
            id: MedicationId::new_v4().to_string(),
            name: "Aspirin".into(),
            dosage: 500,
            form: "tablet".into(),
        };
        let med = dto.into_medication().unwrap();
        assert!(med.id.is_nil());
        assert_eq!(med.form, Form::Tablet);
    }

    #[test]
    fn unknown_form_fails_conversion() {
        let dto = MedicationDto {
            id: String::new(),
            name: "Aspirin".into(),
            dosage: 500,
            form: "Tablet".into(),
        };
        assert_matches!(dto.into_medication(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn serializes_domain_value() {
        let id = MedicationId::new_v4();
        let dto = MedicationDto::from(Medication {
            id,
            ..Medication::unsaved("Cough Syrup", 10, Form::Liquid)
        });
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"id": id.to_string(), "name": "Cough Syrup", "dosage": 10, "form": "liquid"})
        );
    }
}
