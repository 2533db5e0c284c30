//! Sample data for development databases.

use crate::error::CoreResult;
use crate::medication::{Form, Medication};
use crate::repository::MedicationRepository;
use crate::types::MedicationId;

/// Ids are fixed so a second seed run recognises rows it already wrote.
const SAMPLES: &[(u128, &str, i64, Form)] = &[
    (0x0b6d_1f3e_58a4_4c1e_9f0a_2d7c_1e5b_0001, "Amoxicillin", 500, Form::Capsule),
    (0x0b6d_1f3e_58a4_4c1e_9f0a_2d7c_1e5b_0002, "Aspirin", 100, Form::Tablet),
    (0x0b6d_1f3e_58a4_4c1e_9f0a_2d7c_1e5b_0003, "Ibuprofen", 200, Form::Tablet),
    (0x0b6d_1f3e_58a4_4c1e_9f0a_2d7c_1e5b_0004, "Lactulose", 15, Form::Liquid),
    (0x0b6d_1f3e_58a4_4c1e_9f0a_2d7c_1e5b_0005, "Omeprazole", 20, Form::Capsule),
];

pub fn sample_medications() -> Vec<Medication> {
    SAMPLES
        .iter()
        .map(|&(id, name, dosage, form)| Medication {
            id: MedicationId::from_u128(id),
            ..Medication::unsaved(name, dosage, form)
        })
        .collect()
}

/// Insert every sample medication that is not already stored.
///
/// Returns how many rows were written; re-running on a seeded store returns 0.
pub async fn seed_medications(repo: &dyn MedicationRepository) -> CoreResult<usize> {
    let mut inserted = 0;
    for medication in sample_medications() {
        match repo.get(medication.id).await {
            Ok(_) => continue,
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
        repo.create(&medication).await?;
        inserted += 1;
    }
    Ok(inserted)
}
