//! Checksums identifying a practice-set dataset.

use sha2::{Digest, Sha256};

use crate::models::PracticeSet;

/// Checksum of every field of a dataset the matrix depends on.
///
/// Every field is prefixed with its byte length, so no field content can
/// shift a boundary between adjacent fields.
pub fn dataset_checksum(sets: &[PracticeSet]) -> String {
    let mut hasher = Sha256::new();
    let mut field = |value: &str| {
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value.as_bytes());
    };

    for set in sets {
        field(set.id.as_str());
        field(&set.subject);
        field(&set.set_type);
        field(&set.date_completed.to_rfc3339());
        field(&set.accuracy.to_string());
        field(&set.questions.len().to_string());
        for q in &set.questions {
            field(q.id.as_str());
            field(&q.topic);
            field(&q.subtopic);
            field(q.difficulty.as_str());
            field(&format!(
                "{}{}{}{}",
                u8::from(q.correct),
                u8::from(q.partially_correct),
                u8::from(q.answered),
                q.time_spent
            ));
        }
    }

    hex::encode(hasher.finalize())
}
