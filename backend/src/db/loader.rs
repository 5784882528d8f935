//! JSON loading for exported practice sets.
//!
//! The file holds a JSON array of practice sets in the camelCase shape of
//! the dashboard data feed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::PracticeSet;

/// Check invariants serde cannot express: unique set ids and reported
/// accuracy within 0..=100.
pub fn validate_practice_sets(sets: &[PracticeSet]) -> RepositoryResult<()> {
    let mut seen = HashSet::new();
    for set in sets {
        if !seen.insert(&set.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Duplicate practice set id {}", set.id),
                ErrorContext::new("validate_practice_sets")
                    .with_entity("practice_set")
                    .with_entity_id(&set.id),
            ));
        }
        if set.accuracy > 100 {
            return Err(RepositoryError::validation_with_context(
                format!("Accuracy {} is outside 0-100", set.accuracy),
                ErrorContext::new("validate_practice_sets")
                    .with_entity("practice_set")
                    .with_entity_id(&set.id),
            ));
        }
    }
    Ok(())
}

/// Parse and validate practice sets from a JSON string.
pub fn parse_practice_sets(json: &str) -> RepositoryResult<Vec<PracticeSet>> {
    let sets: Vec<PracticeSet> = serde_json::from_str(json).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("Invalid practice set JSON: {}", e),
            ErrorContext::new("parse_practice_sets")
                .with_details(format!("line={}, column={}", e.line(), e.column())),
        )
    })?;

    validate_practice_sets(&sets)?;
    log::debug!("parsed {} practice sets", sets.len());
    Ok(sets)
}

/// Read, parse and validate practice sets from a JSON file.
pub fn load_practice_sets<P: AsRef<Path>>(path: P) -> RepositoryResult<Vec<PracticeSet>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to read practice set file: {}", e),
            ErrorContext::new("load_practice_sets").with_details(path.display().to_string()),
        )
    })?;

    parse_practice_sets(&content).map_err(|e| e.with_operation("load_practice_sets"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"[
        {"id": "S1", "subject": "Math", "type": "Drill", "dateCompleted": "2024-01-01T00:00:00Z",
         "accuracy": 50, "questions": [
            {"id": "q1", "topic": "Algebra", "difficulty": "Easy", "correct": true},
            {"id": "q2", "topic": "Algebra", "difficulty": "Easy", "correct": false}
         ]},
        {"id": "S2", "subject": "Reading", "type": "Drill", "dateCompleted": "2024-01-02T00:00:00Z",
         "accuracy": 0}
    ]"#;

    #[test]
    fn test_parse_valid() {
        let sets = parse_practice_sets(VALID).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].questions.len(), 2);
        assert!(sets[1].questions.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_difficulty() {
        let json = VALID.replace("\"Easy\", \"correct\": true", "\"Legendary\", \"correct\": true");
        let err = parse_practice_sets(&json).unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert!(err.context().details.is_some());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = VALID.replace("\"id\": \"S2\"", "\"id\": \"S1\"");
        let err = parse_practice_sets(&json).unwrap_err();
        assert!(err.to_string().contains("Duplicate practice set id S1"));
    }

    #[test]
    fn test_parse_rejects_accuracy_out_of_range() {
        let json = VALID.replace("\"accuracy\": 50", "\"accuracy\": 150");
        assert!(parse_practice_sets(&json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let sets = load_practice_sets(file.path()).unwrap();
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_practice_sets("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }
}
