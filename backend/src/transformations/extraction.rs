use std::collections::BTreeSet;

use crate::models::{FlatQuestion, PracticeSet};

/// Flatten practice sets into one question list.
///
/// Sets keep their input order and questions keep their order within a set.
/// Every question is annotated with the owning set's id, subject and title.
pub fn extract_questions(sets: &[PracticeSet]) -> Vec<FlatQuestion> {
    let total: usize = sets.iter().map(|s| s.questions.len()).sum();
    let mut flat = Vec::with_capacity(total);

    for set in sets {
        let title = set.title();
        flat.extend(
            set.questions
                .iter()
                .map(|q| FlatQuestion::from_question(q, set, &title)),
        );
    }

    flat
}

/// Distinct subjects, sorted ascending.
pub fn subjects(sets: &[PracticeSet]) -> Vec<String> {
    sets.iter()
        .map(|s| s.subject.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct topics, sorted ascending.
pub fn topics(questions: &[FlatQuestion]) -> Vec<String> {
    questions
        .iter()
        .map(|q| q.topic.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
