use crate::models::{FilterState, FlatQuestion, PerformanceBucket};

/// Subject filter: exact, case-sensitive match when a subject is set.
pub fn matches_subject(question: &FlatQuestion, subject: Option<&str>) -> bool {
    subject.map(|s| question.subject == s).unwrap_or(true)
}

/// Difficulty filter: the question's difficulty must map to `true`.
/// Difficulties absent from the map are excluded.
pub fn matches_difficulty(question: &FlatQuestion, filters: &FilterState) -> bool {
    filters.is_difficulty_active(question.difficulty)
}

/// Topic filter: exact membership when the topic list is non-empty.
pub fn matches_topics(question: &FlatQuestion, topics: &[String]) -> bool {
    topics.is_empty() || topics.iter().any(|t| *t == question.topic)
}

/// Topic search: case-insensitive substring match on the topic.
/// `search` is expected to be trimmed already.
pub fn matches_topic_search(question: &FlatQuestion, search: Option<&str>) -> bool {
    match search {
        Some(needle) => question
            .topic
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Performance filter. Each bucket is tested on its own flag.
pub fn matches_performance(question: &FlatQuestion, bucket: Option<PerformanceBucket>) -> bool {
    match bucket {
        None => true,
        Some(PerformanceBucket::Low) => !question.correct,
        Some(PerformanceBucket::Medium) => question.partially_correct,
        Some(PerformanceBucket::High) => question.correct,
    }
}

/// Apply every filter in `filters` conjunctively, preserving input order.
pub fn apply_filters(questions: &[FlatQuestion], filters: &FilterState) -> Vec<FlatQuestion> {
    let subject = filters.filter_subject.as_deref();
    let search = filters.trimmed_search();

    let filtered: Vec<FlatQuestion> = questions
        .iter()
        .filter(|q| matches_subject(q, subject))
        .filter(|q| matches_difficulty(q, filters))
        .filter(|q| matches_topics(q, &filters.filter_topics))
        .filter(|q| matches_topic_search(q, search))
        .filter(|q| matches_performance(q, filters.filter_performance))
        .cloned()
        .collect();

    log::debug!(
        "filtered {} of {} questions (subject={:?}, topics={}, search={:?}, performance={:?})",
        filtered.len(),
        questions.len(),
        subject,
        filters.filter_topics.len(),
        search,
        filters.filter_performance
    );

    filtered
}
