//! End-to-end pipeline scenarios through the public API.

mod support;

use std::collections::BTreeMap;

use practice_review::db::{parse_practice_sets, sample_practice_sets};
use practice_review::models::{Difficulty, FilterState, PerformanceBucket, SetId};
use practice_review::services::{compute_matrix_data, MatrixCache, MatrixSession, Selection};
use support::{practice_set, question};

#[test]
fn test_basic_grouping_scenario() {
    let sets = vec![practice_set(
        "S1",
        "Math",
        0,
        vec![
            question("q1", "Algebra", Difficulty::Easy, true),
            question("q2", "Algebra", Difficulty::Easy, false),
        ],
    )];

    let data = compute_matrix_data(
        &sets,
        &FilterState::default(),
        &Selection::Unselected.click("Algebra", Difficulty::Easy),
    );
    let detail = data.selected_cell_data.expect("Algebra-Easy is populated");

    assert_eq!(detail.cell.count, 2);
    assert_eq!(detail.cell.correct_count, 1);
    assert_eq!(detail.cell.accuracy, 50);
    assert_eq!(detail.cell.set_ids, vec![SetId::new("S1")]);
    assert_eq!(detail.sets.len(), 1);
    assert_eq!(detail.sets[0].set_title, "Math Drill (2024-03-01)");
}

#[test]
fn test_empty_cell_synthesis_scenario() {
    let sets = vec![practice_set(
        "S1",
        "Math",
        0,
        vec![question("q1", "Geometry", Difficulty::Hard, true)],
    )];
    let filters = FilterState::default()
        .with_difficulty(Difficulty::Medium, false)
        .with_difficulty(Difficulty::VeryHard, false);

    let data = compute_matrix_data(&sets, &filters, &Selection::Unselected);

    assert_eq!(data.grid_rows.len(), 1);
    let row = &data.grid_rows[0];
    assert_eq!(row.topic, "Geometry");
    assert_eq!(row.cells.len(), 2);
    assert_eq!(row.cells[0].difficulty, Difficulty::Easy);
    assert_eq!(row.cells[0].count, 0);
    assert_eq!(row.cells[0].accuracy, 0);
    assert!(row.cells[0].set_ids.is_empty());
    assert_eq!(row.cells[1].difficulty, Difficulty::Hard);
    assert_eq!(row.cells[1].count, 1);
    assert_eq!(row.cells[1].accuracy, 100);
}

#[test]
fn test_absent_difficulty_key_excludes_question() {
    let sets = vec![practice_set(
        "S1",
        "Math",
        0,
        vec![
            question("q1", "Algebra", Difficulty::VeryHard, true),
            question("q2", "Algebra", Difficulty::Easy, true),
        ],
    )];
    let difficulties: BTreeMap<Difficulty, bool> = [
        (Difficulty::Easy, true),
        (Difficulty::Medium, true),
        (Difficulty::Hard, true),
    ]
    .into_iter()
    .collect();
    let filters = FilterState::default().with_difficulties(difficulties);

    let data = compute_matrix_data(&sets, &filters, &Selection::Unselected);

    assert_eq!(data.grand_total.count, 1);
    assert!(!data.difficulty_totals.contains_key(&Difficulty::VeryHard));
    assert_eq!(
        data.difficulties,
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    );
}

#[test]
fn test_reset_after_mutations_restores_defaults() {
    let sets = sample_practice_sets();
    let total: usize = sets.iter().map(|s| s.questions.len()).sum();
    let mut session = MatrixSession::new(sets);

    session.set_filter_subject(Some("Reading".to_string()));
    session.toggle_difficulty(Difficulty::Easy);
    session.toggle_topic("Inference");
    session.set_filter_performance(Some(PerformanceBucket::Low));
    session.set_topic_search_input("inf");
    assert!(session.data().grand_total.count < total);

    session.reset_filters();
    assert_eq!(session.filters(), &FilterState::default());
    assert_eq!(session.data().grand_total.count, total);
}

#[test]
fn test_reclicking_cell_keeps_detail() {
    let mut session = MatrixSession::new(sample_practice_sets());
    let (topic, difficulty) = {
        let data = session.data();
        let cell = data
            .grid_rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .find(|c| c.count > 0)
            .expect("sample data populates at least one cell")
            .clone();
        (cell.topic, cell.difficulty)
    };

    session.handle_cell_click(&topic, difficulty);
    let first = session.selected_cell_data();
    assert!(first.is_some());

    session.handle_cell_click(&topic, difficulty);
    assert_eq!(session.selected_cell_data(), first);

    session.close_cell_detail();
    assert!(session.selected_cell_data().is_none());
}

#[test]
fn test_json_dataset_through_cached_session() {
    let json = r#"[
        {
            "id": "S1",
            "subject": "Writing",
            "type": "Module Drill",
            "dateCompleted": "2024-05-04T12:00:00Z",
            "accuracy": 67,
            "questions": [
                {"id": "q1", "topic": "Grammar", "difficulty": "Medium", "correct": true},
                {"id": "q2", "topic": "Grammar", "difficulty": "Medium", "correct": true},
                {"id": "q3", "topic": "Grammar", "difficulty": "Medium", "correct": false,
                 "partiallyCorrect": true, "answered": true, "timeSpent": 80}
            ]
        }
    ]"#;
    let sets = parse_practice_sets(json).unwrap();
    let session = MatrixSession::new(sets);
    let cache = MatrixCache::new(4);

    let first = session.data_cached(&cache);
    let second = session.data_cached(&cache);
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    let grammar = &first.topic_totals["Grammar"];
    assert_eq!(grammar.count, 3);
    assert_eq!(grammar.correct_count, 2);
    assert_eq!(grammar.accuracy, 67);
    assert_eq!(first.subjects, vec!["Writing".to_string()]);
}

#[test]
fn test_performance_buckets_are_independent() {
    let mut partial = question("q2", "Algebra", Difficulty::Easy, false);
    partial.partially_correct = true;
    let sets = vec![practice_set(
        "S1",
        "Math",
        0,
        vec![question("q1", "Algebra", Difficulty::Easy, true), partial],
    )];

    let count = |bucket| {
        compute_matrix_data(
            &sets,
            &FilterState::default().with_performance(Some(bucket)),
            &Selection::Unselected,
        )
        .grand_total
        .count
    };

    assert_eq!(count(PerformanceBucket::High), 1);
    assert_eq!(count(PerformanceBucket::Low), 1);
    assert_eq!(count(PerformanceBucket::Medium), 1);
}
