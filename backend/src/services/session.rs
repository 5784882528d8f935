//! Caller-held matrix state.
//!
//! [`MatrixSession`] is the state container behind the performance matrix
//! view: the loaded practice sets, the current [`FilterState`], the selected
//! cell and the highlighted set. Actions replace the state values; the
//! aggregation itself stays in the pure functions of [`crate::services::matrix`].

use std::collections::BTreeMap;

use crate::db::checksum::dataset_checksum;
use crate::models::{Difficulty, FilterState, FlatQuestion, PerformanceBucket, PracticeSet, SetId};
use crate::routes::matrix::{CellDetail, MatrixData};
use crate::services::cache::MatrixCache;
use crate::services::matrix::MatrixSnapshot;
use crate::services::selection::{cell_detail, Selection};
use crate::transformations::{extract_questions, subjects};

#[derive(Debug, Clone)]
pub struct MatrixSession {
    sets: Vec<PracticeSet>,
    questions: Vec<FlatQuestion>,
    subjects: Vec<String>,
    checksum: String,
    filters: FilterState,
    selection: Selection,
    highlighted_set: Option<SetId>,
}

impl MatrixSession {
    /// Start a session over `sets` with default filters and no selection.
    pub fn new(sets: Vec<PracticeSet>) -> Self {
        let questions = extract_questions(&sets);
        let subjects = subjects(&sets);
        let checksum = dataset_checksum(&sets);
        log::debug!(
            "matrix session over {} sets / {} questions (checksum {})",
            sets.len(),
            questions.len(),
            checksum
        );
        Self {
            sets,
            questions,
            subjects,
            checksum,
            filters: FilterState::default(),
            selection: Selection::Unselected,
            highlighted_set: None,
        }
    }

    pub fn practice_sets(&self) -> &[PracticeSet] {
        &self.sets
    }

    pub fn questions(&self) -> &[FlatQuestion] {
        &self.questions
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn highlighted_set(&self) -> Option<&SetId> {
        self.highlighted_set.as_ref()
    }

    fn update_filters(&mut self, f: impl FnOnce(FilterState) -> FilterState) {
        let current = std::mem::take(&mut self.filters);
        self.filters = f(current);
    }

    // ---- filter actions ----

    pub fn set_filter_subject(&mut self, subject: Option<String>) {
        self.update_filters(|s| s.with_subject(subject));
    }

    pub fn set_filter_difficulties(&mut self, difficulties: BTreeMap<Difficulty, bool>) {
        self.update_filters(|s| s.with_difficulties(difficulties));
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        self.update_filters(|s| s.toggle_difficulty(difficulty));
    }

    pub fn set_filter_topics(&mut self, topics: Vec<String>) {
        self.update_filters(|s| s.with_topics(topics));
    }

    pub fn toggle_topic(&mut self, topic: &str) {
        self.update_filters(|s| s.toggle_topic(topic));
    }

    pub fn set_filter_performance(&mut self, performance: Option<PerformanceBucket>) {
        self.update_filters(|s| s.with_performance(performance));
    }

    pub fn set_topic_search_input(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update_filters(|s| s.with_topic_search(search));
    }

    pub fn reset_filters(&mut self) {
        self.update_filters(FilterState::reset);
    }

    // ---- selection actions ----

    pub fn handle_cell_click(&mut self, topic: &str, difficulty: Difficulty) {
        let current = std::mem::take(&mut self.selection);
        self.selection = current.click(topic, difficulty);
    }

    /// Clear the selection and the set highlight.
    pub fn close_cell_detail(&mut self) {
        let current = std::mem::take(&mut self.selection);
        self.selection = current.close();
        self.highlighted_set = None;
    }

    /// Highlight a set across detail rows. Has no effect on any aggregate.
    pub fn set_highlighted_set(&mut self, set_id: Option<SetId>) {
        self.highlighted_set = set_id;
    }

    // ---- outputs ----

    pub fn snapshot(&self) -> MatrixSnapshot {
        MatrixSnapshot::build(&self.questions, self.subjects.clone(), &self.filters)
    }

    /// Recompute the output bundle from the current state.
    pub fn data(&self) -> MatrixData {
        self.snapshot().to_data(&self.selection)
    }

    /// Same as [`data`](Self::data), reusing snapshots memoized in `cache`.
    pub fn data_cached(&self, cache: &MatrixCache) -> MatrixData {
        cache
            .get_or_build(&self.checksum, &self.filters, || self.snapshot())
            .to_data(&self.selection)
    }

    /// Detail of the selected cell under the current filters.
    pub fn selected_cell_data(&self) -> Option<CellDetail> {
        let (topic, difficulty) = self.selection.target()?;
        let snapshot = self.snapshot();
        snapshot.cell(topic, difficulty).map(cell_detail)
    }
}
