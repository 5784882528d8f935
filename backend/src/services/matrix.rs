//! Performance matrix aggregation.
//!
//! Turns a flat question list into the (topic × difficulty) grid: grouping into
//! cells, row/column/grand totals, and dense grid assembly. Every stage is a
//! pure function of its inputs.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{Difficulty, FilterState, FlatQuestion, PracticeSet, SetId};
use crate::routes::matrix::{GridRow, MatrixCell, MatrixData, TotalSummary};
use crate::services::selection::{cell_detail, select_cell, Selection};
use crate::transformations::{apply_filters, extract_questions, subjects, topics};

/// Percentage of correct answers, 0 when `count` is 0.
///
/// The ratio is scaled in `f64` before rounding half away from zero, the
/// same result the dashboard's `Math.round(correct / count * 100)` gives.
/// A ratio like 29/200 scales to 14.499999999999998 and rounds to 14.
pub fn accuracy_percent(correct: usize, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    let correct = correct.min(count);
    (correct as f64 / count as f64 * 100.0).round() as u8
}

/// Grouping key of a cell, `"{topic}-{difficulty}"`.
pub fn cell_key(topic: &str, difficulty: Difficulty) -> String {
    format!("{}-{}", topic, difficulty)
}

/// Running count/correct/set-id tally shared by the total reductions.
#[derive(Debug, Default)]
struct Tally {
    count: usize,
    correct_count: usize,
    set_ids: Vec<SetId>,
    seen: HashSet<SetId>,
}

impl Tally {
    fn add(&mut self, question: &FlatQuestion) {
        self.count += 1;
        if question.correct {
            self.correct_count += 1;
        }
        if self.seen.insert(question.set_id.clone()) {
            self.set_ids.push(question.set_id.clone());
        }
    }

    fn into_summary(self) -> TotalSummary {
        TotalSummary {
            count: self.count,
            correct_count: self.correct_count,
            accuracy: accuracy_percent(self.correct_count, self.count),
            set_ids: self.set_ids,
        }
    }
}

/// Partition questions into cells keyed by [`cell_key`].
pub fn group_questions(questions: &[FlatQuestion]) -> HashMap<String, MatrixCell> {
    let mut groups: HashMap<String, MatrixCell> = HashMap::new();
    let mut seen_sets: HashMap<String, HashSet<SetId>> = HashMap::new();

    for question in questions {
        let key = cell_key(&question.topic, question.difficulty);
        let cell = groups
            .entry(key.clone())
            .or_insert_with(|| MatrixCell::empty(question.topic.clone(), question.difficulty));

        cell.count += 1;
        if question.correct {
            cell.correct_count += 1;
        }
        if seen_sets
            .entry(key)
            .or_default()
            .insert(question.set_id.clone())
        {
            cell.set_ids.push(question.set_id.clone());
        }
        cell.questions.push(question.clone());
    }

    for cell in groups.values_mut() {
        cell.accuracy = accuracy_percent(cell.correct_count, cell.count);
    }

    groups
}

/// Totals per topic over the given topic universe.
///
/// Every requested topic appears in the result, with zero counts when no
/// question matches. Questions whose topic is outside the universe are ignored.
pub fn compute_topic_totals(
    questions: &[FlatQuestion],
    topics: &[String],
) -> BTreeMap<String, TotalSummary> {
    let mut tallies: BTreeMap<String, Tally> = topics
        .iter()
        .map(|t| (t.clone(), Tally::default()))
        .collect();

    for question in questions {
        if let Some(tally) = tallies.get_mut(&question.topic) {
            tally.add(question);
        }
    }

    tallies
        .into_iter()
        .map(|(topic, tally)| (topic, tally.into_summary()))
        .collect()
}

/// Totals per difficulty, only for the active difficulties.
pub fn compute_difficulty_totals(
    questions: &[FlatQuestion],
    active: &[Difficulty],
) -> BTreeMap<Difficulty, TotalSummary> {
    let mut tallies: BTreeMap<Difficulty, Tally> =
        active.iter().map(|d| (*d, Tally::default())).collect();

    for question in questions {
        if let Some(tally) = tallies.get_mut(&question.difficulty) {
            tally.add(question);
        }
    }

    tallies
        .into_iter()
        .map(|(difficulty, tally)| (difficulty, tally.into_summary()))
        .collect()
}

/// Single total over every question.
pub fn compute_grand_total(questions: &[FlatQuestion]) -> TotalSummary {
    let mut tally = Tally::default();
    for question in questions {
        tally.add(question);
    }
    tally.into_summary()
}

/// Build the dense grid: one row per topic present in `questions`, sorted
/// ascending, each with exactly one cell per active difficulty.
pub fn assemble_grid(
    questions: &[FlatQuestion],
    groups: &HashMap<String, MatrixCell>,
    active: &[Difficulty],
) -> Vec<GridRow> {
    topics(questions)
        .into_iter()
        .map(|topic| {
            let cells = active
                .iter()
                .map(|difficulty| {
                    groups
                        .get(&cell_key(&topic, *difficulty))
                        .cloned()
                        .unwrap_or_else(|| MatrixCell::empty(topic.clone(), *difficulty))
                })
                .collect();
            GridRow { topic, cells }
        })
        .collect()
}

/// Everything the matrix shows for one (dataset, filters) pair, independent
/// of the current selection.
#[derive(Debug, Clone)]
pub struct MatrixSnapshot {
    pub groups: HashMap<String, MatrixCell>,
    pub grid_rows: Vec<GridRow>,
    pub topics: Vec<String>,
    pub difficulties: Vec<Difficulty>,
    pub subjects: Vec<String>,
    pub topic_totals: BTreeMap<String, TotalSummary>,
    pub difficulty_totals: BTreeMap<Difficulty, TotalSummary>,
    pub grand_total: TotalSummary,
}

impl MatrixSnapshot {
    /// Run filter, grouping, aggregation and grid assembly.
    ///
    /// `questions` is the unfiltered extractor output; `subjects` the distinct
    /// subjects of the dataset.
    pub fn build(questions: &[FlatQuestion], subjects: Vec<String>, filters: &FilterState) -> Self {
        let filtered = apply_filters(questions, filters);
        let active = filters.active_difficulties();

        let groups = group_questions(&filtered);
        let grid_rows = assemble_grid(&filtered, &groups, &active);
        let row_topics: Vec<String> = grid_rows.iter().map(|r| r.topic.clone()).collect();

        let snapshot = Self {
            topic_totals: compute_topic_totals(&filtered, &row_topics),
            difficulty_totals: compute_difficulty_totals(&filtered, &active),
            grand_total: compute_grand_total(&filtered),
            topics: topics(questions),
            difficulties: active,
            subjects,
            grid_rows,
            groups,
        };

        log::debug!(
            "matrix built: {} rows x {} columns, {} cells, {} questions",
            snapshot.grid_rows.len(),
            snapshot.difficulties.len(),
            snapshot.groups.len(),
            snapshot.grand_total.count
        );

        snapshot
    }

    /// Cell for a (topic, difficulty) pair, if any question landed there.
    pub fn cell(&self, topic: &str, difficulty: Difficulty) -> Option<&MatrixCell> {
        self.groups.get(&cell_key(topic, difficulty))
    }

    /// Output bundle for the given selection.
    pub fn to_data(&self, selection: &Selection) -> MatrixData {
        MatrixData {
            grid_rows: self.grid_rows.clone(),
            topics: self.topics.clone(),
            difficulties: self.difficulties.clone(),
            subjects: self.subjects.clone(),
            topic_totals: self.topic_totals.clone(),
            difficulty_totals: self.difficulty_totals.clone(),
            grand_total: self.grand_total.clone(),
            selected_cell_data: select_cell(&self.groups, selection).map(cell_detail),
        }
    }
}

/// Full pipeline from practice sets to the output bundle.
pub fn compute_matrix_data(
    sets: &[PracticeSet],
    filters: &FilterState,
    selection: &Selection,
) -> MatrixData {
    let questions = extract_questions(sets);
    MatrixSnapshot::build(&questions, subjects(sets), filters).to_data(selection)
}
