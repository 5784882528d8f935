//! Cell selection and the detail payload.
//!
//! Selection is a two-state machine: `Unselected` and `Selected(topic,
//! difficulty)`. Clicking a cell always selects it (re-clicking the same cell
//! keeps it selected) and closing returns to `Unselected`.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{Difficulty, SetId};
use crate::routes::matrix::{CellDetail, MatrixCell, SetBreakdown};
use crate::services::matrix::{accuracy_percent, cell_key};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Unselected,
    Selected {
        topic: String,
        difficulty: Difficulty,
    },
}

impl Selection {
    pub fn click(self, topic: impl Into<String>, difficulty: Difficulty) -> Self {
        Selection::Selected {
            topic: topic.into(),
            difficulty,
        }
    }

    pub fn close(self) -> Self {
        Selection::Unselected
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }

    /// The selected (topic, difficulty), if any.
    pub fn target(&self) -> Option<(&str, Difficulty)> {
        match self {
            Selection::Unselected => None,
            Selection::Selected { topic, difficulty } => Some((topic.as_str(), *difficulty)),
        }
    }
}

/// Look up the selected cell. `None` when nothing is selected or the
/// selected pair has no bucket.
pub fn select_cell<'a>(
    groups: &'a HashMap<String, MatrixCell>,
    selection: &Selection,
) -> Option<&'a MatrixCell> {
    let (topic, difficulty) = selection.target()?;
    groups.get(&cell_key(topic, difficulty))
}

/// Per-set breakdown of a cell, in the cell's set order.
pub fn set_breakdown(cell: &MatrixCell) -> Vec<SetBreakdown> {
    let mut order: Vec<SetId> = Vec::new();
    let mut seen: HashSet<&SetId> = HashSet::new();
    let mut tallies: HashMap<&SetId, (String, usize, usize)> = HashMap::new();

    for question in &cell.questions {
        if seen.insert(&question.set_id) {
            order.push(question.set_id.clone());
        }
        let entry = tallies
            .entry(&question.set_id)
            .or_insert_with(|| (question.set_title.clone(), 0, 0));
        entry.1 += 1;
        if question.correct {
            entry.2 += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|set_id| {
            let (set_title, count, correct_count) = tallies.remove(&set_id)?;
            Some(SetBreakdown {
                set_id,
                set_title,
                count,
                correct_count,
                accuracy: accuracy_percent(correct_count, count),
            })
        })
        .collect()
}

/// Build the detail payload for a selected cell.
pub fn cell_detail(cell: &MatrixCell) -> CellDetail {
    CellDetail {
        cell: cell.clone(),
        sets: set_breakdown(cell),
    }
}
