use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Difficulty, FlatQuestion, SetId};

// =========================================================
// Performance matrix types + route
// =========================================================

/// Aggregation bucket for one (topic, difficulty) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub correct_count: usize,
    /// Rounded percentage in 0..=100, 0 for an empty cell.
    pub accuracy: u8,
    /// Distinct owning sets, in first-seen order.
    pub set_ids: Vec<SetId>,
    /// Member questions in encounter order.
    pub questions: Vec<FlatQuestion>,
}

impl MatrixCell {
    /// Placeholder for a (topic, difficulty) pair with no questions.
    pub fn empty(topic: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            count: 0,
            correct_count: 0,
            accuracy: 0,
            set_ids: Vec::new(),
            questions: Vec::new(),
        }
    }
}

/// Row, column or grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalSummary {
    pub count: usize,
    pub correct_count: usize,
    pub accuracy: u8,
    pub set_ids: Vec<SetId>,
}

/// One matrix row: a topic with one cell per active difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub topic: String,
    pub cells: Vec<MatrixCell>,
}

/// Per-set slice of a selected cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBreakdown {
    pub set_id: SetId,
    pub set_title: String,
    pub count: usize,
    pub correct_count: usize,
    pub accuracy: u8,
}

/// Detail payload of the selected cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDetail {
    pub cell: MatrixCell,
    pub sets: Vec<SetBreakdown>,
}

/// Complete matrix payload handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixData {
    pub grid_rows: Vec<GridRow>,
    /// Every topic in the dataset, for the topic filter options.
    pub topics: Vec<String>,
    /// Active difficulty columns, in canonical order.
    pub difficulties: Vec<Difficulty>,
    pub subjects: Vec<String>,
    pub topic_totals: BTreeMap<String, TotalSummary>,
    pub difficulty_totals: BTreeMap<Difficulty, TotalSummary>,
    pub grand_total: TotalSummary,
    pub selected_cell_data: Option<CellDetail>,
}

/// Report name under which [`MatrixData`] is served.
pub const MATRIX_REPORT: &str = "matrix";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let cell = MatrixCell::empty("Geometry", Difficulty::Easy);
        assert_eq!(cell.topic, "Geometry");
        assert_eq!(cell.count, 0);
        assert_eq!(cell.correct_count, 0);
        assert_eq!(cell.accuracy, 0);
        assert!(cell.set_ids.is_empty());
        assert!(cell.questions.is_empty());
    }

    #[test]
    fn test_difficulty_totals_serialize_with_labels() {
        let mut totals = BTreeMap::new();
        totals.insert(Difficulty::VeryHard, TotalSummary::default());
        let json = serde_json::to_value(&totals).unwrap();
        assert!(json.get("Very Hard").is_some());
    }
}
