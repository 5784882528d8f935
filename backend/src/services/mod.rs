//! Service layer for the performance matrix.
//!
//! This module sits between the data source and the presentation layer. The
//! aggregation in [`matrix`] and [`selection`] is pure; [`session`] holds the
//! caller's filter/selection state and [`cache`] memoizes snapshots.

pub mod cache;

pub mod matrix;

pub mod selection;

pub mod session;



pub use cache::{MatrixCache, DEFAULT_CACHE_CAPACITY};
pub use matrix::{
    accuracy_percent, assemble_grid, cell_key, compute_difficulty_totals, compute_grand_total,
    compute_matrix_data, compute_topic_totals, group_questions, MatrixSnapshot,
};
pub use selection::{cell_detail, select_cell, set_breakdown, Selection};
pub use session::MatrixSession;
