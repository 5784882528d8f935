//! Public API surface of the matrix engine.
//!
//! Consolidates the payload types produced for the dashboard. All types
//! derive Serialize/Deserialize for JSON serialization.

pub use crate::models::Difficulty;
pub use crate::models::FilterState;
pub use crate::models::FlatQuestion;
pub use crate::models::PerformanceBucket;
pub use crate::models::PracticeSet;
pub use crate::models::Question;
pub use crate::models::QuestionId;
pub use crate::models::SetId;
pub use crate::routes::landing::PracticeSetInfo;
pub use crate::routes::matrix::CellDetail;
pub use crate::routes::matrix::GridRow;
pub use crate::routes::matrix::MatrixCell;
pub use crate::routes::matrix::MatrixData;
pub use crate::routes::matrix::SetBreakdown;
pub use crate::routes::matrix::TotalSummary;
pub use crate::services::Selection;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
