//! Record extraction and filtering.
//!
//! These are the first two stages of the matrix pipeline:
//!
//! - [`extraction`]: Flatten practice sets into set-annotated questions
//! - [`filtering`]: Apply the conjunctive filter predicates of a [`FilterState`]
//!
//! # Example
//!
//! ```
//! use practice_review::db::sample_practice_sets;
//! use practice_review::models::FilterState;
//! use practice_review::transformations::{apply_filters, extract_questions};
//!
//! let sets = sample_practice_sets();
//! let questions = extract_questions(&sets);
//! let filters = FilterState::default().with_subject(Some("Math".to_string()));
//! let math = apply_filters(&questions, &filters);
//! assert!(math.iter().all(|q| q.subject == "Math"));
//! ```
//!
//! [`FilterState`]: crate::models::FilterState

pub mod extraction;
pub mod filtering;

pub use extraction::{extract_questions, subjects, topics};
pub use filtering::{
    apply_filters, matches_difficulty, matches_performance, matches_subject, matches_topic_search,
    matches_topics,
};
