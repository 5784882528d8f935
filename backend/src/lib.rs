//! # Practice Review
//!
//! Performance-matrix engine for a standardized-test practice dashboard.
//!
//! Turns a collection of completed practice sets into a topic × difficulty
//! matrix: each cell counts the questions answered at that intersection and
//! their rounded accuracy, with row, column and grand totals. Filters narrow
//! the questions feeding the matrix and a cell selection yields a per-set
//! drill-down.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Practice sets, questions, difficulties and the filter state
//! - [`transformations`]: Question extraction and filter predicates
//! - [`services`]: Grouping, totals, grid assembly, selection and caching
//! - [`routes`]: Matrix and landing payload types
//! - [`api`]: Consolidated DTO re-exports
//! - [`db`]: Practice-set repositories, loaders and configuration
//!
//! ## Pipeline
//!
//! ```text
//! practice sets ─► extract ─► filter ─► group ─► totals ─► dense grid ─► selection
//! ```
//!
//! Every stage is a pure function over immutable inputs; [`services::MatrixSession`]
//! holds the caller's state and recomputes on demand.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

pub mod transformations;
