//! Repository implementations module.
//!
//! - `local`: In-memory implementation backed by sample data, a JSON export,
//!   or sets inserted by tests
pub mod local;

pub use local::LocalRepository;
