//! Repository trait for practice-set data sources.
//!
//! The matrix only ever reads practice sets; implementations decide where
//! they come from (sample data, a JSON export, an in-memory fixture).

use async_trait::async_trait;

use crate::models::{PracticeSet, SetId};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Read-only access to practice sets.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// process-wide behind an `Arc`.
#[async_trait]
pub trait PracticeSetRepository: Send + Sync {
    /// Whether the data source is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Every practice set, in source order.
    async fn list_practice_sets(&self) -> RepositoryResult<Vec<PracticeSet>>;

    /// One practice set by id.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` when no set has this id.
    async fn get_practice_set(&self, id: &SetId) -> RepositoryResult<PracticeSet>;
}
