//! High-level data-source service layer.
//!
//! Repository-agnostic operations that work with any
//! [`PracticeSetRepository`]. The CLI and the tests go through these rather
//! than calling repository methods directly.
//!
//! # Usage
//!
//! ```no_run
//! use practice_review::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::with_sample_data();
//!
//!     let sets = services::list_practice_set_infos(&repo).await?;
//!     println!("Found {} practice sets", sets.len());
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{PracticeSetRepository, RepositoryResult};
use crate::models::{PracticeSet, SetId};
use crate::routes::landing::PracticeSetInfo;
use crate::services::MatrixSession;

// ==================== Health ====================

/// Check if the data source is healthy.
pub async fn health_check<R: PracticeSetRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Practice Sets ====================

/// List every practice set in repository order.
pub async fn list_practice_sets<R: PracticeSetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<PracticeSet>> {
    repo.list_practice_sets().await
}

/// List lightweight summaries of every practice set.
pub async fn list_practice_set_infos<R: PracticeSetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<PracticeSetInfo>> {
    let sets = repo.list_practice_sets().await?;
    Ok(sets.iter().map(PracticeSetInfo::from).collect())
}

/// Fetch one practice set by id.
pub async fn get_practice_set<R: PracticeSetRepository + ?Sized>(
    repo: &R,
    id: &SetId,
) -> RepositoryResult<PracticeSet> {
    repo.get_practice_set(id).await
}

// ==================== Matrix ====================

/// Load every practice set and start a matrix session over them.
///
/// An unhealthy repository is reported but not fatal; the listing call
/// decides whether data can be served.
pub async fn load_session<R: PracticeSetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<MatrixSession> {
    if !repo.health_check().await? {
        warn!("Repository reports unhealthy status; loading practice sets anyway");
    }

    let sets = repo.list_practice_sets().await?;
    let question_count: usize = sets.iter().map(|s| s.questions.len()).sum();
    info!(
        "Loaded {} practice sets ({} questions) for the performance matrix",
        sets.len(),
        question_count
    );

    Ok(MatrixSession::new(sets))
}
