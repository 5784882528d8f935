//! Data-source module for practice-set storage.
//!
//! Provides the practice-set repository abstraction so the matrix can be fed
//! from different sources (built-in sample data, a JSON export, an empty
//! in-memory store) without the aggregation layer knowing which.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (CLI, MatrixSession)                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │   (in-memory; empty, sample or JSON-loaded)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use practice_review::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env().await?;
//!     let session = services::load_session(repo.as_ref()).await?;
//!     println!("{} questions", session.questions().len());
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod factory;
pub mod loader;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod sample;
pub mod services;


// ==================== Service Layer ====================

pub use services::{
    get_practice_set, health_check, list_practice_set_infos, list_practice_sets, load_session,
};

// ==================== Repository Pattern Exports ====================

pub use checksum::dataset_checksum;
pub use loader::{load_practice_sets, parse_practice_sets, validate_practice_sets};
pub use repo_config::RepositoryConfig;
pub use sample::sample_practice_sets;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, PracticeSetRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};
use tokio::runtime::{Handle, Runtime};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn PracticeSetRepository>> = OnceLock::new();

// Priority: environment variables > review.toml > built-in sample data
async fn create_selected_repository() -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
    let env_configured = std::env::var(factory::REPOSITORY_TYPE_ENV).is_ok()
        || std::env::var(factory::DATA_PATH_ENV).is_ok();
    if env_configured {
        return RepositoryFactory::from_env().await;
    }

    match RepositoryConfig::from_default_location() {
        Ok(config) => RepositoryFactory::from_config(&config).await,
        Err(e) => {
            log::info!("{}; using sample data", e);
            Ok(RepositoryFactory::create_sample())
        }
    }
}

/// Initialize the global repository singleton.
///
/// When called from inside a multi-threaded tokio runtime the repository is
/// created on the current runtime; otherwise a temporary runtime is used.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = match Handle::try_current() {
        Ok(handle) => {
            tokio::task::block_in_place(|| handle.block_on(create_selected_repository()))
        }
        Err(_) => {
            let runtime =
                Runtime::new().context("Failed to create async runtime for repository init")?;
            runtime.block_on(create_selected_repository())
        }
    }
    .map_err(|e| anyhow::Error::msg(e.to_string()))?;

    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn PracticeSetRepository>> {
    if REPOSITORY.get().is_none() {
        init_repository()?;
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
