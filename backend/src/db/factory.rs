//! Repository factory for dependency injection.
//!
//! Creates repository instances based on runtime configuration: the
//! `REPOSITORY_TYPE` environment variable or a `review.toml` file.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::loader::load_practice_sets;
use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{PracticeSetRepository, RepositoryError, RepositoryResult};

/// Environment variable selecting the repository type.
pub const REPOSITORY_TYPE_ENV: &str = "REPOSITORY_TYPE";
/// Environment variable holding the JSON dataset path.
pub const DATA_PATH_ENV: &str = "PRACTICE_DATA_PATH";

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Empty in-memory repository
    Local,
    /// In-memory repository seeded with the built-in sample sets
    Sample,
    /// In-memory repository loaded from a JSON file
    Json,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "sample", "json").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "sample" | "mock" => Ok(Self::Sample),
            "json" | "file" => Ok(Self::Json),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`. When unset, defaults to Json if
    /// `PRACTICE_DATA_PATH` is present, otherwise Sample. An unparseable
    /// value falls back to Sample.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(REPOSITORY_TYPE_ENV) {
            return val.parse().unwrap_or_else(|e| {
                log::warn!("{}; falling back to sample data", e);
                Self::Sample
            });
        }

        if std::env::var(DATA_PATH_ENV).is_ok() {
            Self::Json
        } else {
            Self::Sample
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use practice_review::db::{RepositoryFactory, RepositoryType};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let repo = rt
///     .block_on(RepositoryFactory::create(RepositoryType::Sample, None))
///     .unwrap();
/// let sets = rt.block_on(repo.list_practice_sets()).unwrap();
/// assert!(!sets.is_empty());
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `data_path` - JSON dataset path (required for Json)
    pub async fn create(
        repo_type: RepositoryType,
        data_path: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::Sample => Ok(Self::create_sample()),
            RepositoryType::Json => {
                let path = data_path.ok_or_else(|| {
                    RepositoryError::configuration(format!(
                        "JSON repository requires a data path ({} or repository.data_path)",
                        DATA_PATH_ENV
                    ))
                })?;
                let repo = Self::create_from_json(path).await?;
                Ok(repo as Arc<dyn PracticeSetRepository>)
            }
        }
    }

    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn PracticeSetRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository holding the sample dataset.
    pub fn create_sample() -> Arc<dyn PracticeSetRepository> {
        Arc::new(LocalRepository::with_sample_data())
    }

    /// Create an in-memory repository from a JSON dataset file.
    pub async fn create_from_json(path: &Path) -> RepositoryResult<Arc<LocalRepository>> {
        let owned = path.to_path_buf();
        let sets = tokio::task::spawn_blocking(move || load_practice_sets(owned))
            .await
            .map_err(|e| RepositoryError::internal(format!("Dataset load task failed: {}", e)))??;
        log::info!("loaded {} practice sets from {}", sets.len(), path.display());
        Ok(Arc::new(LocalRepository::with_sets(sets)?))
    }

    /// Create repository from environment configuration.
    ///
    /// See [`RepositoryType::from_env`].
    pub async fn from_env() -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
        let repo_type = RepositoryType::from_env();
        let data_path = std::env::var(DATA_PATH_ENV).ok();
        Self::create(repo_type, data_path.as_deref().map(Path::new)).await
    }

    /// Create repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_config(&config).await
    }

    /// Create repository from the default configuration file location.
    pub async fn from_default_config() -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_config(&config).await
    }

    /// Create repository from a [`RepositoryConfig`] instance.
    pub async fn from_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn PracticeSetRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let data_path = config.json_data_path()?;
        Self::create(repo_type, data_path).await
    }
}
