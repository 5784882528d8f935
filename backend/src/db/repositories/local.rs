//! In-memory local repository implementation.
//!
//! All data lives in memory, giving fast, deterministic, and isolated
//! execution for the dashboard, the CLI and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{
    ErrorContext, PracticeSetRepository, RepositoryError, RepositoryResult,
};
use crate::models::{PracticeSet, SetId};

/// In-memory local repository.
///
/// # Example
/// ```
/// use practice_review::db::repositories::LocalRepository;
/// use practice_review::db::repository::PracticeSetRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = LocalRepository::with_sample_data();
/// let sets = repo.list_practice_sets().await.unwrap();
/// assert!(!sets.is_empty());
/// # });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    sets: Vec<PracticeSet>,
    index: HashMap<SetId, usize>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            sets: Vec::new(),
            index: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository holding `sets`.
    ///
    /// # Errors
    /// `ValidationError` if two sets share an id.
    pub fn with_sets(sets: Vec<PracticeSet>) -> RepositoryResult<Self> {
        let repo = Self::new();
        for set in sets {
            repo.insert(set)?;
        }
        Ok(repo)
    }

    /// Create a repository seeded with the built-in sample data.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            for set in crate::db::sample::sample_practice_sets() {
                let idx = data.sets.len();
                data.index.insert(set.id.clone(), idx);
                data.sets.push(set);
            }
        }
        repo
    }

    /// Add a practice set.
    ///
    /// # Errors
    /// `ValidationError` if a set with the same id is already stored.
    pub fn insert(&self, set: PracticeSet) -> RepositoryResult<()> {
        let mut data = self.data.write();
        if data.index.contains_key(&set.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Duplicate practice set id {}", set.id),
                ErrorContext::new("insert")
                    .with_entity("practice_set")
                    .with_entity_id(&set.id),
            ));
        }
        let idx = data.sets.len();
        data.index.insert(set.id.clone(), idx);
        data.sets.push(set);
        Ok(())
    }

    /// Set the health status for testing unavailable sources.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.sets.clear();
        data.index.clear();
    }

    /// Number of stored practice sets.
    pub fn len(&self) -> usize {
        self.data.read().sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PracticeSetRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_practice_sets(&self) -> RepositoryResult<Vec<PracticeSet>> {
        Ok(self.data.read().sets.clone())
    }

    async fn get_practice_set(&self, id: &SetId) -> RepositoryResult<PracticeSet> {
        let data = self.data.read();
        data.index
            .get(id)
            .and_then(|idx| data.sets.get(*idx))
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Practice set {} not found", id),
                    ErrorContext::new("get_practice_set")
                        .with_entity("practice_set")
                        .with_entity_id(id),
                )
            })
    }
}
