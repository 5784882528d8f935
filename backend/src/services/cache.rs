//! Memoization of matrix snapshots.
//!
//! Snapshots are keyed on the dataset checksum and the filter state. Selection
//! is not part of the key: the selected cell is looked up from a cached
//! snapshot on every call.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::models::FilterState;
use crate::services::matrix::MatrixSnapshot;

pub const DEFAULT_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    checksum: String,
    filters: FilterState,
}

#[derive(Default)]
struct CacheEntries {
    snapshots: HashMap<CacheKey, Arc<MatrixSnapshot>>,
    /// Insertion order, oldest first.
    order: VecDeque<CacheKey>,
}

/// Bounded, thread-safe snapshot cache. The oldest entry is evicted first.
pub struct MatrixCache {
    capacity: usize,
    entries: Mutex<CacheEntries>,
}

impl Default for MatrixCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl MatrixCache {
    /// Create a cache holding at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(CacheEntries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.lock().snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.snapshots.clear();
        entries.order.clear();
    }

    /// Return the cached snapshot for `(checksum, filters)`, building and
    /// storing it with `build` on a miss.
    pub fn get_or_build(
        &self,
        checksum: &str,
        filters: &FilterState,
        build: impl FnOnce() -> MatrixSnapshot,
    ) -> Arc<MatrixSnapshot> {
        let key = CacheKey {
            checksum: checksum.to_string(),
            filters: filters.clone(),
        };

        if let Some(hit) = self.entries.lock().snapshots.get(&key) {
            log::debug!("matrix cache hit for dataset {}", checksum);
            return Arc::clone(hit);
        }

        // Build outside the lock; a concurrent builder of the same key just
        // overwrites with an equal snapshot.
        let snapshot = Arc::new(build());

        let mut entries = self.entries.lock();
        if entries
            .snapshots
            .insert(key.clone(), Arc::clone(&snapshot))
            .is_none()
        {
            entries.order.push_back(key);
        }
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.snapshots.remove(&oldest);
            }
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sample_practice_sets;
    use crate::models::Difficulty;
    use crate::transformations::{extract_questions, subjects};
    use std::cell::Cell;

    fn build_for(filters: &FilterState) -> MatrixSnapshot {
        let sets = sample_practice_sets();
        MatrixSnapshot::build(&extract_questions(&sets), subjects(&sets), filters)
    }

    #[test]
    fn test_hit_skips_build() {
        let cache = MatrixCache::default();
        let filters = FilterState::default();
        let builds = Cell::new(0);

        let first = cache.get_or_build("abc", &filters, || {
            builds.set(builds.get() + 1);
            build_for(&filters)
        });
        let second = cache.get_or_build("abc", &filters, || {
            builds.set(builds.get() + 1);
            build_for(&filters)
        });

        assert_eq!(builds.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_filters_and_checksum_are_part_of_key() {
        let cache = MatrixCache::default();
        let filters = FilterState::default();
        let narrowed = FilterState::default().with_difficulty(Difficulty::Easy, false);

        cache.get_or_build("abc", &filters, || build_for(&filters));
        cache.get_or_build("abc", &narrowed, || build_for(&narrowed));
        cache.get_or_build("def", &filters, || build_for(&filters));

        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_oldest_evicted_at_capacity() {
        let cache = MatrixCache::new(2);
        let filters = FilterState::default();
        let builds = Cell::new(0);
        let fetch = |checksum: &str| {
            cache.get_or_build(checksum, &filters, || {
                builds.set(builds.get() + 1);
                build_for(&filters)
            });
        };

        fetch("a");
        fetch("b");
        fetch("c");
        assert_eq!(builds.get(), 3);

        // "a" was evicted, "c" is still cached
        fetch("c");
        assert_eq!(builds.get(), 3);
        fetch("a");
        assert_eq!(builds.get(), 4);
    }

    #[test]
    fn test_clear() {
        let cache = MatrixCache::new(0);
        assert_eq!(cache.capacity(), 1);
        let filters = FilterState::default();
        cache.get_or_build("abc", &filters, || build_for(&filters));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
