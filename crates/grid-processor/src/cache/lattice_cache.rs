//! Concurrent get-or-compute cache keyed by lattice point.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use geo_common::GridLocation;

use crate::types::CacheStats;

/// Memo table for a pure `GridLocation -> f64` function.
///
/// Lookups take the read lock; a miss computes the value without holding
/// any lock and then inserts under the write lock. Two threads racing on
/// the same key may both compute it, the first insert wins and both see
/// the same value.
#[derive(Debug, Default)]
pub struct LatticeCache {
    entries: RwLock<HashMap<GridLocation, f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LatticeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache pre-sized for the full global lattice.
    pub fn with_global_capacity() -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(GridLocation::COUNT)),
            ..Self::default()
        }
    }

    // Entries are plain floats, so a writer that panicked cannot leave the
    // map half-updated; keep using it.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<GridLocation, f64>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<GridLocation, f64>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Try to get a value from the cache.
    pub fn get(&self, key: &GridLocation) -> Option<f64> {
        let value = self.read().get(key).copied();
        match value {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        value
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, key: GridLocation, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = compute();

        // Double-check after acquiring write lock
        *self.write().entry(key).or_insert(value)
    }

    /// Check if a key exists in the cache without touching the statistics.
    pub fn contains(&self, key: &GridLocation) -> bool {
        self.read().contains_key(key)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_compute_once() {
        let cache = LatticeCache::new();
        let calls = AtomicUsize::new(0);
        let key = GridLocation::new(10, 20);

        for _ in 0..3 {
            let value = cache.get_or_compute(key, || {
                calls.fetch_add(1, Ordering::SeqCst);
                42.0
            });
            assert_eq!(value, 42.0);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = LatticeCache::new();
        let key = GridLocation::new(0, 0);
        assert_eq!(cache.get_or_compute(key, || 1.0), 1.0);
        // A stale computation racing in later must not replace the entry
        assert_eq!(*cache.write().entry(key).or_insert(2.0), 1.0);
        assert_eq!(cache.get(&key), Some(1.0));
    }

    #[test]
    fn test_contains_does_not_count() {
        let cache = LatticeCache::with_global_capacity();
        assert!(cache.is_empty());
        assert!(!cache.contains(&GridLocation::new(1, 1)));
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_concurrent_access_is_consistent() {
        let cache = LatticeCache::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for lat in -10..10 {
                        let key = GridLocation::new(lat, lat * 2);
                        let value = cache.get_or_compute(key, || lat as f64 * 1.5);
                        assert_eq!(value, lat as f64 * 1.5);
                    }
                });
            }
        });
        assert_eq!(cache.len(), 20);
    }
}
