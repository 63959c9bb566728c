//! Shared types for grid processing.

use geo_common::Location;
use serde::{Deserialize, Serialize};

/// A continuous scalar field that can be evaluated anywhere on the globe.
///
/// Implementations must be pure: the same location always yields the same
/// value, so pixels can be evaluated in any order on any thread.
pub trait FieldSampler: Sync {
    fn sample(&self, location: &Location) -> f64;
}

impl<T: FieldSampler + ?Sized> FieldSampler for &T {
    fn sample(&self, location: &Location) -> f64 {
        (**self).sample(location)
    }
}

impl<T: FieldSampler + ?Sized> FieldSampler for Box<T> {
    fn sample(&self, location: &Location) -> f64 {
        (**self).sample(location)
    }
}

/// Statistics about a lattice cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Calculate the cache hit rate (0.0 - 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
