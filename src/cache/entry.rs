//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, opaque to the cache
    pub value: V,
    /// Monotonic write time
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with `created_at`.
    pub fn new(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl` as seen from `now`.
    ///
    /// Boundary condition: an entry is stale once `now - created_at >= ttl`,
    /// so it is served for strictly less than the full TTL.
    pub fn is_stale_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) >= ttl
    }

    // == Age ==
    /// Time elapsed since the entry was written.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
