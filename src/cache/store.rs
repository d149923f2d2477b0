//! Cache Store Module
//!
//! HashMap storage with a single fixed TTL and lazy staleness checks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// Key/value store whose entries are served for a fixed duration after
/// they are written.
///
/// Keys are used verbatim; normalizing them is the caller's job. A stale
/// entry is never removed on read, only replaced by the next `put` for the
/// same key. Callers needing shared access wrap the cache in a lock.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage, at most one entry per key
    entries: HashMap<String, CacheEntry<V>>,
    /// Read statistics
    stats: CacheStats,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns the value for `key` if it was written less than one TTL ago.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// [`get`](Self::get) evaluated at an explicit instant.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_stale_at(now, self.ttl) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        self.put_at(key, value, Instant::now());
    }

    /// [`put`](Self::put) stamped with an explicit instant.
    pub fn put_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        self.entries.insert(key.into(), CacheEntry::new(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
