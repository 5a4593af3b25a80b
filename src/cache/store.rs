//! Cache Store Module
//!
//! The unsynchronised map behind [`TimedCache`](super::TimedCache). All
//! locking happens one level up; every method here assumes exclusive access.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to entry map with usage counters.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Usage counters
    stats: CacheStats,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its age.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the stored value regardless of its age.
    ///
    /// Staleness is only enforced by [`sweep`](Self::sweep).
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Bytes> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    // == Sweep ==
    /// Removes every entry older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, max_age));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
