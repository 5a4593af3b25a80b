//! Cache Entry Module
//!
//! Defines a single stored value together with its creation time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored value and the instant it was added.
///
/// Entries are never mutated in place; overwriting a key replaces the whole
/// entry, which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// When the entry was added
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was added.
    pub fn age(&self) -> Duration {
        self.age_at(Instant::now())
    }

    /// Age relative to `now`, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Returns true once the entry's age strictly exceeds `max_age`.
    ///
    /// An entry exactly `max_age` old is still fresh.
    pub fn is_stale(&self, now: Instant, max_age: Duration) -> bool {
        self.age_at(now) > max_age
    }
}
