//! Timed Cache Module
//!
//! The shareable cache handle: a locked [`CacheStore`] plus the sweep task
//! that keeps it free of stale entries.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::{spawn_sweep_task, SweepHandle};

// == Timed Cache ==
/// Thread-safe byte cache whose entries are dropped once they outlive the
/// configured max age.
///
/// Cloning is cheap and every clone shares the same store. Eviction is
/// driven only by the background sweep: a stale entry stays readable until
/// the next pass removes it.
///
/// The sweeper runs until [`stop`](Self::stop) is called or the last clone
/// is dropped.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use std::time::Duration;
/// use timed_cache::TimedCache;
///
/// let cache = TimedCache::with_sweep_interval(Duration::from_secs(5));
/// cache.add("https://example.com", "testdata").await;
/// assert_eq!(cache.get("https://example.com").await.as_deref(), Some(&b"testdata"[..]));
/// cache.stop().await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    sweeper: Arc<Mutex<Option<SweepHandle>>>,
    config: CacheConfig,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: CacheConfig) -> Self {
        let config = CacheConfig::new(config.sweep_interval, config.max_age);
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let handle = spawn_sweep_task(store.clone(), config.sweep_interval, config.max_age);

        Self {
            store,
            sweeper: Arc::new(Mutex::new(Some(handle))),
            config,
        }
    }

    /// Creates a cache swept every `sweep_interval` with the default max age.
    pub fn with_sweep_interval(sweep_interval: Duration) -> Self {
        Self::new(CacheConfig::with_sweep_interval(sweep_interval))
    }

    // == Add ==
    /// Stores `value` under `key`, overwriting any previous value and
    /// restarting its age.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.store.lock().await.insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the value stored under `key`, if any.
    ///
    /// Age is not checked here. The returned [`Bytes`] is an immutable view;
    /// later writes to the same key do not affect it.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    // == Remove ==
    /// Removes `key`, returning the value it held.
    pub async fn remove(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.remove(key)
    }

    /// Number of stored entries, including stale ones not yet swept.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    // == Stop ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Once this returns no further sweep runs; entries stay until removed or
    /// overwritten. Calling it again is a no-op.
    pub async fn stop(&self) {
        // Held until the task exits so a concurrent caller waits for it too
        let mut sweeper = self.sweeper.lock().await;
        if let Some(handle) = sweeper.take() {
            handle.shutdown().await;
            info!("Cache sweeper stopped");
        }
    }

    /// Returns true while the sweep task is running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(SweepHandle::is_running)
    }
}
