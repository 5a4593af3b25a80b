//! Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::config::clamp_sweep_interval;

// == Sweep Handle ==
/// Owner of a running sweep task.
///
/// Dropping the handle closes the shutdown channel, which also ends the task.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Returns true while the task is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signals the task to stop and waits for it to exit.
    ///
    /// A sweep pass already holding the store lock runs to completion first;
    /// none starts after this returns.
    pub async fn shutdown(self) {
        // The task may already be gone, in which case the channel is closed
        let _ = self.shutdown_tx.send(()).await;

        if let Err(e) = self.task.await {
            warn!("Sweep task ended abnormally: {}", e);
        }
    }
}

/// Spawns a background task that sweeps `store` every `interval`.
///
/// Each pass takes the store lock and removes entries older than `max_age`.
/// The first pass runs one full interval after spawning. Intervals below
/// [`MIN_SWEEP_INTERVAL`](crate::config::MIN_SWEEP_INTERVAL) are raised to it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(5), Duration::from_secs(60));
/// // Later:
/// handle.shutdown().await;
/// ```
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    max_age: Duration,
) -> SweepHandle {
    let interval = clamp_sweep_interval(interval);
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        info!(
            "Starting sweep task: interval={:?}, max_age={:?}",
            interval, max_age
        );

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Fires on an explicit stop and when the handle is dropped
                _ = shutdown_rx.recv() => {
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.sweep(Instant::now(), max_age)
                    };

                    if removed > 0 {
                        info!("Sweep: removed {} stale entries", removed);
                    } else {
                        debug!("Sweep: no stale entries found");
                    }
                }
            }
        }

        info!("Sweep task stopped");
    });

    SweepHandle { shutdown_tx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn new_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_removes_stale_entries() {
        let store = new_store();
        store
            .lock()
            .await
            .insert("expire_soon".to_string(), Bytes::from_static(b"value"));

        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_millis(20),
        );

        time::sleep(Duration::from_millis(45)).await;

        assert_eq!(store.lock().await.get("expire_soon"), None);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_preserves_fresh_entries() {
        let store = new_store();
        store
            .lock()
            .await
            .insert("long_lived".to_string(), Bytes::from_static(b"value"));

        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_secs(3600),
        );

        time::sleep(Duration::from_millis(100)).await;

        let mut guard = store.lock().await;
        assert_eq!(guard.get("long_lived"), Some(Bytes::from_static(b"value")));
        assert!(guard.stats().sweeps >= 5);
        drop(guard);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_sweep_waits_one_interval() {
        let store = new_store();
        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_secs(1),
            Duration::from_secs(60),
        );

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(store.lock().await.stats().sweeps, 0);

        time::sleep(Duration::from_millis(600)).await;
        assert_eq!(store.lock().await.stats().sweeps, 1);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_sweeping() {
        let store = new_store();
        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_millis(10),
        );

        time::sleep(Duration::from_millis(35)).await;
        assert!(handle.is_running());
        handle.shutdown().await;

        let sweeps_at_stop = store.lock().await.stats().sweeps;
        store
            .lock()
            .await
            .insert("key".to_string(), Bytes::from_static(b"v"));

        time::sleep(Duration::from_millis(100)).await;

        let mut guard = store.lock().await;
        assert_eq!(guard.stats().sweeps, sweeps_at_stop);
        assert_eq!(guard.get("key"), Some(Bytes::from_static(b"v")));
    }

    #[tokio::test]
    async fn test_dropping_handle_ends_task() {
        let store = new_store();
        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_secs(60),
        );
        let SweepHandle { shutdown_tx, task } = handle;

        drop(shutdown_tx);

        time::timeout(Duration::from_secs(1), task)
            .await
            .expect("sweep task should exit once the channel closes")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_raised_to_minimum() {
        let store = new_store();
        let handle = spawn_sweep_task(store.clone(), Duration::ZERO, Duration::from_secs(60));

        time::sleep(Duration::from_millis(10)).await;

        assert!(handle.is_running());
        assert!(store.lock().await.stats().sweeps >= 5);
        handle.shutdown().await;
    }
}
