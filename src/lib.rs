//! Timed Cache - an in-memory, time-expiring byte cache
//!
//! Entries are keyed by string (usually a request URL) and removed by a
//! background sweep once they outlive a fixed max age. A fetch-through client
//! and a small HTTP service are built on top.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TimedCache;
pub use config::{CacheConfig, Config};
pub use fetch::CachedFetcher;
