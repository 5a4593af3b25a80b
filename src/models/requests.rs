//! Request DTOs for the cache service API
//!
//! Query string shapes for incoming requests.

use serde::Deserialize;

/// Query for the entry endpoints (`/entry?key=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    /// The cache key
    pub key: String,
}

impl KeyQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Query for the fetch endpoint (`/fetch?url=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct FetchQuery {
    /// Absolute http(s) URL to fetch
    pub url: String,
}
