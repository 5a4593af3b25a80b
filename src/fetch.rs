//! Fetch-Through Module
//!
//! Serves repeated GET requests from a [`TimedCache`], going to the network
//! only on a miss.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::debug;

use crate::cache::TimedCache;
use crate::error::{Result, ServiceError};

// == Fetched ==
/// A response body and whether it came from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub body: Bytes,
    pub cache_hit: bool,
}

// == Cached Fetcher ==
/// HTTP GET client backed by a [`TimedCache`] keyed by URL.
///
/// Only successful responses are stored; transport errors and non-2xx
/// statuses are returned to the caller and leave the cache untouched.
#[derive(Debug, Clone)]
pub struct CachedFetcher {
    client: Client,
    cache: TimedCache,
}

impl CachedFetcher {
    /// Creates a fetcher with its own client using the given request timeout.
    pub fn new(cache: TimedCache, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(cache, client))
    }

    pub fn with_client(cache: TimedCache, client: Client) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        let url = parse_url(url)?;

        if let Some(body) = self.cache.get(url.as_str()).await {
            debug!("Cache hit for {}", url);
            return Ok(Fetched {
                body,
                cache_hit: true,
            });
        }

        debug!("Cache miss for {}, fetching", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        self.cache.add(url.as_str(), body.clone()).await;

        Ok(Fetched {
            body,
            cache_hit: false,
        })
    }
}

/// Accepts absolute http(s) URLs only.
fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ServiceError::InvalidRequest(format!("Invalid URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ServiceError::InvalidRequest(format!(
            "Unsupported URL scheme '{}'",
            other
        ))),
    }
}
