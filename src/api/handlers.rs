//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use super::extract::ApiQuery;
use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::fetch::CachedFetcher;
use crate::models::{
    DeleteResponse, FetchQuery, HealthResponse, KeyQuery, SetResponse, StatsResponse,
};

/// Header telling clients whether `/fetch` was served from the cache
pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared cache handle
    pub cache: TimedCache,
    /// Fetch-through client writing into `cache`
    pub fetcher: CachedFetcher,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: TimedCache, fetch_timeout: Duration) -> Result<Self> {
        let fetcher = CachedFetcher::new(cache.clone(), fetch_timeout)?;
        Ok(Self { cache, fetcher })
    }

    /// Creates a new AppState from configuration, starting the cache sweeper.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = TimedCache::new(config.cache_config());
        Self::new(cache, config.fetch_timeout())
    }
}

fn validated_key(query: KeyQuery) -> Result<String> {
    match query.validate() {
        Some(error_msg) => Err(ServiceError::InvalidRequest(error_msg)),
        None => Ok(query.key),
    }
}

fn millis_saturating(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn octet_stream(body: Bytes) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"))],
        body,
    )
        .into_response()
}

/// Handler for GET /fetch?url=...
///
/// Returns the upstream body, from the cache when possible.
pub async fn fetch_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FetchQuery>,
) -> Result<Response> {
    let fetched = state.fetcher.fetch(&query.url).await?;
    let cache_status = if fetched.cache_hit { "HIT" } else { "MISS" };

    let mut response = octet_stream(fetched.body);
    response
        .headers_mut()
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static(cache_status));
    Ok(response)
}

/// Handler for GET /entry?key=...
pub async fn get_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<KeyQuery>,
) -> Result<Response> {
    let key = validated_key(query)?;
    let value = state
        .cache
        .get(&key)
        .await
        .ok_or(ServiceError::NotFound(key))?;

    Ok(octet_stream(value))
}

/// Handler for PUT /entry?key=...
///
/// The raw request body becomes the stored value.
pub async fn set_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<KeyQuery>,
    body: Bytes,
) -> Result<Json<SetResponse>> {
    let key = validated_key(query)?;
    let size = body.len();
    state.cache.add(key.clone(), body).await;

    Ok(Json(SetResponse::new(key, size)))
}

/// Handler for DELETE /entry?key=...
pub async fn delete_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<KeyQuery>,
) -> Result<Json<DeleteResponse>> {
    let key = validated_key(query)?;
    match state.cache.remove(&key).await {
        Some(_) => Ok(Json(DeleteResponse::new(key))),
        None => Err(ServiceError::NotFound(key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let config = state.cache.config();

    Json(StatsResponse::new(
        &stats,
        millis_saturating(config.sweep_interval),
        millis_saturating(config.max_age),
    ))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.is_sweeping().await))
}
