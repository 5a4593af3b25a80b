//! Configuration Module
//!
//! Handles loading cache and server configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

// == Defaults ==
/// Default period between sweep passes
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Default age after which an entry becomes eligible for eviction
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60);

/// Smallest sweep interval the sweeper will run with
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Cache Config ==
/// Timing parameters for a [`TimedCache`](crate::cache::TimedCache).
///
/// The sweep interval decides how often stale entries are looked for; the
/// max age decides which entries count as stale. The two are independent:
/// a cache swept every 5 seconds with a one minute max age only drops
/// entries older than one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Period between background sweep passes
    pub sweep_interval: Duration,
    /// Entries strictly older than this are removed by the next sweep
    pub max_age: Duration,
}

impl CacheConfig {
    /// Creates a cache config, clamping a zero sweep interval to [`MIN_SWEEP_INTERVAL`].
    pub fn new(sweep_interval: Duration, max_age: Duration) -> Self {
        Self {
            sweep_interval: clamp_sweep_interval(sweep_interval),
            max_age,
        }
    }

    /// Config with the given sweep interval and the default max age.
    pub fn with_sweep_interval(sweep_interval: Duration) -> Self {
        Self::new(sweep_interval, DEFAULT_MAX_AGE)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

// == Service Config ==
/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Background sweep interval in milliseconds
    pub sweep_interval_ms: u64,
    /// Maximum entry age in seconds
    pub max_age_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upstream request timeout in seconds
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEEP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 300000)
    /// - `MAX_AGE_SECS` - Age before an entry is swept, in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FETCH_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sweep_interval_ms: parse_env("SWEEP_INTERVAL_MS").unwrap_or(defaults.sweep_interval_ms),
            max_age_secs: parse_env("MAX_AGE_SECS").unwrap_or(defaults.max_age_secs),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            fetch_timeout_secs: parse_env("FETCH_TIMEOUT_SECS")
                .unwrap_or(defaults.fetch_timeout_secs),
        }
    }

    /// Timing parameters for the cache.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(
            Duration::from_millis(self.sweep_interval_ms),
            Duration::from_secs(self.max_age_secs),
        )
    }

    /// Timeout applied to upstream fetches.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL.as_millis() as u64,
            max_age_secs: DEFAULT_MAX_AGE.as_secs(),
            server_port: 3000,
            fetch_timeout_secs: 10,
        }
    }
}

/// Raises intervals below [`MIN_SWEEP_INTERVAL`] to it.
pub(crate) fn clamp_sweep_interval(interval: Duration) -> Duration {
    if interval < MIN_SWEEP_INTERVAL {
        warn!(
            "Sweep interval {:?} is below the minimum, using {:?}",
            interval, MIN_SWEEP_INTERVAL
        );
        MIN_SWEEP_INTERVAL
    } else {
        interval
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.sweep_interval_ms, 300_000);
        assert_eq!(config.max_age_secs, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SWEEP_INTERVAL_MS");
        env::remove_var("MAX_AGE_SECS");
        env::remove_var("SERVER_PORT");
        env::remove_var("FETCH_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.sweep_interval_ms, 300_000);
        assert_eq!(config.max_age_secs, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_cache_config_from_service_config() {
        let config = Config {
            sweep_interval_ms: 250,
            max_age_secs: 30,
            ..Config::default()
        };

        let cache_config = config.cache_config();
        assert_eq!(cache_config.sweep_interval, Duration::from_millis(250));
        assert_eq!(cache_config.max_age, Duration::from_secs(30));
    }

    #[test]
    fn test_cache_config_defaults_are_decoupled() {
        let config = CacheConfig::with_sweep_interval(Duration::from_millis(5));
        assert_eq!(config.sweep_interval, Duration::from_millis(5));
        assert_eq!(config.max_age, DEFAULT_MAX_AGE);
    }

    #[test]
    fn test_zero_sweep_interval_is_clamped() {
        let config = CacheConfig::new(Duration::ZERO, DEFAULT_MAX_AGE);
        assert_eq!(config.sweep_interval, MIN_SWEEP_INTERVAL);
    }
}
