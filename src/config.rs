//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default TTL in seconds applied when a caller gives no expiration (10 minutes).
pub const DEFAULT_TTL_SECS: u64 = 600;

/// Default interval in seconds between background sweeps.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 1;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default TTL in seconds for entries added without explicit expiration
    pub default_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 600)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            sweep_interval: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, 600);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.default_ttl(), Duration::from_secs(600));
    }

    // Single test touches the environment so parallel tests cannot race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_SWEEP_INTERVAL");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, DEFAULT_TTL_SECS);
        assert_eq!(config.sweep_interval, DEFAULT_SWEEP_INTERVAL_SECS);

        env::set_var("CACHE_DEFAULT_TTL", "30");
        env::set_var("CACHE_SWEEP_INTERVAL", "0");
        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, 30);
        assert_eq!(config.sweep_interval, DEFAULT_SWEEP_INTERVAL_SECS);

        env::set_var("CACHE_DEFAULT_TTL", "not-a-number");
        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, DEFAULT_TTL_SECS);

        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_SWEEP_INTERVAL");
    }
}
