//! Configuration Module
//!
//! Server configuration. Only the listen port is read from the environment;
//! upstream endpoints and the cache TTL are fixed defaults kept as fields so
//! tests can point the clients elsewhere.

use std::env;
use std::time::Duration;

/// Default listen port when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 5000;

/// Lifetime of a cached lookup result
pub const CACHE_TTL: Duration = Duration::from_secs(600);

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the Open-Meteo geocoding API
    pub geocoding_url: String,
    /// Base URL of the Open-Meteo forecast API
    pub forecast_url: String,
    /// Base URL of the wttr.in text forecast service
    pub wttr_url: String,
    /// Time-to-live for cached lookup results
    pub cache_ttl: Duration,
}

impl Config {
    /// Creates a new Config, applying the `PORT` override if present.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            geocoding_url: "https://geocoding-api.open-meteo.com".to_string(),
            forecast_url: "https://api.open-meteo.com".to_string(),
            wttr_url: "https://wttr.in".to_string(),
            cache_ttl: CACHE_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert!(config.geocoding_url.starts_with("https://"));
        assert!(config.forecast_url.starts_with("https://"));
    }

    #[test]
    fn test_config_from_env_port() {
        env::set_var("PORT", "8088");
        let config = Config::from_env();
        assert_eq!(config.server_port, 8088);

        env::set_var("PORT", "not-a-port");
        let config = Config::from_env();
        assert_eq!(config.server_port, DEFAULT_PORT);

        env::remove_var("PORT");
        let config = Config::from_env();
        assert_eq!(config.server_port, DEFAULT_PORT);
    }
}
