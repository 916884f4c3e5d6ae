//! Configuration for the Fishspot application
//!
//! All settings come from environment variables with sensible defaults;
//! only the weather API key is mandatory and it is validated at startup
//! so a missing credential fails fast instead of mid-render.

use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key (geocoding + current weather)
    pub api_key: String,
    /// Water-body search radius in kilometers
    pub radius_km: f64,
    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Web server port
    pub port: u16,
}

// Default value functions
fn default_radius_km() -> f64 {
    10.0
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("OPENWEATHER_API_KEY").context("Missing OPENWEATHER_API_KEY env var")?;
        if api_key.trim().is_empty() {
            bail!("OPENWEATHER_API_KEY is set but empty");
        }

        Ok(Self {
            api_key,
            radius_km: parse_var("FISHSPOT_RADIUS_KM", default_radius_km())?,
            timeout_secs: parse_var("FISHSPOT_TIMEOUT_SECS", default_timeout_secs())?,
            port: parse_var("FISHSPOT_PORT", default_port())?,
        })
    }

    /// Build a config with defaults around the given API key
    #[must_use]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            radius_km: default_radius_km(),
            timeout_secs: default_timeout_secs(),
            port: default_port(),
        }
    }

    /// Timeout applied to each outbound request
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Search radius converted to meters, as the map-data service expects
    #[must_use]
    pub fn radius_meters(&self) -> u32 {
        (self.radius_km * 1000.0).round() as u32
    }
}

/// Read an env var, falling back to a default when unset and failing
/// with context when set but unparseable.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {name}: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_api_key("test-key");
        assert_eq!(config.radius_km, 10.0);
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_radius_meters() {
        let config = AppConfig::with_api_key("test-key");
        assert_eq!(config.radius_meters(), 10_000);

        let mut config = config;
        config.radius_km = 2.5;
        assert_eq!(config.radius_meters(), 2_500);
    }

    #[test]
    fn test_request_timeout() {
        let config = AppConfig::with_api_key("test-key");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }
}
