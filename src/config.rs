//! Configuration management for the `LankaWeather` service
//!
//! Settings come from environment variables with sensible defaults and are
//! validated before the server starts.

use crate::WeatherAppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Root configuration structure for the `LankaWeather` service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Upstream weather provider configuration
    pub upstream: UpstreamConfig,
    /// Mock synthesizer configuration
    pub synth: SynthConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the web server binds to
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream weather provider settings for the proxy route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// OpenWeatherMap API key; the proxy route fails without one
    pub api_key: Option<String>,
    /// Base URL for the provider API
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u32,
}

/// Mock synthesizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Artificial latency before a synthesized snapshot is returned,
    /// emulating a network fetch
    #[serde(default = "default_synth_delay_ms")]
    pub delay_ms: u64,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_upstream_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_upstream_timeout() -> u32 {
    30
}

fn default_synth_delay_ms() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
            },
            upstream: UpstreamConfig {
                api_key: None,
                base_url: default_upstream_base_url(),
                timeout_seconds: default_upstream_timeout(),
            },
            synth: SynthConfig {
                delay_ms: default_synth_delay_ms(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("WEATHERAPP_PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid WEATHERAPP_PORT value: {port}"))?;
        }
        if let Ok(api_key) = env::var("OPENWEATHER_API_KEY") {
            config.upstream.api_key = Some(api_key);
        }
        if let Ok(base_url) = env::var("WEATHERAPP_UPSTREAM_BASE_URL") {
            config.upstream.base_url = base_url;
        }
        if let Ok(timeout) = env::var("WEATHERAPP_UPSTREAM_TIMEOUT_SECONDS") {
            config.upstream.timeout_seconds = timeout
                .parse()
                .with_context(|| format!("Invalid WEATHERAPP_UPSTREAM_TIMEOUT_SECONDS value: {timeout}"))?;
        }
        if let Ok(delay) = env::var("WEATHERAPP_SYNTH_DELAY_MS") {
            config.synth.delay_ms = delay
                .parse()
                .with_context(|| format!("Invalid WEATHERAPP_SYNTH_DELAY_MS value: {delay}"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_urls()?;
        Ok(())
    }

    /// Validate the upstream API key, when provided
    pub fn validate_api_key(&self) -> Result<()> {
        // The key is optional: the synthesizer path never calls upstream.
        if let Some(api_key) = &self.upstream.api_key {
            if api_key.is_empty() {
                return Err(WeatherAppError::config(
                    "OpenWeatherMap API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(WeatherAppError::config(
                    "OpenWeatherMap API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 100 {
                return Err(WeatherAppError::config(
                    "OpenWeatherMap API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(WeatherAppError::config("Server port cannot be 0").into());
        }

        if self.upstream.timeout_seconds == 0 || self.upstream.timeout_seconds > 300 {
            return Err(WeatherAppError::config(
                "Upstream timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.synth.delay_ms > 60_000 {
            return Err(WeatherAppError::config(
                "Synthesizer delay cannot exceed 60000 ms",
            )
            .into());
        }

        Ok(())
    }

    /// Validate URL configuration values
    fn validate_urls(&self) -> Result<()> {
        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(WeatherAppError::config(
                "Upstream base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.upstream.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.upstream.timeout_seconds, 30);
        assert_eq!(config.synth.delay_ms, 1000);
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_api_key_is_ok() {
        // The key is only needed by the proxy route.
        let config = AppConfig::default();
        assert!(config.validate_api_key().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key() {
        let mut config = AppConfig::default();
        config.upstream.api_key = Some(String::new());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validation_short_api_key() {
        let mut config = AppConfig::default();
        config.upstream.api_key = Some("short".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_numeric_ranges() {
        let mut config = AppConfig::default();
        config.upstream.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        let mut config = AppConfig::default();
        config.synth.delay_ms = 120_000; // Invalid - too high
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "ftp://weather.example".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_environment_variable_override() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("OPENWEATHER_API_KEY", "test_key_from_env");
            env::set_var("WEATHERAPP_SYNTH_DELAY_MS", "250");
        }

        let config = AppConfig::from_env().unwrap();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("OPENWEATHER_API_KEY");
            env::remove_var("WEATHERAPP_SYNTH_DELAY_MS");
        }

        assert_eq!(config.upstream.api_key, Some("test_key_from_env".to_string()));
        assert_eq!(config.synth.delay_ms, 250);
    }
}
