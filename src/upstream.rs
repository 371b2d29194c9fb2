//! OpenWeatherMap client backing the proxy route
//!
//! The proxy forwards one current-weather call upstream. On a non-success
//! upstream status the caller answers with that status and a generic body,
//! never with the upstream's own error payload.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::instrument;

use crate::config::UpstreamConfig;

static API_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Result of one upstream call that got an HTTP answer
#[derive(Debug)]
pub enum FetchOutcome {
    /// Upstream answered 2xx; the JSON body is forwarded verbatim
    Success(Value),
    /// Upstream answered with this non-success status code
    Failed(u16),
}

/// Fetch current weather for the given coordinates.
///
/// Network failures, a missing API key, and unparseable success bodies
/// surface as `Err`; upstream HTTP errors surface as [`FetchOutcome::Failed`].
#[instrument(skip(config))]
pub async fn fetch_current_weather(
    config: &UpstreamConfig,
    lat: &str,
    lon: &str,
) -> Result<FetchOutcome> {
    let api_key = config
        .api_key
        .as_deref()
        .context("Missing OPENWEATHER_API_KEY env var")?;

    let url = format!("{}/weather", config.base_url.trim_end_matches('/'));
    tracing::debug!("Calling the upstream weather API");

    let response = API_CLIENT
        .get(url)
        .query(&[
            ("lat", lat),
            ("lon", lon),
            ("appid", api_key),
            ("units", "metric"),
        ])
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Upstream returned an error status");
        return Ok(FetchOutcome::Failed(status.as_u16()));
    }

    let body: Value = response
        .json()
        .await
        .context("Failed to parse upstream weather response")?;
    Ok(FetchOutcome::Success(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(base_url: &str) -> UpstreamConfig {
        UpstreamConfig {
            api_key: Some("test_api_key_123".to_string()),
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_an_error() {
        let mut config = config_for("https://api.openweathermap.org/data/2.5");
        config.api_key = None;

        let result = fetch_current_weather(&config, "6.9", "79.8").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("OPENWEATHER_API_KEY")
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_error() {
        // Nothing listens on port 1; the connect fails before any HTTP
        // status exists, so the outcome is Err rather than Failed.
        let config = config_for("http://127.0.0.1:1");
        let result = fetch_current_weather(&config, "6.9", "79.8").await;
        assert!(result.is_err());
    }
}
