use anyhow::Result;
use tracing_subscriber::EnvFilter;

use lanka_weather::api::AppState;
use lanka_weather::config::AppConfig;
use lanka_weather::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(port = config.server.port, "Starting LankaWeather");

    let state = AppState::new(config);
    web::run(state).await
}
