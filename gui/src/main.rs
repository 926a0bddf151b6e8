// Live stock price dashboard: serves the page and the JSON API that feeds it.
mod app;
mod components;
mod config;
mod server;
mod state;

use anyhow::Context;
use engine::config::{DashboardConfig, EngineSettings};
use engine::data::provider_from_settings;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,live_stock_dashboard=debug,engine=debug")),
        )
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env();
    let dashboard_config = DashboardConfig::load(server_config.dashboard_config.as_deref())
        .context("Failed to load dashboard configuration")?;
    tracing::info!(
        version = %dashboard_config.version,
        tickers = dashboard_config.tickers.len(),
        "Loaded dashboard configuration"
    );

    let settings = EngineSettings::from_env().context("Invalid engine settings")?;
    let provider = provider_from_settings(&settings).context("Failed to create market data provider")?;

    let state = AppState::new(provider, Arc::new(dashboard_config));
    server::serve(state, &server_config).await
}
