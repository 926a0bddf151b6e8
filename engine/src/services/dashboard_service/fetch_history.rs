// Handler for the historical part of a dashboard request
use chrono::NaiveDate;
use shared::models::{Bar, Ticker};
use shared::utils::lookback_window;

use crate::config::DashboardConfig;
use crate::data::MarketDataProvider;
use crate::error::{EngineError, Result};

pub async fn handle_fetch_history(
    provider: &dyn MarketDataProvider,
    config: &DashboardConfig,
    ticker: &Ticker,
    today: NaiveDate,
) -> Result<Vec<Bar>> {
    let (start, end) = lookback_window(today, config.chart.lookback_days);
    tracing::debug!(ticker = %ticker, %start, %end, provider = provider.name(), "Fetching daily history");

    let bars = provider.daily_bars(ticker, start, end).await?;
    if bars.is_empty() {
        tracing::warn!(ticker = %ticker, %start, %end, "Provider returned no bars for the lookback window");
        return Err(EngineError::NoData {
            ticker: ticker.to_string(),
            reason: format!("no daily bars between {} and {}", start, end),
        });
    }
    Ok(bars)
}
