// Handler for the live price part of a dashboard request
use chrono::NaiveDate;
use shared::models::{Bar, LiveQuote, Ticker};
use shared::utils::lookback_window;

use super::helpers::reference_close;
use crate::config::DashboardConfig;
use crate::data::MarketDataProvider;
use crate::error::Result;

pub async fn handle_fetch_live_quote(
    provider: &dyn MarketDataProvider,
    config: &DashboardConfig,
    ticker: &Ticker,
    today: NaiveDate,
    history: &[Bar],
) -> Result<LiveQuote> {
    let (start, end) = lookback_window(today, config.chart.live_reference_days);
    let window_bars = provider.daily_bars(ticker, start, end).await?;
    let price = provider.live_price(ticker).await?;

    let reference = reference_close(&window_bars, history, start);
    if reference.is_none() {
        tracing::warn!(ticker = %ticker, %start, %end, "No reference close for the live delta");
    }
    tracing::debug!(ticker = %ticker, price, reference = ?reference, "Fetched live quote");

    Ok(LiveQuote { price, reference_close: reference })
}
