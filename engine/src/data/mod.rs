// Market data acquisition.
// Every source implements `MarketDataProvider`; the dashboard service only
// ever talks to the trait object.
pub mod csv_parser;
pub mod market_data;
pub mod yahoo;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Bar, Ticker};
use std::sync::Arc;

use crate::config::{EngineSettings, ProviderKind};
use crate::error::Result;

pub use csv_parser::CsvProvider;
pub use market_data::MarketDataStore;
pub use yahoo::YahooProvider;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Daily bars dated within the closed range `[start, end]`, oldest first.
    async fn daily_bars(&self, ticker: &Ticker, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>>;

    /// Latest traded price.
    async fn live_price(&self, ticker: &Ticker) -> Result<f64>;
}

/// Builds the provider selected in the settings.
pub fn provider_from_settings(settings: &EngineSettings) -> Result<Arc<dyn MarketDataProvider>> {
    let provider: Arc<dyn MarketDataProvider> = match settings.provider {
        ProviderKind::Yahoo => Arc::new(YahooProvider::with_base_url(
            settings.yahoo_base_url.clone(),
            &settings.user_agent,
        )?),
        ProviderKind::Csv => Arc::new(CsvProvider::new(settings.csv_dir.clone())),
    };
    tracing::info!(provider = provider.name(), "Market data provider ready");
    Ok(provider)
}
