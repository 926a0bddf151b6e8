// In-memory market data, keyed by ticker.
// Used as a provider in its own right (fixtures, demos) and by the CSV
// provider once a file has been parsed.
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Bar, Ticker};
use shared::utils::normalize_range;
use std::collections::HashMap;

use super::MarketDataProvider;
use crate::error::{EngineError, Result};

#[derive(Debug, Default, Clone)]
pub struct MarketDataStore {
    bars: HashMap<Ticker, Vec<Bar>>,
    live_prices: HashMap<Ticker, f64>,
}

impl MarketDataStore {
    pub fn new() -> Self {
        MarketDataStore {
            bars: HashMap::new(),
            live_prices: HashMap::new(),
        }
    }

    /// Merges `new_bars` into the ticker's series, keeping it sorted by date
    /// with one bar per date.
    pub fn add_bars(&mut self, ticker: &Ticker, new_bars: Vec<Bar>) {
        let series = self.bars.entry(ticker.clone()).or_default();
        series.extend(new_bars);
        series.sort_by_key(|b| b.date);
        series.dedup_by_key(|b| b.date);
    }

    pub fn set_live_price(&mut self, ticker: &Ticker, price: f64) {
        self.live_prices.insert(ticker.clone(), price);
    }

    pub fn get_bars(&self, ticker: &Ticker, start: NaiveDate, end: NaiveDate) -> Option<Vec<Bar>> {
        self.bars
            .get(ticker)
            .map(|series| normalize_range(series.clone(), start, end))
    }

    /// Explicit live price if one was set, otherwise the last close.
    pub fn latest_price(&self, ticker: &Ticker) -> Option<f64> {
        self.live_prices
            .get(ticker)
            .copied()
            .or_else(|| self.bars.get(ticker).and_then(|s| s.last()).map(|b| b.close))
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.bars.contains_key(ticker) || self.live_prices.contains_key(ticker)
    }
}

#[async_trait]
impl MarketDataProvider for MarketDataStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn daily_bars(&self, ticker: &Ticker, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>> {
        if !self.contains(ticker) {
            return Err(EngineError::TickerNotFound(ticker.to_string()));
        }
        Ok(self.get_bars(ticker, start, end).unwrap_or_default())
    }

    async fn live_price(&self, ticker: &Ticker) -> Result<f64> {
        if !self.contains(ticker) {
            return Err(EngineError::TickerNotFound(ticker.to_string()));
        }
        self.latest_price(ticker).ok_or_else(|| EngineError::NoData {
            ticker: ticker.to_string(),
            reason: "no live price or closing price available".to_string(),
        })
    }
}
