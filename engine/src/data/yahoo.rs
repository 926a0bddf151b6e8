use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use shared::models::{Bar, Ticker};
use shared::utils::normalize_range;
use tracing::{debug, warn};

use super::MarketDataProvider;
use crate::error::{EngineError, Result};

/// Yahoo Finance chart API client (`/v8/finance/chart/{symbol}`).
pub struct YahooProvider {
    http_client: HttpClient,
    base_url: String,
}

impl YahooProvider {
    /// `base_url` is normally `https://query1.finance.yahoo.com`; tests point it at a local mock.
    pub fn with_base_url(base_url: String, user_agent: &str) -> Result<Self> {
        let http_client = HttpClient::builder().user_agent(user_agent).build()?;
        Ok(Self { http_client, base_url })
    }

    fn chart_url(&self, ticker: &Ticker) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, ticker.as_str())
    }

    async fn fetch_chart(&self, ticker: &Ticker, query: &[(&str, String)]) -> Result<ChartResult> {
        let url = self.chart_url(ticker);
        debug!(ticker = %ticker, url = %url, ?query, "Requesting Yahoo chart");
        let response = self.http_client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::map_error_status(ticker, status, body));
        }
        parse_chart(ticker, &body)
    }

    fn map_error_status(ticker: &Ticker, status: StatusCode, body: String) -> EngineError {
        match status {
            StatusCode::NOT_FOUND => EngineError::TickerNotFound(ticker.to_string()),
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(ticker = %ticker, "Yahoo is throttling requests");
                EngineError::Throttled
            }
            _ => {
                warn!(ticker = %ticker, status = status.as_u16(), "Yahoo returned an error status");
                EngineError::ProviderStatus { status: status.as_u16(), body }
            }
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn daily_bars(&self, ticker: &Ticker, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>> {
        // period2 is exclusive on Yahoo's side; extend it by a day to keep `end` in range.
        let period1 = start.and_hms_opt(0, 0, 0).map(|d| d.and_utc().timestamp()).unwrap_or_default();
        let period2 = (end + Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .map(|d| d.and_utc().timestamp())
            .unwrap_or_default();
        let query = [
            ("period1", period1.to_string()),
            ("period2", period2.to_string()),
            ("interval", "1d".to_string()),
            ("events", "history".to_string()),
        ];
        let chart = self.fetch_chart(ticker, &query).await?;
        let bars = normalize_range(bars_from_chart(&chart), start, end);
        debug!(ticker = %ticker, bars = bars.len(), "Fetched daily bars from Yahoo");
        Ok(bars)
    }

    async fn live_price(&self, ticker: &Ticker) -> Result<f64> {
        let query = [("range", "5d".to_string()), ("interval", "1d".to_string())];
        let chart = self.fetch_chart(ticker, &query).await?;
        chart
            .meta
            .regular_market_price
            .or_else(|| bars_from_chart(&chart).last().map(|b| b.close))
            .ok_or_else(|| EngineError::NoData {
                ticker: ticker.to_string(),
                reason: "Yahoo response carries no market price".to_string(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    regular_market_price: Option<f64>,
    /// Exchange offset from UTC, in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn parse_chart(ticker: &Ticker, body: &str) -> Result<ChartResult> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| EngineError::ProcessingError(format!("Malformed Yahoo chart response: {}", e)))?;
    if let Some(err) = envelope.chart.error {
        return Err(if err.code.eq_ignore_ascii_case("Not Found") {
            EngineError::TickerNotFound(ticker.to_string())
        } else {
            EngineError::ProcessingError(format!("Yahoo error {}: {}", err.code, err.description))
        });
    }
    envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| EngineError::NoData {
            ticker: ticker.to_string(),
            reason: "Yahoo returned an empty result".to_string(),
        })
}

/// Zips the column arrays into bars, dropping rows with missing prices.
/// Timestamps are shifted by the exchange offset before taking the date.
fn bars_from_chart(chart: &ChartResult) -> Vec<Bar> {
    let empty = ChartQuote::default();
    let quote = chart.indicators.quote.first().unwrap_or(&empty);
    let at = |col: &[Option<f64>], i: usize| col.get(i).copied().flatten();

    chart
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            let date = DateTime::from_timestamp(ts + chart.meta.gmtoffset, 0)?.date_naive();
            Some(Bar {
                date,
                open: at(&quote.open, i)?,
                high: at(&quote.high, i)?,
                low: at(&quote.low, i)?,
                close: at(&quote.close, i)?,
                volume: at(&quote.volume, i).unwrap_or(0.0),
            })
        })
        .collect()
}
