// Daily bars from CSV files in the Yahoo Finance download format:
//   Date,Open,High,Low,Close,Adj Close,Volume
//   2024-01-02,187.15,188.44,183.89,185.64,184.94,82488700
// Rows where the provider left prices as "null" (non-trading days) are skipped.
use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use shared::models::{Bar, Ticker};
use shared::utils::normalize_range;
use std::io::Read;
use std::path::PathBuf;

use super::MarketDataProvider;
use crate::error::{EngineError, Result};

pub mod yahoo_format {
    use chrono::NaiveDate;

    use crate::error::{EngineError, Result};

    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| EngineError::CsvDataFormatError(format!("Failed to parse date '{}': {}", s, e)))
    }

    /// `None` for the provider's "null" placeholder.
    pub fn parse_price(s: &str) -> Result<Option<f64>> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            return Ok(None);
        }
        s.parse::<f64>()
            .map(Some)
            .map_err(|e| EngineError::CsvDataFormatError(format!("Failed to parse decimal '{}': {}", s, e)))
    }

}

pub struct YahooCsvParser;

impl YahooCsvParser {
    pub fn parse_bars<R: Read>(reader: R) -> Result<Vec<Bar>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut bars = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result?;

            let date_str = Self::required_field(&record, &headers, "Date", line)?;
            let date = yahoo_format::parse_date(date_str)
                .map_err(|e| EngineError::CsvDataFormatError(format!("Error parsing 'Date' at line {}: {}", line, e)))?;

            let mut prices = [0.0_f64; 4];
            let mut complete = true;
            for (slot, name) in prices.iter_mut().zip(["Open", "High", "Low", "Close"]) {
                let raw = Self::required_field(&record, &headers, name, line)?;
                match yahoo_format::parse_price(raw).map_err(|e| {
                    EngineError::CsvDataFormatError(format!("Error parsing '{}' at line {}: {}", name, line, e))
                })? {
                    Some(value) => *slot = value,
                    None => complete = false,
                }
            }
            if !complete {
                tracing::debug!(line, %date, "Skipping CSV row without prices");
                continue;
            }

            // Volume is optional in hand-made files.
            let volume = match Self::get_field(&record, &headers, "Volume") {
                Some(raw) => yahoo_format::parse_price(raw)
                    .map_err(|e| EngineError::CsvDataFormatError(format!("Error parsing 'Volume' at line {}: {}", line, e)))?
                    .unwrap_or(0.0),
                None => 0.0,
            };

            let [open, high, low, close] = prices;
            bars.push(Bar { date, open, high, low, close, volume });
        }
        Ok(bars)
    }

    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .and_then(|pos| record.get(pos))
    }

    fn required_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<&'a str> {
        Self::get_field(record, headers, name).ok_or_else(|| {
            EngineError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line))
        })
    }
}

/// Offline provider reading `<dir>/<TICKER>.csv` on every request.
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, ticker: &Ticker) -> PathBuf {
        self.dir.join(format!("{}.csv", ticker.as_str()))
    }

    async fn load(&self, ticker: &Ticker) -> Result<Vec<Bar>> {
        let path = self.path_for(ticker);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(ticker = %ticker, path = %path.display(), "No CSV file for ticker");
                return Err(EngineError::TickerNotFound(ticker.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let bars = YahooCsvParser::parse_bars(text.as_bytes())?;
        tracing::debug!(ticker = %ticker, bars = bars.len(), path = %path.display(), "Loaded CSV bars");
        Ok(bars)
    }
}

#[async_trait]
impl MarketDataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    async fn daily_bars(&self, ticker: &Ticker, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>> {
        let bars = self.load(ticker).await?;
        Ok(normalize_range(bars, start, end))
    }

    async fn live_price(&self, ticker: &Ticker) -> Result<f64> {
        let mut bars = self.load(ticker).await?;
        bars.sort_by_key(|b| b.date);
        bars.last().map(|b| b.close).ok_or_else(|| EngineError::NoData {
            ticker: ticker.to_string(),
            reason: "CSV file has no rows".to_string(),
        })
    }
}
