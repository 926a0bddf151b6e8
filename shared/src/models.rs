use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::figure::Figure;

/// Upper-cased stock symbol. Membership in the allow-list is checked by the
/// dashboard configuration, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Ticker(symbol.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Ticker::new(s)
    }
}

/// One trading day of OHLC data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Line,
    Candlestick,
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "EMA")]
    Ema,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Line,
        ChartType::Candlestick,
        ChartType::Sma,
        ChartType::Ema,
    ];

    /// Value used on the wire and as the figure title.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Candlestick => "Candlestick",
            ChartType::Sma => "SMA",
            ChartType::Ema => "EMA",
        }
    }

    /// Human readable dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Candlestick => "candlestick",
            ChartType::Sma => "simple moving average",
            ChartType::Ema => "exponential moving average",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChartTypeError(pub String);

impl fmt::Display for ParseChartTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported chart type '{}'. Use 'Line', 'Candlestick', 'SMA' or 'EMA'.",
            self.0
        )
    }
}

impl std::error::Error for ParseChartTypeError {}

impl FromStr for ChartType {
    type Err = ParseChartTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "candlestick" => Ok(ChartType::Candlestick),
            "sma" => Ok(ChartType::Sma),
            "ema" => Ok(ChartType::Ema),
            _ => Err(ParseChartTypeError(s.to_string())),
        }
    }
}

/// Current price plus the close it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveQuote {
    pub price: f64,
    pub reference_close: Option<f64>,
}

impl LiveQuote {
    pub fn delta(&self) -> Option<f64> {
        self.reference_close.map(|reference| self.price - reference)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub ticker: Ticker,
    pub chart_type: ChartType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub ticker: Ticker,
    pub chart_type: ChartType,
    pub primary: Figure,
    pub live: Figure,
}
