// Dashboard configuration, mirroring assets/config/default.json.
// Loaded once at startup and shared read-only (behind an Arc) by the
// chart builder, the dashboard service and the UI shell.
use serde::{Deserialize, Serialize};
use shared::figure::RangeButton;
use shared::models::{ChartType, Ticker};
use std::path::Path;

use super::theme::ThemePalette;
use crate::error::{EngineError, Result};

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub version: String,
    pub title: String,
    pub tickers: Vec<Ticker>,
    pub default_ticker: Ticker,
    pub default_chart: ChartType,
    pub theme: ThemePalette,
    pub chart: ChartSettings,
    pub indicators: IndicatorDefaults,
    pub range_selector: Vec<RangeButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub height: u32,
    pub live_height: u32,
    /// Length of the historical window, in calendar days.
    pub lookback_days: u32,
    /// The live delta is measured against the first close in
    /// `[today - live_reference_days, today]`.
    pub live_reference_days: u32,
    pub live_title: String,
    #[serde(default = "default_true")]
    pub show_range_slider: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefaults {
    pub sma: IndicatorSetting,
    pub ema: IndicatorSetting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSetting {
    pub periods: Vec<usize>,
}

impl DashboardConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self> {
        Self::from_json_str(DEFAULT_CONFIG)
    }

    /// Loads `path` when given, the embedded default otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)?;
                tracing::info!(path = %p.display(), "Loading dashboard configuration from file");
                Self::from_json_str(&text)
            }
            None => Self::load_default(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut config: DashboardConfig = serde_json::from_str(text)
            .map_err(|e| EngineError::ConfigError(format!("Invalid dashboard configuration: {}", e)))?;
        // Tickers deserialise verbatim; normalise them the same way user input is.
        config.tickers = config.tickers.iter().map(|t| Ticker::new(t.as_str())).collect();
        config.default_ticker = Ticker::new(config.default_ticker.as_str());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() {
            return Err(EngineError::ConfigError("Ticker list must not be empty".to_string()));
        }
        if !self.is_allowed(&self.default_ticker) {
            return Err(EngineError::ConfigError(format!(
                "Default ticker '{}' is not in the ticker list",
                self.default_ticker
            )));
        }
        for (name, setting) in [("sma", &self.indicators.sma), ("ema", &self.indicators.ema)] {
            if setting.periods.is_empty() || setting.periods.contains(&0) {
                return Err(EngineError::ConfigError(format!(
                    "Indicator '{}' needs at least one non-zero period",
                    name
                )));
            }
        }
        if self.chart.lookback_days == 0 {
            return Err(EngineError::ConfigError("lookback_days must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn is_allowed(&self, ticker: &Ticker) -> bool {
        self.tickers.contains(ticker)
    }

    /// Maps an optional user-supplied symbol onto the allow-list,
    /// falling back to the default ticker when nothing was chosen yet.
    pub fn resolve_ticker(&self, symbol: Option<&str>) -> Result<Ticker> {
        match symbol.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(self.default_ticker.clone()),
            Some(s) => {
                let ticker = Ticker::new(s);
                if self.is_allowed(&ticker) {
                    Ok(ticker)
                } else {
                    Err(EngineError::UnknownTicker(s.to_string()))
                }
            }
        }
    }

    pub fn resolve_chart(&self, chart: Option<&str>) -> Result<ChartType> {
        match chart.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(self.default_chart),
            Some(s) => Ok(s.parse::<ChartType>()?),
        }
    }
}
