// Engine settings, loaded from environment variables
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Yahoo Finance chart API over HTTP.
    Yahoo,
    /// `<csv_dir>/<TICKER>.csv` files on disk.
    Csv,
}

impl FromStr for ProviderKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yahoo" => Ok(ProviderKind::Yahoo),
            "csv" => Ok(ProviderKind::Csv),
            other => Err(EngineError::ConfigError(format!(
                "Unknown market data provider '{}'. Use 'yahoo' or 'csv'.",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub provider: ProviderKind,
    pub yahoo_base_url: String,
    pub user_agent: String,
    pub csv_dir: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            provider: ProviderKind::Yahoo,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) live-stock-dashboard".to_string(),
            csv_dir: PathBuf::from("data"),
        }
    }
}

impl EngineSettings {
    /// Reads `DASHBOARD_PROVIDER`, `YAHOO_BASE_URL`, `DASHBOARD_USER_AGENT` and
    /// `DASHBOARD_CSV_DIR`, keeping defaults for whatever is unset.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let provider = match lookup("DASHBOARD_PROVIDER") {
            Some(v) => v.parse()?,
            None => defaults.provider,
        };
        Ok(EngineSettings {
            provider,
            yahoo_base_url: lookup("YAHOO_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.yahoo_base_url),
            user_agent: lookup("DASHBOARD_USER_AGENT").unwrap_or(defaults.user_agent),
            csv_dir: lookup("DASHBOARD_CSV_DIR").map(PathBuf::from).unwrap_or(defaults.csv_dir),
        })
    }
}
