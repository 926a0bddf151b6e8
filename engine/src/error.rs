use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown ticker '{0}'")]
    UnknownTicker(String),

    #[error(transparent)]
    InvalidChartType(#[from] shared::models::ParseChartTypeError),

    #[error("Market data request failed: {source}")]
    ProviderHttp {
        #[from]
        source: reqwest::Error,
    },

    #[error("Market data provider returned HTTP {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("Market data provider is throttling requests")]
    Throttled,

    #[error("Ticker '{0}' not found at the market data provider")]
    TickerNotFound(String),

    #[error("No market data for '{ticker}': {reason}")]
    NoData { ticker: String, reason: String },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

/// How an error should be reported to whoever asked for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Unavailable,
    Upstream,
    Internal,
}

impl EngineError {
    pub fn class(&self) -> ErrorClass {
        match self {
            EngineError::UnknownTicker(_) | EngineError::InvalidChartType(_) => ErrorClass::BadRequest,
            EngineError::TickerNotFound(_) | EngineError::NoData { .. } => ErrorClass::NotFound,
            EngineError::Throttled => ErrorClass::Unavailable,
            EngineError::ProviderHttp { .. } | EngineError::ProviderStatus { .. } => ErrorClass::Upstream,
            EngineError::ConfigError(_)
            | EngineError::CsvSystemError { .. }
            | EngineError::IoError { .. }
            | EngineError::CsvDataFormatError(_)
            | EngineError::ProcessingError(_) => ErrorClass::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
