// Engine library root: market data, indicators, figure building and the
// request/response dashboard service consumed by the gui crate.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod services;

pub use error::{EngineError, ErrorClass, Result};
