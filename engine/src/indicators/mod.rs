// Technical indicators over a closing-price series
pub mod ema;
pub mod sma;

pub use ema::Ema;
pub use sma::Sma;

use serde_json::Value;

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value;
    /// One output per input point; `None` where the indicator is undefined.
    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>>;
}
