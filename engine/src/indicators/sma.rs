// Simple Moving Average (SMA): unweighted rolling mean over a trailing window
use super::IndicatorCalculator;
use serde_json::Value;

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("SMA({})", period),
            period,
        }
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>> {
        if self.period == 0 || closes.len() < self.period {
            return vec![None; closes.len()];
        }

        // Undefined until a full window is available.
        let mut results = vec![None; self.period - 1];

        let mut sum: f64 = closes.iter().take(self.period).sum();
        results.push(Some(sum / self.period as f64));

        for i in self.period..closes.len() {
            sum = sum - closes[i - self.period] + closes[i];
            results.push(Some(sum / self.period as f64));
        }
        results
    }
}
