// Exponential Moving Average (EMA) with bias-corrected weights.
//
// With alpha = 2 / (span + 1), the value at t is
//   sum_{i=0..t} (1 - alpha)^i * x[t - i]  /  sum_{i=0..t} (1 - alpha)^i
// so it is defined from the very first point and early values are not
// dragged towards zero by missing history.
use super::IndicatorCalculator;
use serde_json::Value;

pub struct Ema {
    name: String,
    span: usize,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        Self {
            name: format!("EMA({})", span),
            span,
        }
    }

    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }
}

impl IndicatorCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "span": self.span, "alpha": self.alpha() })
    }

    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>> {
        if self.span == 0 {
            return vec![None; closes.len()];
        }

        let decay = 1.0 - self.alpha();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        closes
            .iter()
            .map(|&close| {
                weighted_sum = close + decay * weighted_sum;
                weight_total = 1.0 + decay * weight_total;
                Some(weighted_sum / weight_total)
            })
            .collect()
    }
}
