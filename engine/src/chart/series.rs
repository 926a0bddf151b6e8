// Shapes bars into the traces each chart type draws.
use shared::figure::{CandleStyle, CandlestickTrace, Fill, ScatterTrace, Trace};
use shared::models::Bar;
use shared::utils::{closes, dates};

use crate::config::ThemePalette;
use crate::indicators::IndicatorCalculator;

/// Closing price against date, area-filled down to zero.
pub fn close_area_trace(bars: &[Bar]) -> Trace {
    Trace::Scatter(ScatterTrace {
        x: dates(bars),
        y: bars.iter().map(|b| Some(b.close)).collect(),
        name: "close".to_string(),
        fill: Some(Fill::ToZeroY),
    })
}

/// OHLC candles coloured with the palette's bullish and bearish colours.
pub fn candlestick_trace(bars: &[Bar], palette: &ThemePalette) -> Trace {
    Trace::Candlestick(CandlestickTrace {
        x: dates(bars),
        open: bars.iter().map(|b| b.open).collect(),
        high: bars.iter().map(|b| b.high).collect(),
        low: bars.iter().map(|b| b.low).collect(),
        close: closes(bars),
        name: "Candlestick".to_string(),
        increasing: Some(CandleStyle::colored(palette.bullish.clone())),
        decreasing: Some(CandleStyle::colored(palette.bearish.clone())),
    })
}

/// One line per (period, calculator) pair, labelled "<period> Days".
pub fn moving_average_traces(bars: &[Bar], calculators: &[(usize, Box<dyn IndicatorCalculator>)]) -> Vec<Trace> {
    let x = dates(bars);
    let close_series = closes(bars);
    calculators
        .iter()
        .map(|(period, calculator)| {
            tracing::trace!(indicator = calculator.name(), params = %calculator.parameters(), "Computing series");
            Trace::Scatter(ScatterTrace {
                x: x.clone(),
                y: calculator.calculate(&close_series),
                name: format!("{} Days", period),
                fill: None,
            })
        })
        .collect()
}
