// Chart Builder: turns bars and a live quote into figure specifications.
// Pure and synchronous; all fetching happens in the dashboard service.
pub mod layout;
pub mod series;

use shared::figure::{Delta, Domain, Figure, IndicatorTrace, Title, Trace};
use shared::models::{Bar, ChartType, LiveQuote};
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::indicators::{Ema, IndicatorCalculator, Sma};

#[derive(Clone)]
pub struct ChartBuilder {
    config: Arc<DashboardConfig>,
}

impl ChartBuilder {
    pub fn new(config: Arc<DashboardConfig>) -> Self {
        Self { config }
    }

    /// Main chart for the selected type. Every type gets the same themed
    /// layout, titled with the chart type, and the range selector.
    pub fn build_primary(&self, chart_type: ChartType, bars: &[Bar]) -> Figure {
        let data = match chart_type {
            ChartType::Line => vec![series::close_area_trace(bars)],
            ChartType::Candlestick => vec![series::candlestick_trace(bars, &self.config.theme)],
            ChartType::Sma => series::moving_average_traces(bars, &self.sma_calculators()),
            ChartType::Ema => series::moving_average_traces(bars, &self.ema_calculators()),
        };

        let mut layout = layout::themed_layout(&self.config, self.config.chart.height, Some(chart_type.as_str()));
        layout.xaxis = Some(layout::time_axis(&self.config));

        tracing::debug!(chart_type = %chart_type, bars = bars.len(), traces = data.len(), "Built primary chart");
        Figure::new(data, layout)
    }

    /// Live price number with a delta against the reference close, when known.
    pub fn build_live(&self, quote: &LiveQuote) -> Figure {
        let trace = Trace::Indicator(IndicatorTrace {
            value: quote.price,
            mode: if quote.reference_close.is_some() { "number+delta" } else { "number" }.to_string(),
            title: Title::new(self.config.chart.live_title.clone()),
            delta: quote.reference_close.map(|reference| Delta { reference }),
            domain: Domain::default(),
        });
        let layout = layout::themed_layout(&self.config, self.config.chart.live_height, None);
        Figure::new(vec![trace], layout)
    }

    fn sma_calculators(&self) -> Vec<(usize, Box<dyn IndicatorCalculator>)> {
        self.config
            .indicators
            .sma
            .periods
            .iter()
            .map(|&p| (p, Box::new(Sma::new(p)) as Box<dyn IndicatorCalculator>))
            .collect()
    }

    fn ema_calculators(&self) -> Vec<(usize, Box<dyn IndicatorCalculator>)> {
        self.config
            .indicators
            .ema
            .periods
            .iter()
            .map(|&p| (p, Box::new(Ema::new(p)) as Box<dyn IndicatorCalculator>))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use shared::figure::{CandleStyle, Step};

    fn builder() -> ChartBuilder {
        ChartBuilder::new(Arc::new(DashboardConfig::load_default().unwrap()))
    }

    fn daily_bars(n: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
        (0..n)
            .map(|i| {
                let close = 150.0 + (i as f64 * 0.05).cos() * 10.0 + i as f64 * 0.01;
                Bar {
                    date: start + Duration::days(i as i64),
                    open: close - 1.0,
                    high: close + 2.0,
                    low: close - 2.0,
                    close,
                    volume: 1_000_000.0,
                }
            })
            .collect()
    }

    fn scatter(trace: &Trace) -> &shared::figure::ScatterTrace {
        match trace {
            Trace::Scatter(t) => t,
            other => panic!("expected scatter, got {:?}", other),
        }
    }

    #[test]
    fn test_line_chart_x_values_match_dates() {
        let bars = daily_bars(30);
        let figure = builder().build_primary(ChartType::Line, &bars);
        assert_eq!(figure.data.len(), 1);
        let line = scatter(&figure.data[0]);
        let expected: Vec<NaiveDate> = bars.iter().map(|b| b.date).collect();
        assert_eq!(line.x, expected);
        assert_eq!(figure.layout.title, Some(Title::new("Line")));
    }

    #[test]
    fn test_candlestick_arrays_match_bar_count() {
        let bars = daily_bars(42);
        let figure = builder().build_primary(ChartType::Candlestick, &bars);
        assert_eq!(figure.data.len(), 1);
        match &figure.data[0] {
            Trace::Candlestick(t) => {
                assert_eq!(t.open.len(), 42);
                assert_eq!(t.high.len(), 42);
                assert_eq!(t.low.len(), 42);
                assert_eq!(t.close.len(), 42);
                assert_eq!(t.x.len(), 42);
                assert_eq!(t.increasing, Some(CandleStyle::colored("#26a69a")));
                assert_eq!(t.decreasing, Some(CandleStyle::colored("#ef5350")));
            }
            other => panic!("expected candlestick, got {:?}", other),
        }
    }

    #[test]
    fn test_sma_and_ema_series_labels() {
        let bars = daily_bars(150);
        for chart_type in [ChartType::Sma, ChartType::Ema] {
            let figure = builder().build_primary(chart_type, &bars);
            assert_eq!(figure.trace_names(), vec!["10 Days", "15 Days", "30 Days", "100 Days"]);
        }
    }

    #[test]
    fn test_sma_series_use_their_own_windows() {
        let bars = daily_bars(150);
        let figure = builder().build_primary(ChartType::Sma, &bars);
        let defined: Vec<usize> = figure
            .data
            .iter()
            .map(|t| scatter(t).y.iter().take_while(|v| v.is_none()).count())
            .collect();
        // window - 1 undefined points for 10, 15, 30, 100
        assert_eq!(defined, vec![9, 14, 29, 99]);
        assert_ne!(scatter(&figure.data[1]).y, scatter(&figure.data[2]).y);
    }

    #[test]
    fn test_all_chart_types_share_theme() {
        let bars = daily_bars(10);
        let b = builder();
        let layouts: Vec<_> = ChartType::ALL.iter().map(|&t| b.build_primary(t, &bars).layout).collect();
        for layout in &layouts {
            assert_eq!(layout.height, 1000);
            assert_eq!(layout.plot_bgcolor, "#000000");
            assert_eq!(layout.font.color, "#ffFFFF");
            assert_eq!(layout.xaxis.as_ref().unwrap().rangeselector.buttons.len(), 9);
        }
    }

    #[test]
    fn test_five_years_of_line_data() {
        let bars = daily_bars(5 * 365);
        let figure = builder().build_primary(ChartType::Line, &bars);
        assert_eq!(figure.data.len(), 1);
        let line = scatter(&figure.data[0]);
        assert_eq!(line.x.first(), Some(&bars[0].date));
        assert_eq!(line.x.last(), Some(&bars[bars.len() - 1].date));
        assert_eq!(line.fill, Some(shared::figure::Fill::ToZeroY));
        let buttons = &figure.layout.xaxis.as_ref().unwrap().rangeselector.buttons;
        assert_eq!(buttons.len(), 9);
        assert_eq!(buttons[8].step, Step::All);
    }

    #[test]
    fn test_live_indicator_delta() {
        let figure = builder().build_live(&LiveQuote { price: 191.5, reference_close: Some(188.0) });
        assert_eq!(figure.layout.height, 300);
        match &figure.data[0] {
            Trace::Indicator(t) => {
                assert_eq!(t.value, 191.5);
                assert_eq!(t.mode, "number+delta");
                assert_eq!(t.delta, Some(Delta { reference: 188.0 }));
                assert_eq!(t.title.text, "Price (USD)");
                assert_eq!(t.value - t.delta.unwrap().reference, 3.5);
            }
            other => panic!("expected indicator, got {:?}", other),
        }
    }

    #[test]
    fn test_live_indicator_without_reference() {
        let figure = builder().build_live(&LiveQuote { price: 10.0, reference_close: None });
        match &figure.data[0] {
            Trace::Indicator(t) => {
                assert_eq!(t.mode, "number");
                assert!(t.delta.is_none());
            }
            other => panic!("expected indicator, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bars_still_build() {
        let figure = builder().build_primary(ChartType::Ema, &[]);
        assert_eq!(figure.data.len(), 4);
        assert!(scatter(&figure.data[0]).x.is_empty());
    }
}
