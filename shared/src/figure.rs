// Chart specifications, serialised in the shape Plotly.js expects for
// `Plotly.react(div, figure.data, figure.layout)`.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Names of all traces, in drawing order.
    pub fn trace_names(&self) -> Vec<&str> {
        self.data.iter().filter_map(Trace::name).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Candlestick(CandlestickTrace),
    Indicator(IndicatorTrace),
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Scatter(t) => Some(&t.name),
            Trace::Candlestick(t) => Some(&t.name),
            Trace::Indicator(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub x: Vec<NaiveDate>,
    /// `None` serialises to `null`, which Plotly draws as a gap.
    pub y: Vec<Option<f64>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    #[serde(rename = "tozeroy")]
    ToZeroY,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickTrace {
    pub x: Vec<NaiveDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increasing: Option<CandleStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decreasing: Option<CandleStyle>,
}

/// Colour of rising or falling candles: `{"line": {"color": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleStyle {
    pub line: LineStyle,
}

impl CandleStyle {
    pub fn colored(color: impl Into<String>) -> Self {
        Self { line: LineStyle { color: color.into() } }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTrace {
    pub value: f64,
    pub mode: String,
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<Delta>,
    pub domain: Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub reference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for Domain {
    fn default() -> Self {
        Self { x: [0.0, 1.0], y: [0.0, 1.0] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub showlegend: bool,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<XAxis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub rangeslider: RangeSlider,
    pub rangeselector: RangeSelector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelector {
    pub activecolor: String,
    pub bgcolor: String,
    pub buttons: Vec<RangeButton>,
}

/// One preset shortcut of the range selector, e.g. `{count: 3, label: "3m", step: "month"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub step: Step,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepmode: Option<StepMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Day,
    Month,
    Year,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    Backward,
    Todate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scatter_trace_serialises_with_type_tag_and_gaps() {
        let trace = Trace::Scatter(ScatterTrace {
            x: vec![
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ],
            y: vec![None, Some(1.5)],
            name: "10 Days".to_string(),
            fill: None,
        });
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "scatter",
                "x": ["2024-01-02", "2024-01-03"],
                "y": [null, 1.5],
                "name": "10 Days"
            })
        );
    }

    #[test]
    fn test_fill_and_range_button_wire_format() {
        assert_eq!(serde_json::to_value(Fill::ToZeroY).unwrap(), json!("tozeroy"));
        let all = RangeButton { count: None, label: None, step: Step::All, stepmode: None };
        assert_eq!(serde_json::to_value(&all).unwrap(), json!({ "step": "all" }));
        let ytd = RangeButton {
            count: Some(1),
            label: Some("YTD".to_string()),
            step: Step::Year,
            stepmode: Some(StepMode::Todate),
        };
        assert_eq!(
            serde_json::to_value(&ytd).unwrap(),
            json!({ "count": 1, "label": "YTD", "step": "year", "stepmode": "todate" })
        );
    }

    #[test]
    fn test_candlestick_colours_wire_format() {
        let trace = Trace::Candlestick(CandlestickTrace {
            x: vec![NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()],
            open: vec![1.0],
            high: vec![2.0],
            low: vec![0.5],
            close: vec![1.5],
            name: "Candlestick".to_string(),
            increasing: Some(CandleStyle::colored("#26a69a")),
            decreasing: Some(CandleStyle::colored("#ef5350")),
        });
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "candlestick");
        assert_eq!(value["increasing"], json!({ "line": { "color": "#26a69a" } }));
        assert_eq!(value["decreasing"], json!({ "line": { "color": "#ef5350" } }));
    }

    #[test]
    fn test_indicator_trace_round_trip() {
        let trace = Trace::Indicator(IndicatorTrace {
            value: 190.0,
            mode: "number+delta".to_string(),
            title: Title::new("Price (USD)"),
            delta: Some(Delta { reference: 185.0 }),
            domain: Domain::default(),
        });
        let text = serde_json::to_string(&trace).unwrap();
        assert!(text.contains("\"type\":\"indicator\""));
        let back: Trace = serde_json::from_str(&text).unwrap();
        assert_eq!(back, trace);
        assert_eq!(back.name(), None);
    }
}
