// Ticker and chart type dropdowns plus the Apply button.
// The browser script reads the current selection when Apply is clicked.
#![allow(non_snake_case)]
use dioxus::prelude::*;

pub const TICKER_SELECT_ID: &str = "stock-name";
pub const CHART_SELECT_ID: &str = "chart-type";
pub const APPLY_BUTTON_ID: &str = "submit-button";

/// One entry of the chart type dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOption {
    pub value: String,
    pub label: String,
}

#[component]
pub fn Toolbar(
    tickers: Vec<String>,
    selected_ticker: String,
    chart_options: Vec<ChartOption>,
    selected_chart: String,
) -> Element {
    rsx! {
        div { class: "toolbar",
            select { id: TICKER_SELECT_ID, name: "ticker",
                for symbol in tickers {
                    if symbol == selected_ticker {
                        option { value: "{symbol}", selected: true, "{symbol}" }
                    } else {
                        option { value: "{symbol}", "{symbol}" }
                    }
                }
            }
            select { id: CHART_SELECT_ID, name: "chart",
                for ChartOption { value, label } in chart_options {
                    if value == selected_chart {
                        option { value: "{value}", selected: true, "{label}" }
                    } else {
                        option { value: "{value}", "{label}" }
                    }
                }
            }
            button { id: APPLY_BUTTON_ID, r#type: "button", "Apply" }
        }
    }
}
