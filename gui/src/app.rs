// Root UI component and the server-side render of the full page.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::config::DashboardConfig;
use shared::models::ChartType;

use crate::components::{ChartOption, ChartPanel, Toolbar};
use crate::config::theme::page_css;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
pub const SCRIPT_PATH: &str = "/assets/dashboard.js";

/// Everything the page needs to render its controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PageShell {
    pub title: String,
    pub tickers: Vec<String>,
    pub default_ticker: String,
    pub chart_options: Vec<ChartOption>,
    pub default_chart: String,
}

impl PageShell {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            title: config.title.clone(),
            tickers: config.tickers.iter().map(|t| t.to_string()).collect(),
            default_ticker: config.default_ticker.to_string(),
            chart_options: ChartType::ALL
                .iter()
                .map(|c| ChartOption {
                    value: c.as_str().to_string(),
                    label: c.label().to_string(),
                })
                .collect(),
            default_chart: config.default_chart.as_str().to_string(),
        }
    }
}

#[component]
pub fn App(shell: PageShell) -> Element {
    let PageShell { title, tickers, default_ticker, chart_options, default_chart } = shell;
    rsx! {
        header { class: "dashboard-header",
            h1 { style: "text-align: center; font-size: 45px; font-weight: 650;", "{title}" }
        }
        Toolbar {
            tickers: tickers,
            selected_ticker: default_ticker,
            chart_options: chart_options,
            selected_chart: default_chart,
        }
        ChartPanel {}
    }
}

/// Full HTML document: the rendered component tree wrapped with the
/// stylesheet, Plotly and the page script.
pub fn render_page(config: &DashboardConfig) -> String {
    let shell = PageShell::from_config(config);
    let mut vdom = VirtualDom::new_with_props(App, AppProps { shell });
    vdom.rebuild_in_place();
    let body = dioxus_ssr::render(&vdom);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
<script src="{plotly}"></script>
</head>
<body>
<div id="main">{body}</div>
<script src="{script}"></script>
</body>
</html>"#,
        title = config.title,
        css = page_css(&config.theme),
        plotly = PLOTLY_CDN,
        body = body,
        script = SCRIPT_PATH,
    )
}
