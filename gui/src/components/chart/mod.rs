// Containers the browser script draws the figures into.
#![allow(non_snake_case)]
use dioxus::prelude::*;

pub const PRIMARY_GRAPH_ID: &str = "graph";
pub const LIVE_GRAPH_ID: &str = "live-price";
pub const ERROR_BANNER_ID: &str = "error-banner";

#[component]
pub fn ChartPanel() -> Element {
    rsx! {
        div { id: ERROR_BANNER_ID, class: "error-banner" }
        div { class: "charts",
            div { id: PRIMARY_GRAPH_ID, class: "graph" }
            div { id: LIVE_GRAPH_ID, class: "graph" }
        }
    }
}
