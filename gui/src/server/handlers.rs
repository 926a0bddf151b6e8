// HTTP route handlers: the page, its script and the JSON API.
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use chrono::Local;
use engine::config::DashboardConfig;
use engine::services::DashboardService;
use serde::{Deserialize, Serialize};
use shared::models::{ChartType, DashboardResponse, Ticker};
use std::sync::Arc;

use super::error::ApiError;
use crate::app::render_page;

const DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

/// Main dashboard page
pub async fn index_page(State(config): State<Arc<DashboardConfig>>) -> impl IntoResponse {
    Html(render_page(&config))
}

pub async fn dashboard_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], DASHBOARD_JS)
}

/// Query string of `/api/dashboard`. Both fields are optional so the
/// first load works before anything has been chosen.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub ticker: Option<String>,
    pub chart: Option<String>,
}

/// Builds both figures for one (ticker, chart type) selection.
pub async fn api_dashboard(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let today = Local::now().date_naive();
    let response = service
        .handle_selection(query.ticker.as_deref(), query.chart.as_deref(), today)
        .await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartTypeOption {
    pub value: ChartType,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TickersResponse {
    pub tickers: Vec<Ticker>,
    pub chart_types: Vec<ChartTypeOption>,
    pub default_ticker: Ticker,
    pub default_chart: ChartType,
}

/// Options for both dropdowns.
pub async fn api_tickers(State(config): State<Arc<DashboardConfig>>) -> Json<TickersResponse> {
    Json(TickersResponse {
        tickers: config.tickers.clone(),
        chart_types: ChartType::ALL
            .iter()
            .map(|&value| ChartTypeOption { value, label: value.label().to_string() })
            .collect(),
        default_ticker: config.default_ticker.clone(),
        default_chart: config.default_chart,
    })
}

pub async fn api_config(State(config): State<Arc<DashboardConfig>>) -> Json<DashboardConfig> {
    Json(config.as_ref().clone())
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
