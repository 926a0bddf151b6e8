// Axum server: routes, middleware and graceful shutdown.
pub mod error;
pub mod handlers;

use anyhow::Context;
use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::SCRIPT_PATH;
use crate::config::ServerConfig;
use crate::state::AppState;
use handlers::{api_config, api_dashboard, api_tickers, dashboard_script, health_check, index_page};

pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let cors = if enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(index_page))
        .route(SCRIPT_PATH, get(dashboard_script))
        .route("/api/dashboard", get(api_dashboard))
        .route("/api/tickers", get(api_tickers))
        .route("/api/config", get(api_config))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds `host:port`; the host may be a name such as `localhost`.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    Ok(listener)
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let router = build_router(state, config.enable_cors);

    let listener = bind(config).await?;
    info!("Dashboard ready at http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Local};
    use engine::config::DashboardConfig;
    use engine::data::MarketDataStore;
    use serde_json::Value;
    use shared::models::{Bar, Ticker};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// A year of daily AAPL bars ending today, live price 200.
    fn test_state() -> AppState {
        let today = Local::now().date_naive();
        let bars: Vec<Bar> = (0..365)
            .rev()
            .map(|days_ago| {
                let close = 150.0 + (365 - days_ago) as f64 * 0.1;
                Bar {
                    date: today - Duration::days(days_ago),
                    open: close - 1.0,
                    high: close + 1.0,
                    low: close - 2.0,
                    close,
                    volume: 1_000.0,
                }
            })
            .collect();
        let mut store = MarketDataStore::new();
        let ticker = Ticker::new("AAPL");
        store.add_bars(&ticker, bars);
        store.set_live_price(&ticker, 200.0);
        AppState::new(Arc::new(store), Arc::new(DashboardConfig::load_default().unwrap()))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let router = build_router(test_state(), true);
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_bind_resolves_host_names() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..ServerConfig::default()
        };
        let listener = bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_page_renders() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Live Stock Price Dashboard"));
    }

    #[tokio::test]
    async fn test_script_is_served() {
        let (status, body) = get(SCRIPT_PATH).await;
        assert_eq!(status, StatusCode::OK);
        let script = String::from_utf8(body).unwrap();
        assert!(script.contains("/api/dashboard"));
        assert!(script.contains("pan2d"));
    }

    #[tokio::test]
    async fn test_dashboard_line_chart() {
        let (status, body) = get_json("/api/dashboard?ticker=AAPL&chart=Line").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticker"], "AAPL");
        assert_eq!(body["chart_type"], "Line");
        assert_eq!(body["primary"]["data"][0]["type"], "scatter");
        assert_eq!(body["primary"]["data"][0]["fill"], "tozeroy");
        assert_eq!(body["primary"]["layout"]["height"], 1000);
        assert_eq!(body["live"]["data"][0]["type"], "indicator");
        assert_eq!(body["live"]["data"][0]["value"], 200.0);
    }

    #[tokio::test]
    async fn test_dashboard_defaults_without_query() {
        let (status, body) = get_json("/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticker"], "AAPL");
        assert_eq!(body["chart_type"], "Line");
    }

    #[tokio::test]
    async fn test_dashboard_ema_has_four_series() {
        let (status, body) = get_json("/api/dashboard?ticker=aapl&chart=EMA").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["primary"]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["10 Days", "15 Days", "30 Days", "100 Days"]);
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unknown_chart_type() {
        let (status, body) = get_json("/api/dashboard?ticker=AAPL&chart=Renko").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Renko"));
    }

    #[tokio::test]
    async fn test_dashboard_rejects_ticker_outside_list() {
        let (status, _) = get_json("/api/dashboard?ticker=NFLX&chart=Line").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_ticker_without_data() {
        let (status, body) = get_json("/api/dashboard?ticker=TSLA&chart=Line").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("TSLA"));
    }

    #[tokio::test]
    async fn test_tickers_endpoint() {
        let (status, body) = get_json("/api/tickers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tickers"].as_array().unwrap().len(), 5);
        assert_eq!(body["default_ticker"], "AAPL");
        assert_eq!(body["chart_types"][2]["value"], "SMA");
        assert_eq!(body["chart_types"][2]["label"], "simple moving average");
    }

    #[tokio::test]
    async fn test_config_endpoint() {
        let (status, body) = get_json("/api/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"]["background"], "#000000");
        assert_eq!(body["chart"]["live_height"], 300);
    }
}
