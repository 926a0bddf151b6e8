// engine/src/services/dashboard_service/mod.rs
// The dashboard as an explicit request/response function:
//   (ticker, chart type) -> (primary chart, live price indicator)
// Each call fetches, builds and returns; nothing is kept between calls.

use chrono::NaiveDate;
use shared::models::{DashboardRequest, DashboardResponse};
use std::sync::Arc;

use crate::chart::ChartBuilder;
use crate::config::DashboardConfig;
use crate::data::MarketDataProvider;
use crate::error::{EngineError, Result};

pub mod fetch_history;
pub mod fetch_live_quote;
pub mod helpers;

pub struct DashboardService {
    provider: Arc<dyn MarketDataProvider>,
    builder: ChartBuilder,
    config: Arc<DashboardConfig>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: Arc<DashboardConfig>) -> Self {
        DashboardService {
            provider,
            builder: ChartBuilder::new(config.clone()),
            config,
        }
    }

    /// Resolves raw user selections (either may still be unset before the
    /// first click) against the configuration, then builds the dashboard.
    pub async fn handle_selection(
        &self,
        ticker: Option<&str>,
        chart: Option<&str>,
        today: NaiveDate,
    ) -> Result<DashboardResponse> {
        let request = DashboardRequest {
            ticker: self.config.resolve_ticker(ticker)?,
            chart_type: self.config.resolve_chart(chart)?,
        };
        self.build_dashboard(request, today).await
    }

    /// idle -> fetch -> build -> respond. `today` anchors the lookback and
    /// live reference windows.
    pub async fn build_dashboard(&self, request: DashboardRequest, today: NaiveDate) -> Result<DashboardResponse> {
        tracing::info!(
            ticker = %request.ticker,
            chart_type = %request.chart_type,
            %today,
            "Building dashboard"
        );

        if !self.config.is_allowed(&request.ticker) {
            tracing::warn!(ticker = %request.ticker, "Ticker is not in the allow-list");
            return Err(EngineError::UnknownTicker(request.ticker.to_string()));
        }

        let provider = self.provider.as_ref();
        let history =
            fetch_history::handle_fetch_history(provider, &self.config, &request.ticker, today).await?;
        let quote = fetch_live_quote::handle_fetch_live_quote(
            provider,
            &self.config,
            &request.ticker,
            today,
            &history,
        )
        .await?;

        let primary = self.builder.build_primary(request.chart_type, &history);
        let live = self.builder.build_live(&quote);

        tracing::info!(
            ticker = %request.ticker,
            chart_type = %request.chart_type,
            bars = history.len(),
            price = quote.price,
            delta = ?quote.delta(),
            "Dashboard built"
        );

        Ok(DashboardResponse {
            ticker: request.ticker,
            chart_type: request.chart_type,
            primary,
            live,
        })
    }
}
