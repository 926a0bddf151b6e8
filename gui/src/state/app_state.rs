// State shared by every HTTP handler. Both parts are immutable after
// startup; each dashboard request is served independently.
use axum::extract::FromRef;
use engine::config::DashboardConfig;
use engine::data::MarketDataProvider;
use engine::services::DashboardService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DashboardService>,
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: Arc<DashboardConfig>) -> Self {
        Self {
            service: Arc::new(DashboardService::new(provider, config.clone())),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<DashboardService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

impl FromRef<AppState> for Arc<DashboardConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
