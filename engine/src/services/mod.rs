// Request/response services exposed by the engine.
pub mod dashboard_service;

pub use dashboard_service::DashboardService;
