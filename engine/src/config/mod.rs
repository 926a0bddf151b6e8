// Engine configuration: the immutable dashboard configuration (tickers, theme,
// chart settings) and the environment-driven provider settings.
pub mod dashboard;
pub mod settings;
pub mod theme;

pub use dashboard::{ChartSettings, DashboardConfig, IndicatorDefaults, IndicatorSetting};
pub use settings::{EngineSettings, ProviderKind};
pub use theme::ThemePalette;
