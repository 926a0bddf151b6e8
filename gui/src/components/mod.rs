// GUI components module
pub mod chart;
pub mod toolbar;

pub use chart::ChartPanel;
pub use toolbar::{ChartOption, Toolbar};
