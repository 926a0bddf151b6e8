// Themed layouts shared by every figure
use shared::figure::{Font, Layout, RangeSelector, RangeSlider, Title, XAxis};

use crate::config::DashboardConfig;

pub fn themed_layout(config: &DashboardConfig, height: u32, title: Option<&str>) -> Layout {
    Layout {
        height,
        title: title.map(Title::new),
        showlegend: true,
        plot_bgcolor: config.theme.background.clone(),
        paper_bgcolor: config.theme.background.clone(),
        font: Font { color: config.theme.text.clone() },
        xaxis: None,
    }
}

/// Date axis with the range slider and the preset range-selector buttons.
pub fn time_axis(config: &DashboardConfig) -> XAxis {
    XAxis {
        rangeslider: RangeSlider { visible: config.chart.show_range_slider },
        rangeselector: RangeSelector {
            activecolor: config.theme.range_selector_active.clone(),
            bgcolor: config.theme.background.clone(),
            buttons: config.range_selector.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_layout_uses_palette() {
        let config = DashboardConfig::load_default().unwrap();
        let layout = themed_layout(&config, 1000, Some("Line"));
        assert_eq!(layout.height, 1000);
        assert_eq!(layout.title, Some(Title::new("Line")));
        assert_eq!(layout.plot_bgcolor, "#000000");
        assert_eq!(layout.paper_bgcolor, "#000000");
        assert_eq!(layout.font.color, "#ffFFFF");
        assert!(layout.showlegend);
        assert!(layout.xaxis.is_none());
    }

    #[test]
    fn test_time_axis() {
        let config = DashboardConfig::load_default().unwrap();
        let axis = time_axis(&config);
        assert!(axis.rangeslider.visible);
        assert_eq!(axis.rangeselector.activecolor, "blue");
        assert_eq!(axis.rangeselector.bgcolor, "#000000");
        let labels: Vec<&str> = axis
            .rangeselector
            .buttons
            .iter()
            .filter_map(|b| b.label.as_deref())
            .collect();
        assert_eq!(labels, vec!["5D", "15D", "1m", "3m", "6m", "YTD", "1y", "5y", "all"]);
    }
}
