// Page styling derived from the dashboard theme, so the page chrome and the
// figures share one palette.
use engine::config::ThemePalette;

pub fn page_css(palette: &ThemePalette) -> String {
    format!(
        r#"body {{ margin: 0; background-color: {bg}; color: {text}; font-family: sans-serif; }}
.dashboard-header {{ padding: 12px 20px; margin: 0; }}
.toolbar {{ display: flex; gap: 12px; align-items: center; padding: 0 20px 12px; }}
.toolbar select {{ background-color: {bg}; color: {text}; border: 1px solid {accent}; padding: 4px 8px; min-width: 220px; }}
.toolbar button {{ background-color: {accent}; color: {text}; border: none; padding: 6px 16px; cursor: pointer; }}
.error-banner {{ display: none; margin: 0 20px 12px; padding: 8px 12px; border: 1px solid {bearish}; color: {bearish}; }}
.error-banner.visible {{ display: block; }}
"#,
        bg = palette.background,
        text = palette.text,
        accent = palette.accent,
        bearish = palette.bearish,
    )
}
