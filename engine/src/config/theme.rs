// Colours shared by every figure and by the page itself.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub text: String,
    /// Highlight colour of the selected range-selector button.
    pub range_selector_active: String,
    pub accent: String,
    pub bullish: String,
    pub bearish: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#000000".to_string(),
            text: "#ffFFFF".to_string(),
            range_selector_active: "blue".to_string(),
            accent: "#0A66C2".to_string(),
            bullish: "#26a69a".to_string(),
            bearish: "#ef5350".to_string(),
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::default_dark()
    }
}
