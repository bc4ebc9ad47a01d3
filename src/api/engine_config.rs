use serde::{Deserialize, Serialize};

use crate::core::{DisplayOptions, GanttLayout, ThemeMode, ViewMode};
use crate::error::{BoardError, BoardResult};
use crate::interaction::ScrollPanConfig;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// timeline setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TimelineEngineConfig {
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub layout: GanttLayout,
    #[serde(default)]
    pub scroll_pan: ScrollPanConfig,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeline zoom granularity.
    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.display.view_mode = view_mode;
        self
    }

    /// Sets the display locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.display.locale = locale.into();
        self
    }

    /// Sets the theme mode that selects the bar palette.
    #[must_use]
    pub fn with_theme_mode(mut self, theme_mode: ThemeMode) -> Self {
        self.theme_mode = theme_mode;
        self
    }

    /// Overrides the fixed chart chrome dimensions.
    #[must_use]
    pub fn with_layout(mut self, layout: GanttLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Overrides the scroll/pan tuning constants.
    #[must_use]
    pub fn with_scroll_pan(mut self, scroll_pan: ScrollPanConfig) -> Self {
        self.scroll_pan = scroll_pan;
        self
    }

    /// Serializes config to pretty JSON for persistence or inspection.
    pub fn to_json_pretty(&self) -> BoardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BoardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BoardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BoardError::InvalidData(format!("failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineEngineConfig;
    use crate::core::{ThemeMode, ViewMode};

    #[test]
    fn json_round_trip_preserves_config() {
        let config = TimelineEngineConfig::new()
            .with_view_mode(ViewMode::Year)
            .with_theme_mode(ThemeMode::Dark);

        let json = config.to_json_pretty().expect("serialize");
        let restored = TimelineEngineConfig::from_json_str(&json).expect("parse");
        assert_eq!(restored, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = TimelineEngineConfig::from_json_str("{}").expect("parse empty object");
        assert_eq!(config, TimelineEngineConfig::default());
        assert_eq!(config.display.view_mode, ViewMode::Month);
    }
}
