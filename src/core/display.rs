use std::fmt;

use serde::{Deserialize, Serialize};

/// Timeline zoom granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl ViewMode {
    /// Column width of one time unit at this granularity.
    #[must_use]
    pub const fn column_width_px(self) -> f64 {
        match self {
            Self::Year => 200.0,
            Self::Day | Self::Week | Self::Month => 150.0,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        };
        f.write_str(label)
    }
}

/// Host-facing display options for the timeline view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            locale: default_locale(),
        }
    }
}

impl DisplayOptions {
    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

/// Fixed chart chrome dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttLayout {
    #[serde(default = "default_header_height")]
    pub header_height_px: f64,
    #[serde(default = "default_row_height")]
    pub row_height_px: f64,
    #[serde(default = "default_chart_height")]
    pub chart_height_px: f64,
    #[serde(default = "default_list_cell_width")]
    pub list_cell_width_px: f64,
    /// Minimum content width; keeps the chart horizontally scrollable.
    #[serde(default = "default_min_chart_width")]
    pub min_chart_width_px: f64,
}

impl Default for GanttLayout {
    fn default() -> Self {
        Self {
            header_height_px: default_header_height(),
            row_height_px: default_row_height(),
            chart_height_px: default_chart_height(),
            list_cell_width_px: default_list_cell_width(),
            min_chart_width_px: default_min_chart_width(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_owned()
}

fn default_header_height() -> f64 {
    50.0
}

fn default_row_height() -> f64 {
    40.0
}

fn default_chart_height() -> f64 {
    500.0
}

fn default_list_cell_width() -> f64 {
    161.0
}

fn default_min_chart_width() -> f64 {
    1200.0
}

#[cfg(test)]
mod tests {
    use super::{DisplayOptions, ViewMode};

    #[test]
    fn year_mode_widens_columns() {
        assert_eq!(ViewMode::Year.column_width_px(), 200.0);
        assert_eq!(ViewMode::Month.column_width_px(), 150.0);
        assert_eq!(ViewMode::Day.column_width_px(), 150.0);
    }

    #[test]
    fn display_options_default_to_month_en_us() {
        let options = DisplayOptions::default();
        assert_eq!(options.view_mode, ViewMode::Month);
        assert_eq!(options.locale, "en-US");
    }
}
