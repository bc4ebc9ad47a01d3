use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Bar and chrome colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineColorScheme {
    pub project_background: &'static str,
    pub project_progress: &'static str,
    pub project_progress_selected: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl TimelineColorScheme {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            project_background: "#3b82f6",
            project_progress: "#134994",
            project_progress_selected: "#2563eb",
            text: "#1f2937",
            border: "#e5e7eb",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            project_background: "#517078",
            project_progress: "#f7a50f",
            project_progress_selected: "#059669",
            text: "#f9fafb",
            border: "#374151",
        }
    }

    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, TimelineColorScheme};

    #[test]
    fn mode_selects_matching_palette() {
        assert_eq!(
            TimelineColorScheme::for_mode(ThemeMode::Light).project_background,
            "#3b82f6"
        );
        assert_eq!(
            TimelineColorScheme::for_mode(ThemeMode::Dark).project_progress,
            "#f7a50f"
        );
    }
}
