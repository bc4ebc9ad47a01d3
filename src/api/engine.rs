use tracing::debug;

use crate::core::{
    DisplayOptions, GanttLayout, Project, ThemeMode, TimelineBar, TimelineColorScheme, ViewMode,
    project_timeline_bars,
};
use crate::error::BoardResult;
use crate::interaction::ScrollPanConfig;

use super::TimelineEngineConfig;
use super::interaction_validation::validate_scroll_pan_config;

/// Host-facing owner of the timeline data side.
///
/// The engine holds the project records and the bars projected from them;
/// bars are recomputed eagerly whenever the records are replaced, and a
/// revision counter lets hosts skip re-reads when nothing changed. Scrolling
/// is deliberately not here: the engine and the scroll controller never talk
/// to each other, the host view composes them.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: TimelineEngineConfig,
    projects: Vec<Project>,
    bars: Vec<TimelineBar>,
    data_revision: u64,
}

impl TimelineEngine {
    /// Creates an engine from a validated config.
    pub fn new(config: TimelineEngineConfig) -> BoardResult<Self> {
        let config = TimelineEngineConfig {
            scroll_pan: validate_scroll_pan_config(config.scroll_pan)?,
            ..config
        };
        Ok(Self {
            config,
            projects: Vec::new(),
            bars: Vec::new(),
            data_revision: 0,
        })
    }

    /// Replaces the project records and reprojects the bars.
    ///
    /// Projection is unconditional; the bumped revision is what lets hosts
    /// memoize on "data actually changed".
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        debug!(count = projects.len(), "set projects");
        self.bars = project_timeline_bars(&projects);
        self.projects = projects;
        self.data_revision += 1;
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn bars(&self) -> &[TimelineBar] {
        &self.bars
    }

    /// Monotonic counter bumped on every `set_projects`.
    #[must_use]
    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.config.display
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.config.display.view_mode = view_mode;
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.config.theme_mode
    }

    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) {
        self.config.theme_mode = theme_mode;
    }

    /// Bar palette for the configured theme mode.
    #[must_use]
    pub fn color_scheme(&self) -> TimelineColorScheme {
        TimelineColorScheme::for_mode(self.config.theme_mode)
    }

    #[must_use]
    pub fn layout(&self) -> GanttLayout {
        self.config.layout
    }

    /// Validated scroll/pan tuning to hand to a scroll controller.
    #[must_use]
    pub fn scroll_pan_config(&self) -> ScrollPanConfig {
        self.config.scroll_pan
    }
}
