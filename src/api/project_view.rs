use std::fmt;

use serde::{Deserialize, Serialize};

/// Tabs of the project header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectTab {
    #[default]
    Board,
    List,
    Timeline,
    Table,
}

impl fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "TimeLine" keeps the upstream header's spelling.
        let label = match self {
            Self::Board => "Board",
            Self::List => "List",
            Self::Timeline => "TimeLine",
            Self::Table => "Table",
        };
        f.write_str(label)
    }
}

/// Local UI state of the project page: active tab plus the two modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectViewState {
    #[serde(default)]
    pub active_tab: ProjectTab,
    #[serde(default)]
    pub new_project_modal_open: bool,
    #[serde(default)]
    pub new_task_modal_open: bool,
}

impl ProjectViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_tab(&mut self, tab: ProjectTab) {
        self.active_tab = tab;
    }

    pub fn open_new_project_modal(&mut self) {
        self.new_project_modal_open = true;
    }

    pub fn close_new_project_modal(&mut self) {
        self.new_project_modal_open = false;
    }

    pub fn open_new_task_modal(&mut self) {
        self.new_task_modal_open = true;
    }

    pub fn close_new_task_modal(&mut self) {
        self.new_task_modal_open = false;
    }
}
