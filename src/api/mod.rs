mod engine;
mod engine_config;
mod interaction_validation;
mod project_view;
mod scroll_controller;
mod search_controller;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use project_view::{ProjectTab, ProjectViewState};
pub use scroll_controller::ScrollPanController;
pub use search_controller::{SearchController, SearchSection, SearchStatus};
