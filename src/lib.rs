//! taskboard-rs: headless view engine for project-management UIs.
//!
//! Typed records, pure view-model projections (Gantt timeline bars, cards,
//! board columns, table paging), a deterministic scroll/pan controller with
//! kinetic coasting, and a debounced search front end. No rendering, no
//! network, no storage: hosts feed events and typed data in and read view
//! models out through the seams in [`platform`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod platform;
pub mod search;
pub mod telemetry;

pub use api::{ScrollPanController, SearchController, TimelineEngine, TimelineEngineConfig};
pub use error::{BoardError, BoardResult};
