pub mod board;
pub mod cards;
pub mod display;
pub mod records;
pub mod table;
pub mod theme;
pub mod timeline;

pub use board::{BoardColumns, group_tasks_by_status};
pub use cards::{ProjectCardModel, ScheduleStatus, TaskCardModel, UserCardModel};
pub use display::{DisplayOptions, GanttLayout, ViewMode};
pub use records::{Attachment, Priority, Project, SearchResults, Task, TaskStatus, User};
pub use table::{TableColumn, TablePagination, task_table_columns};
pub use theme::{ThemeMode, TimelineColorScheme};
pub use timeline::{BarTooltip, TimelineBar, project_timeline_bars};
