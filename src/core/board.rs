use indexmap::IndexMap;

use crate::core::records::{Task, TaskStatus};

/// Tasks bucketed into the fixed board columns.
///
/// All four workflow columns are always present, in board order, even when
/// empty; tasks whose raw status does not parse land in `unclassified`.
#[derive(Debug, Clone)]
pub struct BoardColumns<'a> {
    columns: IndexMap<TaskStatus, Vec<&'a Task>>,
    unclassified: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        self.columns.get(&status).map_or(&[], Vec::as_slice)
    }

    /// Columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> {
        self.columns
            .iter()
            .map(|(status, tasks)| (*status, tasks.as_slice()))
    }

    #[must_use]
    pub fn unclassified(&self) -> &[&'a Task] {
        &self.unclassified
    }
}

/// Groups tasks into board columns, preserving input order within each column.
#[must_use]
pub fn group_tasks_by_status(tasks: &[Task]) -> BoardColumns<'_> {
    let mut columns: IndexMap<TaskStatus, Vec<&Task>> =
        IndexMap::with_capacity(TaskStatus::BOARD_ORDER.len());
    for status in TaskStatus::BOARD_ORDER {
        columns.insert(status, Vec::new());
    }

    let mut unclassified = Vec::new();
    for task in tasks {
        match task.workflow_status() {
            Some(status) => columns.entry(status).or_default().push(task),
            None => unclassified.push(task),
        }
    }

    BoardColumns {
        columns,
        unclassified,
    }
}
