use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// One column definition of the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumn {
    /// Row field key, camelCase to match the record wire shape.
    pub field: &'static str,
    pub header: &'static str,
    pub width_px: u32,
}

/// Task table columns in display order.
#[must_use]
pub const fn task_table_columns() -> &'static [TableColumn] {
    &[
        TableColumn {
            field: "title",
            header: "Title",
            width_px: 100,
        },
        TableColumn {
            field: "description",
            header: "Description",
            width_px: 200,
        },
        TableColumn {
            field: "status",
            header: "Status",
            width_px: 130,
        },
        TableColumn {
            field: "priority",
            header: "Priority",
            width_px: 75,
        },
        TableColumn {
            field: "tags",
            header: "Tags",
            width_px: 130,
        },
        TableColumn {
            field: "startDate",
            header: "Start Date",
            width_px: 130,
        },
        TableColumn {
            field: "dueDate",
            header: "Due Date",
            width_px: 130,
        },
        TableColumn {
            field: "author",
            header: "Author",
            width_px: 150,
        },
        TableColumn {
            field: "assignee",
            header: "Assignee",
            width_px: 150,
        },
    ]
}

/// Status pill classes for table cells.
///
/// The table styles statuses on its own palette (the `"to do"` spelling,
/// green for in-progress work, inverted colors for completed) rather than
/// sharing the card badge map.
#[must_use]
pub fn status_cell_class(raw_status: &str) -> &'static str {
    match raw_status.to_lowercase().as_str() {
        "to do" => "bg-blue-100 text-blue-800",
        "work in progress" => "bg-green-100 text-green-800",
        "under review" => "bg-orange-100 text-orange-800",
        "completed" => "bg-blue-900 text-white",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Allowed rows-per-page choices.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Zero-based pagination state for the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePagination {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TablePagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: default_page_size(),
        }
    }
}

impl TablePagination {
    /// Switches the page size; only the advertised options are accepted.
    pub fn set_page_size(&mut self, page_size: usize) -> BoardResult<()> {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(BoardError::InvalidConfig(format!(
                "page size {page_size} is not one of {PAGE_SIZE_OPTIONS:?}"
            )));
        }
        self.page_size = page_size;
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Page size with a zero value (reachable through the public field or
    /// deserialized host state) read as one row per page.
    fn effective_page_size(self) -> usize {
        self.page_size.max(1)
    }

    /// Total page count for `total_rows`; zero when the table is empty.
    #[must_use]
    pub fn page_count(self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.effective_page_size())
    }

    /// Pulls the current page back into range after the row set shrinks.
    pub fn clamp_to(&mut self, total_rows: usize) {
        let last_page = self.page_count(total_rows).saturating_sub(1);
        self.page = self.page.min(last_page);
    }

    /// Row index range of the current page, clipped to `total_rows`.
    #[must_use]
    pub fn slice_range(self, total_rows: usize) -> Range<usize> {
        let page_size = self.effective_page_size();
        let start = self.page.saturating_mul(page_size).min(total_rows);
        let end = start.saturating_add(page_size).min(total_rows);
        start..end
    }
}

fn default_page_size() -> usize {
    10
}
