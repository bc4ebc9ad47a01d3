use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project record as delivered by the API collaborator.
///
/// Date fields are optional because upstream rows can carry null dates; the
/// timeline projector propagates the degenerate values instead of rejecting
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Completion percentage in `0..=100` when the API supplies one.
    #[serde(default)]
    pub progress: Option<u8>,
}

impl Project {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            start_date: None,
            end_date: None,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Minimal user payload embedded in task author/assignee fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "fileURL")]
    pub file_url: String,
    pub file_name: String,
}

/// Task record as delivered by the API collaborator.
///
/// `status` and `priority` stay raw strings: styling maps are keyed on the
/// lowercased raw value and unknown values fall through to a default style
/// rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<UserSummary>,
    #[serde(default)]
    pub assignee: Option<UserSummary>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Task {
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            tags: None,
            start_date: None,
            due_date: None,
            author: None,
            assignee: None,
            attachments: Vec::new(),
        }
    }

    /// Parses the raw status string into the canonical workflow status.
    ///
    /// Returns `None` for missing or unrecognized values; callers fall back to
    /// default presentation in that case.
    #[must_use]
    pub fn workflow_status(&self) -> Option<TaskStatus> {
        self.status.as_deref().and_then(TaskStatus::parse)
    }

    #[must_use]
    pub fn parsed_priority(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Comma-separated skill list.
    #[serde(default)]
    pub skills: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(user_id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            avatar: None,
            bio: None,
            role: None,
            department: None,
            skills: None,
        }
    }
}

/// Grouped payload returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.projects.is_empty() && self.users.is_empty()
    }
}

/// Canonical workflow status used for board columns and status styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    ToDo,
    WorkInProgress,
    UnderReview,
    Completed,
}

impl TaskStatus {
    /// Board column order.
    pub const BOARD_ORDER: [Self; 4] = [
        Self::ToDo,
        Self::WorkInProgress,
        Self::UnderReview,
        Self::Completed,
    ];

    /// Parses the raw API value, case-insensitively.
    ///
    /// Both the `"todo"`/`"to do"` and `"in progress"`/`"work in progress"`
    /// spellings occur upstream and map to the same status.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "todo" | "to do" => Some(Self::ToDo),
            "in progress" | "work in progress" => Some(Self::WorkInProgress),
            "under review" => Some(Self::UnderReview),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::WorkInProgress => "Work In Progress",
            Self::UnderReview => "Under Review",
            Self::Completed => "Completed",
        }
    }
}

/// Canonical task priority used for card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    Backlog,
}

impl Priority {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "urgent" => Some(Self::Urgent),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "backlog" => Some(Self::Backlog),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Backlog => "Backlog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, TaskStatus};

    #[test]
    fn task_status_parse_accepts_both_upstream_spellings() {
        assert_eq!(TaskStatus::parse("To Do"), Some(TaskStatus::ToDo));
        assert_eq!(TaskStatus::parse("todo"), Some(TaskStatus::ToDo));
        assert_eq!(
            TaskStatus::parse("In Progress"),
            Some(TaskStatus::WorkInProgress)
        );
        assert_eq!(
            TaskStatus::parse("Work In Progress"),
            Some(TaskStatus::WorkInProgress)
        );
        assert_eq!(TaskStatus::parse("blocked"), None);
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("URGENT"), Some(Priority::Urgent));
        assert_eq!(Priority::parse(" backlog "), Some(Priority::Backlog));
        assert_eq!(Priority::parse("p0"), None);
    }
}
