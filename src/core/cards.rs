//! Pure card view models: everything the task/project/user cards display,
//! derived once from a record so hosts render strings and style keys without
//! re-implementing fallback rules.

use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::records::{Project, Task, User};

/// Surface styling for a task card, keyed on the task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySurface {
    pub background: &'static str,
    pub border: &'static str,
    pub badge_class: &'static str,
}

/// Resolves the card surface for a raw priority value.
///
/// Matching is case-insensitive on the raw API string; unknown or missing
/// priorities get the default blue surface.
#[must_use]
pub fn priority_surface(priority: Option<&str>) -> PrioritySurface {
    match priority.map(str::to_lowercase).as_deref() {
        Some("urgent") => PrioritySurface {
            background: "#fef2f2",
            border: "#ef4444",
            badge_class: "bg-red-100 text-red-800",
        },
        Some("high") => PrioritySurface {
            background: "#fff7ed",
            border: "#f97316",
            badge_class: "bg-orange-100 text-orange-800",
        },
        Some("medium") => PrioritySurface {
            background: "#fefce8",
            border: "#facc15",
            badge_class: "bg-yellow-100 text-yellow-800",
        },
        Some("low") => PrioritySurface {
            background: "#f0fdf4",
            border: "#22c55e",
            badge_class: "bg-green-100 text-green-800",
        },
        Some("backlog") => PrioritySurface {
            background: "#f9fafb",
            border: "#9ca3af",
            badge_class: "bg-gray-100 text-gray-800",
        },
        _ => PrioritySurface {
            background: "#f0f9ff",
            border: "#3b82f6",
            badge_class: "bg-blue-100 text-blue-800",
        },
    }
}

/// Status badge classes used on task cards.
///
/// This map is intentionally distinct from the table view's status map; the
/// two surfaces style the same raw values differently (and this one only
/// recognizes the `"todo"` spelling).
#[must_use]
pub fn task_status_badge_class(status: Option<&str>) -> &'static str {
    match status.map(str::to_lowercase).as_deref() {
        Some("todo") => "bg-slate-100 text-slate-800",
        Some("in progress" | "work in progress") => "bg-blue-100 text-blue-800",
        Some("under review") => "bg-purple-100 text-purple-800",
        Some("completed") => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentView {
    pub file_url: String,
    pub file_name: String,
}

/// Display payload for one task card.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCardModel {
    pub title: String,
    pub description: String,
    pub status_label: String,
    pub status_badge_class: &'static str,
    pub surface: PrioritySurface,
    /// `"{priority} Priority"`. A missing priority substitutes the fallback
    /// text before the suffix, yielding the literal `"No Priority Priority"`
    /// the upstream card renders; preserved for display compatibility.
    pub priority_label: String,
    pub assignee: String,
    pub author: String,
    /// `Mon D` or `"Not set"`.
    pub start_date: String,
    pub due_date: String,
    pub tags: SmallVec<[String; 4]>,
    pub attachment: Option<AttachmentView>,
}

impl TaskCardModel {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task
                .description
                .clone()
                .unwrap_or_else(|| "No description provided".to_owned()),
            status_label: task.status.clone().unwrap_or_else(|| "No Status".to_owned()),
            status_badge_class: task_status_badge_class(task.status.as_deref()),
            surface: priority_surface(task.priority.as_deref()),
            priority_label: format!(
                "{} Priority",
                task.priority.as_deref().unwrap_or("No Priority")
            ),
            assignee: task
                .assignee
                .as_ref()
                .map_or_else(|| "Unassigned".to_owned(), |user| user.username.clone()),
            author: task
                .author
                .as_ref()
                .map_or_else(|| "Unknown".to_owned(), |user| user.username.clone()),
            start_date: format_short_date(task.start_date),
            due_date: format_short_date(task.due_date),
            tags: split_comma_list(task.tags.as_deref()),
            attachment: task.attachments.first().map(|attachment| AttachmentView {
                file_url: attachment.file_url.clone(),
                file_name: attachment.file_name.clone(),
            }),
        }
    }
}

/// Schedule position of a project relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ScheduleStatus {
    /// Derives the schedule status from the project's date window.
    ///
    /// Projects missing either date read as not started.
    #[must_use]
    pub fn derive(project: &Project, now: DateTime<Utc>) -> Self {
        let (Some(start), Some(end)) = (project.start_date, project.end_date) else {
            return Self::NotStarted;
        };
        if now < start {
            Self::NotStarted
        } else if now > end {
            Self::Completed
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::NotStarted => "bg-gray-100 text-gray-800",
            Self::InProgress => "bg-blue-100 text-blue-800",
            Self::Completed => "bg-green-100 text-green-800",
        }
    }
}

/// Display payload for one project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardModel {
    pub name: String,
    pub description: String,
    pub schedule_status: ScheduleStatus,
    pub status_label: &'static str,
    pub status_badge_class: &'static str,
    /// `Mon D, YYYY` or `"Not set"`.
    pub start_date: String,
    pub end_date: String,
}

impl ProjectCardModel {
    /// Builds the card payload; `now` anchors the schedule-status derivation
    /// so callers stay in control of the clock.
    #[must_use]
    pub fn from_project(project: &Project, now: DateTime<Utc>) -> Self {
        let schedule_status = ScheduleStatus::derive(project, now);
        Self {
            name: project.name.clone(),
            description: project
                .description
                .clone()
                .unwrap_or_else(|| "No description provided".to_owned()),
            schedule_status,
            status_label: schedule_status.label(),
            status_badge_class: schedule_status.badge_class(),
            start_date: format_long_date(project.start_date),
            end_date: format_long_date(project.end_date),
        }
    }
}

/// Display payload for one user card.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCardModel {
    pub username: String,
    /// Uppercased first character of the username; empty for empty usernames.
    pub avatar_initial: String,
    pub avatar: Option<String>,
    pub email: String,
    pub bio: String,
    pub role: String,
    pub department: String,
    pub skills: SmallVec<[String; 4]>,
}

impl UserCardModel {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            avatar_initial: user
                .username
                .chars()
                .next()
                .map(|first| first.to_uppercase().collect())
                .unwrap_or_default(),
            avatar: user.avatar.clone(),
            email: user.email.clone(),
            bio: user
                .bio
                .clone()
                .unwrap_or_else(|| "No bio provided".to_owned()),
            role: user.role.clone().unwrap_or_else(|| "Member".to_owned()),
            department: user
                .department
                .clone()
                .unwrap_or_else(|| "Not set".to_owned()),
            skills: split_comma_list(user.skills.as_deref()),
        }
    }
}

/// Splits a comma-separated API field into trimmed entries, preserving order.
/// Empty entries (doubled or trailing commas) are dropped.
fn split_comma_list(raw: Option<&str>) -> SmallVec<[String; 4]> {
    match raw {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect(),
        None => SmallVec::new(),
    }
}

fn format_short_date(moment: Option<DateTime<Utc>>) -> String {
    match moment {
        Some(moment) => moment.format("%b %-d").to_string(),
        None => "Not set".to_owned(),
    }
}

fn format_long_date(moment: Option<DateTime<Utc>>) -> String {
    match moment {
        Some(moment) => moment.format("%b %-d, %Y").to_string(),
        None => "Not set".to_owned(),
    }
}
