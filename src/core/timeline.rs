use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::records::Project;

/// Milliseconds per day, the divisor behind `duration_days`.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Progress percentage substituted when a record carries none.
///
/// A display convention inherited from the upstream data shape, not a
/// business rule; preserved exactly for compatibility.
pub const DEFAULT_PROGRESS: u8 = 50;

/// Bar flavor hint for hosts that style entry kinds differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Task,
    Milestone,
    Project,
}

/// Preformatted tooltip payload attached to every bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTooltip {
    pub name: String,
    /// `M/D/YYYY` or `"Invalid Date"` for degenerate timestamps.
    pub start_date: String,
    pub end_date: String,
    /// `"{n} days"`, `"NaN days"` when the window is degenerate.
    pub duration: String,
    /// `"{p}%"`.
    pub progress: String,
}

/// Renderable timeline entry derived from one project record.
///
/// Timestamps are epoch milliseconds; missing or unparseable source dates
/// surface as `NaN` here and as `"Invalid Date"`/`"NaN days"` in the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    /// Derived identifier, unique per project (`"Project-{id}"`).
    pub id: String,
    pub start_ms: f64,
    pub end_ms: f64,
    /// Whole days between end and start, rounded half away from zero.
    /// `NaN` when either timestamp is degenerate.
    pub duration_days: f64,
    /// Completion percentage, `DEFAULT_PROGRESS` when the record has none.
    pub progress: u8,
    pub kind: BarKind,
    pub disabled: bool,
    pub tooltip: BarTooltip,
}

/// Projects project records into renderable timeline bars.
///
/// Pure and total: output length and order always match the input, invalid
/// dates propagate as degenerate values instead of erroring, and repeated
/// calls on equal input yield equal bars.
#[must_use]
pub fn project_timeline_bars(projects: &[Project]) -> Vec<TimelineBar> {
    #[cfg(feature = "parallel-projection")]
    {
        projects.par_iter().map(bar_from_project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        projects.iter().map(bar_from_project).collect()
    }
}

fn bar_from_project(project: &Project) -> TimelineBar {
    let start_ms = epoch_millis(project.start_date);
    let end_ms = epoch_millis(project.end_date);
    let duration_days = ((end_ms - start_ms) / MILLIS_PER_DAY).round();
    let progress = project.progress.unwrap_or(DEFAULT_PROGRESS);

    TimelineBar {
        id: format!("Project-{}", project.id),
        start_ms,
        end_ms,
        duration_days,
        progress,
        kind: BarKind::Project,
        disabled: false,
        tooltip: BarTooltip {
            name: project.name.clone(),
            start_date: format_bar_date(start_ms),
            end_date: format_bar_date(end_ms),
            duration: format_duration_days(duration_days),
            progress: format!("{progress}%"),
        },
    }
}

/// Converts an optional timestamp into epoch milliseconds, `NaN` when absent.
#[must_use]
pub fn epoch_millis(moment: Option<DateTime<Utc>>) -> f64 {
    match moment {
        Some(moment) => moment.timestamp_millis() as f64,
        None => f64::NAN,
    }
}

/// Formats epoch milliseconds as an en-US `M/D/YYYY` date string.
///
/// Non-finite or out-of-range timestamps format as `"Invalid Date"`.
#[must_use]
pub fn format_bar_date(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() {
        return "Invalid Date".to_owned();
    }
    match DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(moment) => moment.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_owned(),
    }
}

fn format_duration_days(days: f64) -> String {
    // -0.0 compares equal to 0.0, so a slightly negative rounded window still
    // formats as "0 days".
    if days == 0.0 {
        return "0 days".to_owned();
    }
    format!("{days} days")
}

#[cfg(test)]
mod tests {
    use super::{epoch_millis, format_bar_date};
    use chrono::{TimeZone, Utc};

    #[test]
    fn epoch_millis_of_none_is_nan() {
        assert!(epoch_millis(None).is_nan());
    }

    #[test]
    fn bar_date_formats_without_zero_padding() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let ms = epoch_millis(Some(moment));
        assert_eq!(format_bar_date(ms), "3/5/2024");
    }

    #[test]
    fn bar_date_of_nan_is_invalid_date() {
        assert_eq!(format_bar_date(f64::NAN), "Invalid Date");
        assert_eq!(format_bar_date(f64::INFINITY), "Invalid Date");
    }
}
