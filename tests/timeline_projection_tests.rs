use chrono::{DateTime, TimeZone, Utc};
use taskboard_rs::core::{Project, project_timeline_bars};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn build_project(id: i64, name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Project {
    Project::new(id, name).with_dates(start, end)
}

#[test]
fn projection_preserves_length_and_order() {
    let projects = vec![
        build_project(3, "gamma", utc(2024, 1, 1), utc(2024, 2, 1)),
        build_project(1, "alpha", utc(2024, 3, 1), utc(2024, 3, 15)),
        build_project(2, "beta", utc(2024, 2, 1), utc(2024, 2, 2)),
    ];

    let bars = project_timeline_bars(&projects);
    assert_eq!(bars.len(), projects.len());
    assert_eq!(bars[0].id, "Project-3");
    assert_eq!(bars[1].id, "Project-1");
    assert_eq!(bars[2].id, "Project-2");
}

#[test]
fn duration_is_whole_days_rounded() {
    let projects = vec![build_project(1, "alpha", utc(2024, 1, 1), utc(2024, 1, 11))];
    let bars = project_timeline_bars(&projects);
    assert_eq!(bars[0].duration_days, 10.0);
    assert_eq!(bars[0].tooltip.duration, "10 days");
}

#[test]
fn duration_rounds_half_days_away_from_zero() {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    let end = Utc
        .with_ymd_and_hms(2024, 1, 2, 12, 0, 0)
        .single()
        .expect("valid date");
    let projects = vec![build_project(1, "alpha", start, end)];

    let bars = project_timeline_bars(&projects);
    assert_eq!(bars[0].duration_days, 2.0);
}

#[test]
fn reversed_window_yields_negative_duration() {
    let projects = vec![build_project(1, "alpha", utc(2024, 1, 11), utc(2024, 1, 1))];
    let bars = project_timeline_bars(&projects);
    assert_eq!(bars[0].duration_days, -10.0);
    assert_eq!(bars[0].tooltip.duration, "-10 days");
}

#[test]
fn missing_progress_defaults_to_fifty() {
    let projects = vec![
        build_project(1, "alpha", utc(2024, 1, 1), utc(2024, 1, 2)),
        build_project(2, "beta", utc(2024, 1, 1), utc(2024, 1, 2)).with_progress(75),
    ];

    let bars = project_timeline_bars(&projects);
    assert_eq!(bars[0].progress, 50);
    assert_eq!(bars[0].tooltip.progress, "50%");
    assert_eq!(bars[1].progress, 75);
    assert_eq!(bars[1].tooltip.progress, "75%");
}

#[test]
fn missing_dates_propagate_as_degenerate_values() {
    let projects = vec![Project::new(7, "undated")];
    let bars = project_timeline_bars(&projects);

    assert!(bars[0].start_ms.is_nan());
    assert!(bars[0].end_ms.is_nan());
    assert!(bars[0].duration_days.is_nan());
    assert_eq!(bars[0].tooltip.start_date, "Invalid Date");
    assert_eq!(bars[0].tooltip.end_date, "Invalid Date");
    assert_eq!(bars[0].tooltip.duration, "NaN days");
    // Progress still defaults even when the window is degenerate.
    assert_eq!(bars[0].tooltip.progress, "50%");
}

#[test]
fn one_missing_date_still_degenerates_the_duration() {
    let mut project = Project::new(9, "half-dated");
    project.start_date = Some(utc(2024, 5, 1));
    let bars = project_timeline_bars(&[project]);

    assert!(bars[0].start_ms.is_finite());
    assert!(bars[0].end_ms.is_nan());
    assert!(bars[0].duration_days.is_nan());
    assert_eq!(bars[0].tooltip.start_date, "5/1/2024");
    assert_eq!(bars[0].tooltip.end_date, "Invalid Date");
}

#[test]
fn tooltip_carries_name_and_unpadded_dates() {
    let projects = vec![build_project(4, "Website Redesign", utc(2024, 3, 5), utc(2024, 11, 30))];
    let bars = project_timeline_bars(&projects);

    assert_eq!(bars[0].tooltip.name, "Website Redesign");
    assert_eq!(bars[0].tooltip.start_date, "3/5/2024");
    assert_eq!(bars[0].tooltip.end_date, "11/30/2024");
}

#[test]
fn projection_is_idempotent() {
    let projects = vec![
        build_project(1, "alpha", utc(2024, 1, 1), utc(2024, 1, 11)).with_progress(30),
        Project::new(2, "undated"),
    ];

    let first = project_timeline_bars(&projects);
    let second = project_timeline_bars(&projects);
    // NaN fields break Vec equality, so compare field by field.
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.progress, b.progress);
        assert_eq!(a.tooltip, b.tooltip);
        assert_eq!(a.start_ms.is_nan(), b.start_ms.is_nan());
        if a.start_ms.is_finite() {
            assert_eq!(a.start_ms, b.start_ms);
            assert_eq!(a.end_ms, b.end_ms);
            assert_eq!(a.duration_days, b.duration_days);
        }
    }
}

#[test]
fn empty_input_projects_to_empty_output() {
    assert!(project_timeline_bars(&[]).is_empty());
}
