//! Engine-level tests driven through the library API: per-entry metrics,
//! period filtering, aggregation and report/dashboard composition.

use chrono::{DateTime, NaiveDate, Utc};
use timetrack::core::aggregate::aggregate;
use timetrack::core::dashboard::build_dashboard;
use timetrack::core::metrics::entry_metrics;
use timetrack::core::period::{ReportKind, ReportScope, filter_entries, week_bounds};
use timetrack::core::report::build_report;
use timetrack::errors::AppError;
use timetrack::models::action::ClockAction;
use timetrack::models::directory::Directory;
use timetrack::models::employee::Employee;
use timetrack::models::entry::{EntryKind, TimeEntry};
use timetrack::models::role::Role;
use timetrack::models::status::PresenceStatus;

const EPS: f64 = 1e-9;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse::<DateTime<Utc>>().unwrap()
}

fn manual(id: i64, employee: i64, shop: i64, day: &str, t_in: &str, t_out: &str, brk: i64) -> TimeEntry {
    TimeEntry {
        id,
        employee_id: employee,
        shop_id: shop,
        date: date(day),
        recorded_by: "test".into(),
        kind: EntryKind::Manual {
            timestamp_in: ts(t_in),
            timestamp_out: ts(t_out),
            break_minutes: brk,
        },
    }
}

fn clock(id: i64, employee: i64, shop: i64, day: &str, t: &str, action: ClockAction) -> TimeEntry {
    TimeEntry {
        id,
        employee_id: employee,
        shop_id: shop,
        date: date(day),
        recorded_by: "test".into(),
        kind: EntryKind::Clock {
            timestamp: ts(t),
            action,
            status: action.status_after(),
        },
    }
}

// ------------------------------------------------------------------
// Metrics
// ------------------------------------------------------------------

#[test]
fn saturday_shift_attributes_all_work_to_weekend() {
    // 2024-03-09 is a Saturday
    let entry = manual(1, 7, 2, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T17:00:00Z", 30);

    let m = entry_metrics(&entry);
    assert!((m.work_hours - 7.5).abs() < EPS);
    assert!((m.break_hours - 0.5).abs() < EPS);
    assert!((m.weekend_hours - 7.5).abs() < EPS);
}

#[test]
fn weekday_shift_has_zero_weekend_hours() {
    // 2024-03-05 is a Tuesday
    let entry = manual(1, 7, 2, "2024-03-05", "2024-03-05T09:00:00Z", "2024-03-05T17:00:00Z", 0);

    let m = entry_metrics(&entry);
    assert!((m.work_hours - 8.0).abs() < EPS);
    assert!((m.weekend_hours - 0.0).abs() < EPS);
}

#[test]
fn shift_spanning_into_saturday_counts_whole_shift_as_weekend() {
    // Friday through Saturday: the whole shift goes to weekend, not a split
    let entry = manual(1, 7, 2, "2024-03-08", "2024-03-08T20:00:00Z", "2024-03-09T04:00:00Z", 60);

    let m = entry_metrics(&entry);
    assert!((m.work_hours - 7.0).abs() < EPS);
    assert!((m.weekend_hours - 7.0).abs() < EPS);
}

#[test]
fn work_plus_break_equals_span_for_well_formed_entries() {
    let cases = [
        ("2024-03-04T08:00:00Z", "2024-03-04T16:30:00Z", 45),
        ("2024-03-05T22:00:00Z", "2024-03-06T06:00:00Z", 0),
        ("2024-03-06T09:15:00Z", "2024-03-06T09:15:00Z", 0),
    ];

    for (t_in, t_out, brk) in cases {
        let entry = manual(1, 1, 1, "2024-03-04", t_in, t_out, brk);
        let m = entry_metrics(&entry);

        let span_hours = (ts(t_out) - ts(t_in)).num_seconds() as f64 / 3600.0;
        assert!(
            (m.work_hours + m.break_hours - span_hours).abs() < EPS,
            "work {} + break {} != span {}",
            m.work_hours,
            m.break_hours,
            span_hours
        );
    }
}

#[test]
fn reversed_manual_entry_passes_through_negative_hours() {
    let entry = manual(1, 1, 1, "2024-03-05", "2024-03-05T17:00:00Z", "2024-03-05T09:00:00Z", 0);

    let m = entry_metrics(&entry);
    assert!((m.work_hours + 8.0).abs() < EPS);
    // reversed range never reaches a weekend day
    assert!((m.weekend_hours - 0.0).abs() < EPS);
}

#[test]
fn clock_entries_carry_zero_metrics() {
    let entry = clock(1, 3, 1, "2024-03-09", "2024-03-09T09:00:00Z", ClockAction::ClockIn);

    let m = entry_metrics(&entry);
    assert!((m.work_hours).abs() < EPS);
    assert!((m.break_hours).abs() < EPS);
    assert!((m.weekend_hours).abs() < EPS);
}

// ------------------------------------------------------------------
// Period filter
// ------------------------------------------------------------------

#[test]
fn week_bounds_treat_sunday_as_last_day() {
    // 2024-03-10 is a Sunday
    let sunday = date("2024-03-10");
    let (start, end) = week_bounds(sunday);

    assert_eq!(start, date("2024-03-04"));
    assert_eq!(end, sunday);
}

#[test]
fn daily_filter_matches_exact_date_and_shop() {
    let entries = vec![
        manual(1, 7, 2, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T17:00:00Z", 30),
        manual(2, 7, 2, "2024-03-10", "2024-03-10T09:00:00Z", "2024-03-10T17:00:00Z", 0),
    ];

    let scope = ReportScope::new(ReportKind::Daily, Some(date("2024-03-09")), 2).unwrap();
    let hits = filter_entries(&entries, &scope);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    let other_shop = ReportScope::new(ReportKind::Daily, Some(date("2024-03-09")), 5).unwrap();
    assert!(filter_entries(&entries, &other_shop).is_empty());
}

#[test]
fn weekly_filter_covers_monday_through_sunday() {
    let entries = vec![
        manual(1, 1, 1, "2024-03-04", "2024-03-04T09:00:00Z", "2024-03-04T17:00:00Z", 0),
        manual(2, 1, 1, "2024-03-10", "2024-03-10T09:00:00Z", "2024-03-10T12:00:00Z", 0),
        manual(3, 1, 1, "2024-03-11", "2024-03-11T09:00:00Z", "2024-03-11T17:00:00Z", 0),
    ];

    // Wednesday of the same week
    let scope = ReportScope::new(ReportKind::Weekly, Some(date("2024-03-06")), 0).unwrap();
    let hits = filter_entries(&entries, &scope);

    let ids: Vec<i64> = hits.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn monthly_filter_matches_month_and_year() {
    let entries = vec![
        manual(1, 1, 1, "2024-03-31", "2024-03-31T09:00:00Z", "2024-03-31T17:00:00Z", 0),
        manual(2, 1, 1, "2024-04-01", "2024-04-01T09:00:00Z", "2024-04-01T17:00:00Z", 0),
        manual(3, 1, 1, "2023-03-15", "2023-03-15T09:00:00Z", "2023-03-15T17:00:00Z", 0),
    ];

    let scope = ReportScope::new(ReportKind::Monthly, Some(date("2024-03-01")), 0).unwrap();
    let ids: Vec<i64> = filter_entries(&entries, &scope).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn filter_is_idempotent_and_order_preserving() {
    let entries = vec![
        manual(5, 1, 1, "2024-03-09", "2024-03-09T14:00:00Z", "2024-03-09T18:00:00Z", 0),
        manual(2, 2, 1, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T13:00:00Z", 0),
        manual(9, 3, 2, "2024-03-09", "2024-03-09T10:00:00Z", "2024-03-09T12:00:00Z", 0),
    ];

    let scope = ReportScope::new(ReportKind::Daily, Some(date("2024-03-09")), 1).unwrap();

    let once: Vec<TimeEntry> = filter_entries(&entries, &scope)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<TimeEntry> = filter_entries(&once, &scope).into_iter().cloned().collect();

    assert_eq!(once, twice);
    assert_eq!(once.iter().map(|e| e.id).collect::<Vec<_>>(), vec![5, 2]);
}

#[test]
fn scope_without_reference_date_is_an_error() {
    let err = ReportScope::new(ReportKind::Daily, None, 0).unwrap_err();
    assert!(matches!(err, AppError::MissingScope));
}

// ------------------------------------------------------------------
// Aggregation
// ------------------------------------------------------------------

#[test]
fn aggregate_is_order_independent() {
    let entries = vec![
        manual(1, 1, 1, "2024-03-04", "2024-03-04T09:00:00Z", "2024-03-04T17:00:00Z", 30),
        manual(2, 2, 1, "2024-03-09", "2024-03-09T10:00:00Z", "2024-03-09T15:00:00Z", 0),
        clock(3, 3, 1, "2024-03-05", "2024-03-05T08:00:00Z", ClockAction::ClockIn),
    ];

    let forward = aggregate(entries.iter());
    let reversed = aggregate(entries.iter().rev());
    let rotated = aggregate(entries[1..].iter().chain(entries[..1].iter()));

    for other in [reversed, rotated] {
        assert!((forward.work_hours - other.work_hours).abs() < EPS);
        assert!((forward.break_hours - other.break_hours).abs() < EPS);
        assert!((forward.weekend_hours - other.weekend_hours).abs() < EPS);
        assert_eq!(forward.distinct_employees, other.distinct_employees);
    }
}

#[test]
fn weekly_aggregate_sums_monday_and_saturday_shifts() {
    // Monday: 8 work hours, no weekend. Saturday: 5 work hours, all weekend.
    let entries = vec![
        manual(1, 1, 1, "2024-03-04", "2024-03-04T09:00:00Z", "2024-03-04T17:00:00Z", 0),
        manual(2, 2, 1, "2024-03-09", "2024-03-09T10:00:00Z", "2024-03-09T15:00:00Z", 0),
    ];

    let scope = ReportScope::new(ReportKind::Weekly, Some(date("2024-03-06")), 0).unwrap();
    let totals = aggregate(filter_entries(&entries, &scope));

    assert!((totals.work_hours - 13.0).abs() < EPS);
    assert!((totals.weekend_hours - 5.0).abs() < EPS);
    assert_eq!(totals.distinct_employees, 2);
}

#[test]
fn clock_entries_count_employees_but_no_hours() {
    let entries = vec![
        clock(1, 42, 1, "2024-03-05", "2024-03-05T08:00:00Z", ClockAction::ClockIn),
        clock(2, 42, 1, "2024-03-05", "2024-03-05T16:00:00Z", ClockAction::ClockOut),
        manual(3, 7, 1, "2024-03-05", "2024-03-05T09:00:00Z", "2024-03-05T13:00:00Z", 0),
    ];

    let totals = aggregate(entries.iter());
    assert!((totals.work_hours - 4.0).abs() < EPS);
    assert_eq!(totals.distinct_employees, 2);
}

// ------------------------------------------------------------------
// Report / dashboard composition
// ------------------------------------------------------------------

#[test]
fn report_rows_and_summary_cover_manual_entries_only() {
    let entries = vec![
        manual(1, 7, 2, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T17:00:00Z", 30),
        clock(2, 8, 2, "2024-03-09", "2024-03-09T09:05:00Z", ClockAction::ClockIn),
    ];

    let scope = ReportScope::new(ReportKind::Daily, Some(date("2024-03-09")), 0).unwrap();
    let report = build_report(&entries, &scope, &Directory::default());

    assert_eq!(report.rows.len(), 1);
    // Employee 8 only has a clock entry; the report-side count excludes it
    assert_eq!(report.summary.distinct_employees, 1);
    assert!((report.summary.work_hours - 7.5).abs() < EPS);
    assert!((report.summary.weekend_hours - 7.5).abs() < EPS);
}

#[test]
fn empty_scope_yields_empty_report_not_an_error() {
    let entries = vec![manual(
        1, 7, 2, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T17:00:00Z", 0,
    )];

    let scope = ReportScope::new(ReportKind::Daily, Some(date("2030-01-01")), 0).unwrap();
    let report = build_report(&entries, &scope, &Directory::default());

    assert!(report.rows.is_empty());
    assert_eq!(report.summary.distinct_employees, 0);
    assert!((report.summary.work_hours).abs() < EPS);
}

#[test]
fn unknown_names_fall_back_to_placeholders() {
    let entries = vec![manual(
        1, 7, 5, "2024-03-09", "2024-03-09T09:00:00Z", "2024-03-09T17:00:00Z", 0,
    )];

    let scope = ReportScope::new(ReportKind::Daily, Some(date("2024-03-09")), 0).unwrap();
    let report = build_report(&entries, &scope, &Directory::default());

    assert_eq!(report.rows[0].employee, "N/A");
    assert_eq!(report.rows[0].shop, "Unassigned");
}

#[test]
fn dashboard_counts_all_entry_kinds_and_sorts_recent_descending() {
    let today = date("2024-03-06");

    let entries = vec![
        manual(1, 1, 1, "2024-03-04", "2024-03-04T09:00:00Z", "2024-03-04T17:00:00Z", 0),
        clock(2, 2, 1, "2024-03-05", "2024-03-05T08:00:00Z", ClockAction::ClockIn),
        clock(3, 2, 1, "2024-03-05", "2024-03-05T16:00:00Z", ClockAction::ClockOut),
        // outside the week, must not appear
        manual(4, 3, 1, "2024-03-11", "2024-03-11T09:00:00Z", "2024-03-11T17:00:00Z", 0),
    ];

    let dashboard = build_dashboard(&entries, today, &Directory::default(), 10);

    // Clock entries add no hours but their employee counts as worked
    assert!((dashboard.summary.work_hours - 8.0).abs() < EPS);
    assert_eq!(dashboard.summary.distinct_employees, 2);

    let actions: Vec<&str> = dashboard.recent.iter().map(|r| r.action.as_str()).collect();
    assert_eq!(actions, vec!["clockOut", "clockIn", "manual"]);
}

#[test]
fn dashboard_recent_is_limited_and_stable_on_ties() {
    let today = date("2024-03-06");

    // Twelve clock entries at the same instant: the stable sort must keep
    // stored order, and only the first ten survive the cut.
    let entries: Vec<TimeEntry> = (0..12)
        .map(|i| {
            clock(
                i + 1,
                100 + i,
                1,
                "2024-03-05",
                "2024-03-05T08:00:00Z",
                ClockAction::ClockIn,
            )
        })
        .collect();

    let employees: Vec<Employee> = (0..12)
        .map(|i| Employee {
            id: 100 + i,
            name: format!("emp-{}", 100 + i),
            role: Role::Staff,
            shop_id: 1,
            full_access: false,
            status: PresenceStatus::Present,
        })
        .collect();
    let names = Directory::new(&employees, &[]);

    let dashboard = build_dashboard(&entries, today, &names, 10);

    assert_eq!(dashboard.recent.len(), 10);
    // All timestamps tie, so input (stored) order is preserved
    assert_eq!(dashboard.recent[0].employee, "emp-100");
    assert_eq!(dashboard.recent[9].employee, "emp-109");
    assert_eq!(dashboard.summary.distinct_employees, 12);
}
