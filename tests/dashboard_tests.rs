use chrono::{Datelike, Duration, Local};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_manual_entry, init_db_with_roster, setup_test_db, tt};

#[test]
fn test_dashboard_shows_current_week_summary_and_recent_entries() {
    let db_path = setup_test_db("dashboard_week");
    init_db_with_roster(&db_path);

    // A monday-anchored date inside the current week keeps the entry in
    // scope whatever weekday the test runs on.
    let today = Local::now().date_naive();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    add_manual_entry(
        &db_path,
        "1001",
        &monday.to_string(),
        "09:00",
        "17:00",
        "30",
    );

    tt().args(["--db", &db_path, "clock", "1001", "in"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Shop Performance Overview"))
        .stdout(contains("Employees Worked:"))
        .stdout(contains("7.50"))
        .stdout(contains("Recent Time Entries:"))
        .stdout(contains("Alice Smith"))
        .stdout(contains("clockIn"))
        .stdout(contains("manual"));
}

#[test]
fn test_dashboard_ignores_entries_outside_the_week() {
    let db_path = setup_test_db("dashboard_old_entries");
    init_db_with_roster(&db_path);

    // Entry far in the past: no hours on the dashboard
    add_manual_entry(&db_path, "1001", "2020-01-06", "09:00", "17:00", "0");

    tt().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("0.00"))
        .stdout(contains("No time entries this week."))
        .stdout(contains("Alice Smith").not());
}

#[test]
fn test_dashboard_on_empty_database() {
    let db_path = setup_test_db("dashboard_empty");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Employees Worked:"))
        .stdout(contains("No time entries this week."));
}
