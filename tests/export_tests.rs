use predicates::str::contains;
use std::fs;

mod common;
use common::{add_manual_entry, init_db_with_roster, setup_test_db, temp_out, tt};

#[test]
fn test_export_report_csv_carries_rows_and_headers() {
    let db_path = setup_test_db("export_csv");
    init_db_with_roster(&db_path);
    add_manual_entry(&db_path, "1001", "2024-03-09", "09:00", "17:00", "30");

    let out = temp_out("export_csv", "csv");

    tt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--kind",
        "daily",
        "--date",
        "2024-03-09",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("employee,shop,date,clockIn,clockOut,breakHours,workHours,weekendHours"));
    assert!(content.contains("Alice Smith"));
    assert!(content.contains("7.50"));
}

#[test]
fn test_export_raw_entries_json_uses_wire_field_names() {
    let db_path = setup_test_db("export_entries_json");
    init_db_with_roster(&db_path);
    add_manual_entry(&db_path, "1001", "2024-03-09", "09:00", "17:00", "30");

    let out = temp_out("export_entries_json", "json");

    tt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--entries",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"employeeId\": 1001"));
    assert!(content.contains("\"shopId\": 1"));
    assert!(content.contains("\"timestampIn\""));
    assert!(content.contains("\"timestampOut\""));
    assert!(content.contains("\"breakDuration\": 30"));
    assert!(content.contains("\"isManual\": true"));
    // clock-only fields must be absent on a manual entry
    assert!(!content.contains("\"action\""));
}

#[test]
fn test_export_xlsx_and_pdf_produce_files() {
    let db_path = setup_test_db("export_xlsx_pdf");
    init_db_with_roster(&db_path);
    add_manual_entry(&db_path, "1001", "2024-03-09", "09:00", "17:00", "30");

    let xlsx = temp_out("export_xlsx", "xlsx");
    tt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "xlsx",
        "--file",
        &xlsx,
        "--kind",
        "daily",
        "--date",
        "2024-03-09",
        "--force",
    ])
    .assert()
    .success();

    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_pdf", "pdf");
    tt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "pdf",
        "--file",
        &pdf,
        "--kind",
        "daily",
        "--date",
        "2024-03-09",
        "--force",
    ])
    .assert()
    .success();

    let pdf_bytes = fs::read(&pdf).expect("read exported pdf");
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_report_without_date_fails() {
    let db_path = setup_test_db("export_no_date");
    init_db_with_roster(&db_path);

    let out = temp_out("export_no_date", "csv");

    tt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("select a date"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let db_path = setup_test_db("export_relative");
    init_db_with_roster(&db_path);

    tt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "report.csv",
        "--entries",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_creates_compressed_copy() {
    let db_path = setup_test_db("backup");
    init_db_with_roster(&db_path);

    let dest = temp_out("backup", "sqlite");
    let zip_dest = dest.replace(".sqlite", ".zip");
    fs::remove_file(&zip_dest).ok();

    tt().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&zip_dest).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_roster(&db_path);
    add_manual_entry(&db_path, "1001", "2024-03-09", "09:00", "17:00", "0");

    tt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_roster(&db_path);

    tt().args(["--db", &db_path, "db", "--check", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Employees:"))
        .stdout(contains("Vacuum completed"));
}
