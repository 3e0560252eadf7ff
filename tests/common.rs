#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("timetrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed one shop plus one staff employee.
/// The first shop gets id 1 and the first employee id 1001.
pub fn init_db_with_roster(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", db_path, "shop", "add", "Downtown"])
        .assert()
        .success();

    tt().args(["--db", db_path, "employee", "add", "Alice Smith", "--shop", "1"])
        .assert()
        .success();
}

/// Seed a second shop (id 2) and a second employee (id 1002) assigned to it.
pub fn seed_second_shop(db_path: &str) {
    tt().args(["--db", db_path, "shop", "add", "Harbour"])
        .assert()
        .success();

    tt().args(["--db", db_path, "employee", "add", "Bob Jones", "--shop", "2"])
        .assert()
        .success();
}

/// Record a manual entry through the CLI.
pub fn add_manual_entry(db_path: &str, employee: &str, date: &str, start: &str, end: &str, brk: &str) {
    tt().args([
        "--db", db_path, "add", employee, date, "--in", start, "--out", end, "--break", brk,
    ])
    .assert()
    .success();
}
