#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use shiftboard::models::employee::Employee;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sb() -> Command {
    cargo_bin_cmd!("shiftboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard.sqlite", name));
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

pub const ROSTER_CSV: &str = "\
Name,Start Date,Start Time,End Date,End Time,Break Hours
Ada,2025-03-10,09:00,2025-03-10,20:00,1
Bob,2025-03-10,08:00,2025-03-10,19:00,0.5
Cy,45726,0.4166666666666667,45726,0.875,1
";

/// Write `content` as a roster CSV in the temp dir.
pub fn write_roster(name: &str, content: &str) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, content).expect("write roster csv");
    path
}

/// Fresh DB with the three-employee roster imported.
pub fn init_db_with_roster(name: &str) -> String {
    let db_path = setup_test_db(name);
    let csv = write_roster(name, ROSTER_CSV);

    sb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sb()
        .args(["--db", &db_path, "import", &csv])
        .assert()
        .success();

    db_path
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test datetime")
}

/// 09:00-20:00 on 2025-03-10 with `planned` break minutes.
pub fn employee(name: &str, start: &str, planned: i64) -> Employee {
    let start_shift = dt(&format!("2025-03-10 {start}"));
    Employee::new(
        name,
        start_shift,
        start_shift + chrono::Duration::hours(11),
        planned,
    )
}
