use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_roster, sb, setup_test_db, temp_out, write_roster};

#[test]
fn test_import_and_list_board() {
    let db_path = init_db_with_roster("cli_import_list");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 11:00", "list"])
        .assert()
        .success()
        .stdout(contains("Ada"))
        .stdout(contains("Bob"))
        .stdout(contains("Cy"))
        .stdout(contains("09:00 - 20:00"))
        .stdout(contains("3 employees | 0 on break"));
}

#[test]
fn test_import_reports_skipped_rows() {
    let db_path = setup_test_db("cli_import_skipped");
    let csv = write_roster(
        "cli_import_skipped",
        "Name,a,b,c,d,e\nAda,2025-03-10,09:00,2025-03-10,20:00,1\nBob,2025-03-10,08:00,2025-03-10,19:00,oops\n",
    );

    sb()
        .args(["--db", &db_path, "import", &csv])
        .assert()
        .success()
        .stdout(contains("Skipped row 3"))
        .stdout(contains("Imported 1 employees"));
}

#[test]
fn test_break_cycle_updates_owed_and_projection() {
    let db_path = init_db_with_roster("cli_break_cycle");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:00", "start", "ada"])
        .assert()
        .success()
        .stdout(contains("expected back 12:30"));

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:10", "list"])
        .assert()
        .success()
        .stdout(contains("on break"))
        .stdout(contains("10 min"))
        .stdout(contains("1 on break"));

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:30", "end", "Ada"])
        .assert()
        .success()
        .stdout(contains("after 30 min, 30 min still owed"));

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:31", "list"])
        .assert()
        .success()
        .stdout(contains("12:00 - 12:30"))
        .stdout(contains("20:30"))
        .stdout(contains("30'"));
}

#[test]
fn test_start_twice_fails() {
    let db_path = init_db_with_roster("cli_start_twice");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:00", "start", "Bob"])
        .assert()
        .success();

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:05", "start", "Bob"])
        .assert()
        .failure()
        .stderr(contains("already on break"));
}

#[test]
fn test_end_without_start_fails() {
    let db_path = init_db_with_roster("cli_end_without_start");

    sb()
        .args(["--db", &db_path, "end", "Cy"])
        .assert()
        .failure()
        .stderr(contains("is not on break"));
}

#[test]
fn test_unknown_employee_fails() {
    let db_path = init_db_with_roster("cli_unknown_employee");

    sb()
        .args(["--db", &db_path, "start", "Zed"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: Zed"));
}

#[test]
fn test_edit_break_valid_and_invalid() {
    let db_path = init_db_with_roster("cli_edit_break");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:00", "start", "Ada"])
        .assert()
        .success();
    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:30", "end", "Ada"])
        .assert()
        .success();

    sb()
        .args([
            "--db", &db_path, "edit", "Ada", "--break", "1", "--start", "12:10", "--end", "12:10",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid break range"));

    sb()
        .args([
            "--db", &db_path, "edit", "Ada", "--break", "1", "--start", "12:00", "--end", "12:45",
        ])
        .assert()
        .success()
        .stdout(contains("12:00 - 12:30 → 12:00 - 12:45, 15 min still owed"));

    sb()
        .args([
            "--db", &db_path, "edit", "Ada", "--break", "2", "--start", "13:00", "--end", "13:10",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid break index"));
}

#[test]
fn test_clear_with_confirmation() {
    let db_path = init_db_with_roster("cli_clear");

    sb()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Nothing cleared"));

    sb()
        .args(["--db", &db_path, "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Cleared 3 employees"));

    sb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("The board is empty"));
}

#[test]
fn test_corrupted_storage_starts_empty() {
    let db_path = init_db_with_roster("cli_corrupted");

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "UPDATE kv_store SET value = '{broken' WHERE key = 'employeeData'",
        [],
    )
    .expect("corrupt roster");
    drop(conn);

    sb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("unreadable"))
        .stdout(contains("The board is empty"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = init_db_with_roster("cli_export");
    let json_out = temp_out("cli_export", "json");
    let csv_out = temp_out("cli_export", "csv");

    sb()
        .args([
            "--db", &db_path, "--now", "2025-03-10 11:00", "export", "--format", "json", "--file",
            &json_out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&json_out).expect("read exported json");
    assert!(content.contains("\"name\": \"Ada\""));
    assert!(content.contains("\"projected_end\": \"2025-03-10 20:00\""));

    sb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("row,name,status,owed_minutes"));
    assert!(content.contains("Bob"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = init_db_with_roster("cli_log");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:00", "start", "Cy"])
        .assert()
        .success();

    sb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("start_break"))
        .stdout(contains("Cy"));
}

#[test]
fn test_timeline_and_single_watch_tick() {
    let db_path = init_db_with_roster("cli_timeline");

    sb()
        .args(["--db", &db_path, "--now", "2025-03-10 12:00", "timeline"])
        .assert()
        .success()
        .stdout(contains("Ada"))
        .stdout(contains("┃"));

    sb()
        .args([
            "--db", &db_path, "--test", "--now", "2025-03-10 12:00", "watch", "--ticks", "1",
        ])
        .assert()
        .success()
        .stdout(contains("Board at 2025-03-10 12:00"))
        .stdout(contains("Cy"));
}

#[test]
fn test_invalid_clock_override_is_rejected() {
    let db_path = init_db_with_roster("cli_bad_now");

    sb()
        .args(["--db", &db_path, "--now", "noon", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format").and(contains("noon")));
}
