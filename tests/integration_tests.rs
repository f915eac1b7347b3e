use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, lum, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_basic");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_list_filters_by_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-001", "--problem", "lamp out",
            "--date", "2024-03-01", "--time", "22:00:00",
        ])
        .assert()
        .success();

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-002", "--problem", "flickering",
            "--date", "2023-06-10", "--time", "21:00:00",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "admin", "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("L-001").and(contains("L-002").not()));

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "list", "--period", "2023-06:2024-03",
        ])
        .assert()
        .success()
        .stdout(contains("L-001"))
        .stdout(contains("L-002"));
}

#[test]
fn test_list_rejects_invalid_status() {
    let db_path = setup_test_db("list_bad_status");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "admin", "list", "--status", "broken"])
        .assert()
        .failure()
        .stderr(contains("Invalid status: broken"));
}

#[test]
fn test_del_removes_record_after_confirmation() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "admin", "del", "L-001"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Luminaria L-001 deleted"));

    lum()
        .args(["--db", &db_path, "--operator", "admin", "list"])
        .assert()
        .success()
        .stdout(contains("L-001").not());
}

#[test]
fn test_del_aborts_without_confirmation() {
    let db_path = setup_test_db("del_abort");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "admin", "del", "L-001"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled"));

    lum()
        .args(["--db", &db_path, "--operator", "admin", "list"])
        .assert()
        .success()
        .stdout(contains("L-001"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-001", "--problem", "lamp out",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("report"));
}

#[test]
fn test_db_info_reports_counts_and_downtime() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total luminarias:"))
        .stdout(contains("Cumulative downtime:"));
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_plain", "sqlite");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "backup", "--file", &dest,
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src_len = fs::metadata(&db_path).expect("source exists").len();
    let dst_len = fs::metadata(&dest).expect("backup exists").len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_backup_compress_produces_archive() {
    let db_path = setup_test_db("backup_gz");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_gz", "sqlite");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "backup", "--file", &dest, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));
}
