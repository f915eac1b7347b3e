use predicates::str::contains;

mod common;
use common::{init_db_with_data, lum, setup_test_db};

#[test]
fn test_report_verify_fix_lifecycle() {
    let db_path = setup_test_db("lifecycle");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "report",
            "L-001",
            "--problem",
            "lamp out",
            "--date",
            "2024-03-01",
            "--time",
            "22:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("Problem reported for luminaria L-001"));

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "verify",
            "L-001",
            "--confirm",
            "--notes",
            "ballast burned",
        ])
        .assert()
        .success()
        .stdout(contains("Problem confirmed for luminaria L-001"));

    // 22:00 -> 04:00 the next day: 8 hours of that night plus 4 pre-dawn
    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "fix",
            "L-001",
            "--date",
            "2024-03-02",
            "--time",
            "04:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("12.00 h"));

    // repaired light is back to OK with the downtime stored
    lum()
        .args(["--db", &db_path, "--operator", "admin", "list", "--status", "ok"])
        .assert()
        .success()
        .stdout(contains("L-001"))
        .stdout(contains("12h 00m"));
}

#[test]
fn test_verify_ok_refutes_report() {
    let db_path = setup_test_db("verify_ok");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-002", "--problem", "flickering",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "admin", "verify", "L-002", "--ok"])
        .assert()
        .success()
        .stdout(contains("verified as working"));

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "list", "--status", "reported",
        ])
        .assert()
        .success()
        .stdout(contains("No luminarias found"));
}

#[test]
fn test_report_rejected_while_problem_open() {
    let db_path = setup_test_db("double_report");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-001", "--problem", "lamp out",
        ])
        .assert()
        .success();

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-001", "--problem", "still out",
        ])
        .assert()
        .failure()
        .stderr(contains("already has an open report"));
}

#[test]
fn test_fix_without_open_report_fails() {
    let db_path = setup_test_db("fix_no_report");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "admin", "fix", "L-001"])
        .assert()
        .failure()
        .stderr(contains("no open report"));
}

#[test]
fn test_fix_before_report_instant_fails() {
    let db_path = setup_test_db("fix_backwards");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "report",
            "L-001",
            "--problem",
            "lamp out",
            "--date",
            "2024-03-02",
            "--time",
            "22:00:00",
        ])
        .assert()
        .success();

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "fix",
            "L-001",
            "--date",
            "2024-03-01",
            "--time",
            "22:00:00",
        ])
        .assert()
        .failure()
        .stderr(contains("before the report instant"));
}

#[test]
fn test_verify_requires_reported_status() {
    let db_path = setup_test_db("verify_wrong_state");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "admin", "verify", "L-001", "--confirm"])
        .assert()
        .failure()
        .stderr(contains("not awaiting verification"));
}

#[test]
fn test_report_unknown_luminaria_fails() {
    let db_path = setup_test_db("report_unknown");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-999", "--problem", "lamp out",
        ])
        .assert()
        .failure()
        .stderr(contains("Luminaria not found"));
}

#[test]
fn test_history_records_every_transition() {
    let db_path = setup_test_db("history_trail");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "report",
            "L-001",
            "--problem",
            "lamp out",
            "--date",
            "2024-03-01",
            "--time",
            "20:00:00",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "admin", "verify", "L-001", "--confirm"])
        .assert()
        .success();

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "fix",
            "L-001",
            "--date",
            "2024-03-02",
            "--time",
            "10:00:00",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "admin", "history", "L-001"])
        .assert()
        .success()
        .stdout(contains("report"))
        .stdout(contains("confirm"))
        .stdout(contains("fix"))
        .stdout(contains("Repaired; downtime 16.00 h"));
}
