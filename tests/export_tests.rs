use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, lum, setup_test_db, temp_out};

fn report_and_fix(db_path: &str, id: &str, report: (&str, &str), fix: (&str, &str)) {
    lum()
        .args([
            "--db", db_path, "--operator", "admin", "report", id, "--problem", "lamp out",
            "--date", report.0, "--time", report.1,
        ])
        .assert()
        .success();

    lum()
        .args([
            "--db", db_path, "--operator", "admin", "fix", id, "--date", fix.0, "--time", fix.1,
        ])
        .assert()
        .success();
}

#[test]
fn test_export_csv_contains_downtime() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    report_and_fix(
        &db_path,
        "L-001",
        ("2024-03-01", "22:00:00"),
        ("2024-03-02", "04:00:00"),
    );

    let out = temp_out("export_csv", "csv");

    lum()
        .args(["--db", &db_path, "--operator", "admin", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("id,status,problem"));
    assert!(content.contains("L-001"));
    assert!(content.contains("12.00"));
    // never-reported waypoints export with N/A placeholders
    assert!(content.contains("L-002,OK,N/A"));
}

#[test]
fn test_export_json_is_valid_and_complete() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    report_and_fix(
        &db_path,
        "L-002",
        ("2024-03-01", "20:00:00"),
        ("2024-03-02", "10:00:00"),
    );

    let out = temp_out("export_json", "json");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = rows.as_array().expect("array of rows");
    assert_eq!(arr.len(), 3);

    let fixed = arr
        .iter()
        .find(|r| r["id"] == "L-002")
        .expect("L-002 present");
    assert_eq!(fixed["downtime_hours"], "16.00");
    assert_eq!(fixed["status"], "OK");
}

#[test]
fn test_export_range_filters_by_report_date() {
    let db_path = setup_test_db("export_range");
    init_db_with_data(&db_path);
    report_and_fix(
        &db_path,
        "L-001",
        ("2024-03-01", "22:00:00"),
        ("2024-03-02", "04:00:00"),
    );
    report_and_fix(
        &db_path,
        "L-002",
        ("2023-06-10", "22:00:00"),
        ("2023-06-11", "04:00:00"),
    );

    let out = temp_out("export_range", "csv");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--file", &out, "--range", "2024",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("L-001"));
    assert!(!content.contains("L-002"));
}

#[test]
fn test_export_refuses_relative_path() {
    let db_path = setup_test_db("export_rel");
    init_db_with_data(&db_path);

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--file", "report.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("id,status"));
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_writes_file() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_data(&db_path);
    report_and_fix(
        &db_path,
        "L-001",
        ("2024-03-01", "22:00:00"),
        ("2024-03-02", "04:00:00"),
    );

    let out = temp_out("export_pdf", "pdf");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "export", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}
