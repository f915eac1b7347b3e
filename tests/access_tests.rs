use predicates::str::contains;

mod common;
use common::{add_operator, init_db_with_data, lum, setup_test_db};

use luminar::models::role::{Capability, Role};

#[test]
fn capability_predicate_matrix() {
    use Capability::*;

    // admin can do everything
    for cap in [
        ImportWaypoints,
        ReportProblem,
        VerifyOnSite,
        MarkFixed,
        ExportReports,
        ManageUsers,
        DeleteRecords,
        BackupDatabase,
        View,
    ] {
        assert!(Role::Admin.allows(cap));
    }

    // inspector: field reporting and reporting output, nothing destructive
    assert!(Role::Inspector.allows(ImportWaypoints));
    assert!(Role::Inspector.allows(ReportProblem));
    assert!(Role::Inspector.allows(ExportReports));
    assert!(Role::Inspector.allows(View));
    assert!(!Role::Inspector.allows(VerifyOnSite));
    assert!(!Role::Inspector.allows(MarkFixed));
    assert!(!Role::Inspector.allows(ManageUsers));
    assert!(!Role::Inspector.allows(DeleteRecords));

    // brigade: on-site verification only
    assert!(Role::Brigade.allows(VerifyOnSite));
    assert!(Role::Brigade.allows(View));
    assert!(!Role::Brigade.allows(ReportProblem));
    assert!(!Role::Brigade.allows(ImportWaypoints));
    assert!(!Role::Brigade.allows(ExportReports));

    // viewer: read-only
    assert!(Role::Viewer.allows(View));
    assert!(!Role::Viewer.allows(ReportProblem));
    assert!(!Role::Viewer.allows(VerifyOnSite));
    assert!(!Role::Viewer.allows(ExportReports));
}

#[test]
fn test_viewer_cannot_report() {
    let db_path = setup_test_db("viewer_report");
    init_db_with_data(&db_path);
    add_operator(&db_path, "carla", "viewer");

    lum()
        .args([
            "--db", &db_path, "--operator", "carla", "report", "L-001", "--problem", "lamp out",
        ])
        .assert()
        .failure()
        .stderr(contains("'carla' is not allowed to report problems"));
}

#[test]
fn test_brigade_can_verify_but_not_fix() {
    let db_path = setup_test_db("brigade_caps");
    init_db_with_data(&db_path);
    add_operator(&db_path, "crew1", "brigade");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "report", "L-001", "--problem", "lamp out",
        ])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "crew1", "verify", "L-001", "--confirm"])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "crew1", "fix", "L-001"])
        .assert()
        .failure()
        .stderr(contains("not allowed to mark lights as fixed"));
}

#[test]
fn test_inspector_cannot_manage_users() {
    let db_path = setup_test_db("inspector_users");
    init_db_with_data(&db_path);
    add_operator(&db_path, "ines", "inspector");

    lum()
        .args([
            "--db", &db_path, "--operator", "ines", "user", "--add", "other", "--role", "viewer",
        ])
        .assert()
        .failure()
        .stderr(contains("not allowed to manage users"));
}

#[test]
fn test_unknown_operator_is_rejected() {
    let db_path = setup_test_db("unknown_operator");
    init_db_with_data(&db_path);

    lum()
        .args(["--db", &db_path, "--operator", "ghost", "list"])
        .assert()
        .failure()
        .stderr(contains("Unknown operator: ghost"));
}

#[test]
fn test_user_add_set_role_and_list() {
    let db_path = setup_test_db("user_mgmt");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_operator(&db_path, "ines", "inspector");

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "user", "--set-role", "ines", "--role",
            "brigade",
        ])
        .assert()
        .success()
        .stdout(contains("now has role brigade"));

    lum()
        .args(["--db", &db_path, "--operator", "admin", "user", "--list"])
        .assert()
        .success()
        .stdout(contains("admin"))
        .stdout(contains("ines"))
        .stdout(contains("brigade"));
}

#[test]
fn test_user_add_rejects_invalid_role() {
    let db_path = setup_test_db("bad_role");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    lum()
        .args([
            "--db", &db_path, "--operator", "admin", "user", "--add", "bob", "--role", "superuser",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid role: superuser"));
}
