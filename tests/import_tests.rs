use predicates::str::contains;

mod common;
use common::{lum, setup_test_db, write_test_kmz};

use luminar::core::import::parse_kml;

#[test]
fn test_import_kmz_creates_luminarias() {
    let db_path = setup_test_db("import_kmz");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let kmz = write_test_kmz("import_kmz");

    lum()
        .args(["--db", &db_path, "--operator", "admin", "import", &kmz])
        .assert()
        .success()
        .stdout(contains("Imported 3 waypoints"));

    lum()
        .args(["--db", &db_path, "--operator", "admin", "list"])
        .assert()
        .success()
        .stdout(contains("L-001"))
        .stdout(contains("L-002"))
        .stdout(contains("Punto_3"));
}

#[test]
fn test_import_skips_duplicates_on_second_run() {
    let db_path = setup_test_db("import_dup");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let kmz = write_test_kmz("import_dup");

    lum()
        .args(["--db", &db_path, "--operator", "admin", "import", &kmz])
        .assert()
        .success();

    lum()
        .args(["--db", &db_path, "--operator", "admin", "import", &kmz])
        .assert()
        .success()
        .stdout(contains("Imported 0 waypoints (3 duplicates"));
}

#[test]
fn test_import_missing_file_fails() {
    let db_path = setup_test_db("import_missing");

    lum()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    lum()
        .args([
            "--db",
            &db_path,
            "--operator",
            "admin",
            "import",
            "/nonexistent/path/lights.kmz",
        ])
        .assert()
        .failure()
        .stderr(contains("File not found"));
}

#[test]
fn parse_kml_extracts_coordinates_in_lng_lat_order() {
    let kml = r#"
        <Placemark>
          <name>P1</name>
          <Point><coordinates>-58.5,-34.6,0</coordinates></Point>
        </Placemark>
    "#;

    let points = parse_kml(kml);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, "P1");
    assert!((points[0].lng - (-58.5)).abs() < 1e-9);
    assert!((points[0].lat - (-34.6)).abs() < 1e-9);
}

#[test]
fn parse_kml_names_anonymous_placemarks_by_position() {
    let kml = r#"
        <Placemark><Point><coordinates>1.0,2.0</coordinates></Point></Placemark>
        <Placemark><Point><coordinates>3.0,4.0</coordinates></Point></Placemark>
    "#;

    let points = parse_kml(kml);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].id, "Punto_1");
    assert_eq!(points[1].id, "Punto_2");
}

#[test]
fn parse_kml_drops_placemarks_without_coordinates() {
    let kml = r#"
        <Placemark><name>no-geometry</name></Placemark>
        <Placemark><name>ok</name><Point><coordinates>1.0,2.0</coordinates></Point></Placemark>
    "#;

    let points = parse_kml(kml);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, "ok");
}

#[test]
fn parse_kml_keeps_placemark_descriptions() {
    let kml = r#"
        <Placemark>
          <name>P1</name>
          <description><![CDATA[Pole near the school]]></description>
          <Point><coordinates>1.0,2.0</coordinates></Point>
        </Placemark>
    "#;

    let points = parse_kml(kml);
    assert_eq!(points[0].description.as_deref(), Some("Pole near the school"));
}

#[test]
fn parse_kml_strips_cdata_from_names() {
    let kml = r#"
        <Placemark>
          <name><![CDATA[Plaza Norte]]></name>
          <Point><coordinates>1.0,2.0</coordinates></Point>
        </Placemark>
    "#;

    let points = parse_kml(kml);
    assert_eq!(points[0].id, "Plaza Norte");
}
