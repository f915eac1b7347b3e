#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub fn lum() -> Command {
    cargo_bin_cmd!("luminar")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_luminar.sqlite", name));
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

const TEST_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>L-001</name>
      <description><![CDATA[Corner of Main and 5th]]></description>
      <Point><coordinates>-58.381592,-34.603722,0</coordinates></Point>
    </Placemark>
    <Placemark>
      <name>L-002</name>
      <Point><coordinates>-58.382100,-34.604000,0</coordinates></Point>
    </Placemark>
    <Placemark>
      <Point><coordinates>-58.383000,-34.605000,0</coordinates></Point>
    </Placemark>
  </Document>
</kml>
"#;

/// Write a small KMZ archive (zip with a doc.kml inside) for import tests
pub fn write_test_kmz(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_luminar.kmz", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();

    let file = fs::File::create(&path).expect("create kmz");
    let mut zip = zip::ZipWriter::new(file);
    let options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    zip.start_file("doc.kml", options).expect("start doc.kml");
    zip.write_all(TEST_KML.as_bytes()).expect("write kml");
    zip.finish().expect("finish kmz");

    p
}

/// Initialize DB and import the test waypoints (L-001, L-002, Punto_3)
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables, seeds the admin operator)
    lum()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let kmz = write_test_kmz(db_path.rsplit('/').next().unwrap_or("data"));
    lum()
        .args(["--db", db_path, "--operator", "admin", "import", &kmz])
        .assert()
        .success();
}

/// Add an operator with a given role via the CLI
pub fn add_operator(db_path: &str, name: &str, role: &str) {
    lum()
        .args([
            "--db", db_path, "--operator", "admin", "user", "--add", name, "--role", role,
        ])
        .assert()
        .success();
}
