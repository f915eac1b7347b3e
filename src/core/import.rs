//! KMZ/KML waypoint import.
//!
//! A KMZ file is a zip archive holding a `doc.kml` (or any `*.kml`) document.
//! Placemarks carry an optional name, an optional description and a
//! `coordinates` element in `lng,lat[,alt]` order.

use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_luminaria, luminaria_exists};
use crate::errors::{AppError, AppResult};
use crate::models::luminaria::Luminaria;
use crate::models::waypoint::Waypoint;
use crate::ui::messages::{success, warning};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Outcome counters for one import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped_duplicates: usize,
    pub skipped_invalid: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import every placemark of a KMZ (or bare KML) file as a luminaria
    /// with status `ok`. Waypoints whose id already exists are skipped.
    pub fn import(pool: &mut DbPool, file: &str, operator: &str) -> AppResult<ImportSummary> {
        let path = Path::new(file);
        if !path.exists() {
            return Err(AppError::Import(format!("File not found: {}", file)));
        }

        let kml = if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("kml"))
        {
            std::fs::read_to_string(path)?
        } else {
            read_kml_from_kmz(path)?
        };

        let total_placemarks = count_placemarks(&kml);
        let waypoints = parse_kml(&kml);
        if waypoints.is_empty() {
            warning("No placemarks with valid coordinates found.");
            return Ok(ImportSummary::default());
        }

        let mut summary = ImportSummary {
            skipped_invalid: total_placemarks - waypoints.len(),
            ..ImportSummary::default()
        };

        for wp in &waypoints {
            if luminaria_exists(&pool.conn, &wp.id)? {
                summary.skipped_duplicates += 1;
                continue;
            }
            let lum = Luminaria::new(wp.id.clone(), wp.lat, wp.lng, operator);
            insert_luminaria(&pool.conn, &lum)?;
            summary.imported += 1;
        }

        oplog(
            &pool.conn,
            "import",
            file,
            &format!(
                "Imported {} waypoints ({} duplicates skipped)",
                summary.imported, summary.skipped_duplicates
            ),
        )?;

        success(format!(
            "Imported {} waypoints ({} duplicates, {} invalid skipped).",
            summary.imported, summary.skipped_duplicates, summary.skipped_invalid
        ));

        Ok(summary)
    }
}

/// Locate and read the KML document inside a KMZ archive.
/// Prefers `doc.kml`, falls back to the first `*.kml` entry.
pub fn read_kml_from_kmz(path: &Path) -> AppResult<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AppError::Import(format!("Not a valid KMZ archive: {}", e)))?;

    let mut kml_name: Option<String> = None;

    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| AppError::Import(e.to_string()))?;
        let name = entry.name().to_lowercase();

        if name == "doc.kml" {
            kml_name = Some(entry.name().to_string());
            break;
        }
        if name.ends_with(".kml") && kml_name.is_none() {
            kml_name = Some(entry.name().to_string());
        }
    }

    let name =
        kml_name.ok_or_else(|| AppError::Import("No KML document inside the KMZ file".into()))?;

    let mut entry = archive
        .by_name(&name)
        .map_err(|e| AppError::Import(e.to_string()))?;

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// Extract waypoints from raw KML text.
///
/// Placemarks without parseable coordinates are dropped; placemarks without a
/// name get the fallback id `Punto_N` (1-based position in the document).
pub fn parse_kml(content: &str) -> Vec<Waypoint> {
    // The subset of KML we consume is flat enough for scanning; each capture
    // is one <Placemark> block.
    let placemark_re = Regex::new(r"(?s)<Placemark[^>]*>(.*?)</Placemark>").unwrap();
    let name_re = Regex::new(r"(?s)<name[^>]*>(.*?)</name>").unwrap();
    let desc_re = Regex::new(r"(?s)<description[^>]*>(.*?)</description>").unwrap();
    let coord_re = Regex::new(r"(?s)<coordinates[^>]*>(.*?)</coordinates>").unwrap();

    let mut points = Vec::new();

    for (i, cap) in placemark_re.captures_iter(content).enumerate() {
        let block = &cap[1];

        let coords = match coord_re.captures(block) {
            Some(c) => c[1].trim().to_string(),
            None => continue,
        };

        // KML order is longitude,latitude[,altitude]; only the first tuple
        // of a multi-point geometry is used.
        let first = match coords.split_whitespace().next() {
            Some(t) => t,
            None => continue,
        };
        let mut parts = first.split(',');
        let lng = parts.next().and_then(|v| v.trim().parse::<f64>().ok());
        let lat = parts.next().and_then(|v| v.trim().parse::<f64>().ok());

        let (lng, lat) = match (lng, lat) {
            (Some(lng), Some(lat)) => (lng, lat),
            _ => continue,
        };

        let name = name_re
            .captures(block)
            .map(|c| strip_cdata(c[1].trim()).to_string())
            .filter(|s| !s.is_empty());

        let description = desc_re
            .captures(block)
            .map(|c| strip_cdata(c[1].trim()).to_string())
            .filter(|s| !s.is_empty());

        points.push(Waypoint {
            id: name.unwrap_or_else(|| format!("Punto_{}", i + 1)),
            lat,
            lng,
            description,
        });
    }

    points
}

fn count_placemarks(content: &str) -> usize {
    let placemark_re = Regex::new(r"(?s)<Placemark[^>]*>(.*?)</Placemark>").unwrap();
    placemark_re.captures_iter(content).count()
}

fn strip_cdata(s: &str) -> &str {
    s.strip_prefix("<![CDATA[")
        .and_then(|rest| rest.strip_suffix("]]>"))
        .unwrap_or(s)
        .trim()
}
