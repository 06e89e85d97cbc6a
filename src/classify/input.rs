use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use regionfence::Coordinate;

const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LON_COLUMNS: &[&str] = &["lon", "lng", "longitude"];

/// Load points from a CSV file with a header row
pub fn load_points(path: &Path) -> Result<Vec<Coordinate>> {
    info!("Loading points from {}", path.display());
    let file = File::open(path).context("Failed to open points file")?;
    read_points(file)
}

/// Read points from CSV. Latitude and longitude columns are found by header
/// name; rows that do not parse are skipped.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Coordinate>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let find = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
    };

    let lat_idx = find(LAT_COLUMNS).context("No latitude column (lat, latitude) found")?;
    let lon_idx = find(LON_COLUMNS).context("No longitude column (lon, lng, longitude) found")?;

    let mut points = Vec::new();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e).context("Failed to read points file"),
            Err(e) => {
                warn!("Skipping unreadable row: {}", e);
                continue;
            }
        };

        match parse_record(&record, lat_idx, lon_idx) {
            Ok(point) => points.push(point),
            Err(line) => warn!("Skipping unparseable point on line {}", line),
        }
    }

    info!("Loaded {} points", points.len());
    Ok(points)
}

/// Point from one record, or the line the record starts on
fn parse_record(record: &StringRecord, lat_idx: usize, lon_idx: usize) -> Result<Coordinate, u64> {
    let lat = record.get(lat_idx).and_then(|v| v.parse::<f64>().ok());
    let lon = record.get(lon_idx).and_then(|v| v.parse::<f64>().ok());

    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
        _ => Err(record.position().map_or(0, |p| p.line())),
    }
}
