//! CSV loaders for the static station and line tables.
//!
//! # Stations CSV
//!
//! One row per coordinate declaration, registered in file order.  An empty
//! `line` declares the station independently of any line.
//!
//! ```csv
//! line,station,lat,lon
//! Piccadilly,Hyde Park Corner,51.5027,-0.1526
//! Piccadilly,Green Park,51.5069,-0.1426
//! Central,Green Park,51.5069,-0.1426
//! ,Aldwych,51.5121,-0.1160
//! ```
//!
//! # Lines CSV
//!
//! One row per station, in travel order.  Lines are returned in order of
//! their first row; rows of one line need not be contiguous but keep their
//! relative order.  Every row of a line must carry the same `color`.
//!
//! ```csv
//! line,color,station
//! Piccadilly,blue,Hyde Park Corner
//! Piccadilly,blue,Green Park
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::GeoPoint;

use crate::{Line, NetworkError, NetworkResult, StationRegistry};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    line:    Option<String>,
    station: String,
    lat:     f64,
    lon:     f64,
}

#[derive(Deserialize)]
struct LineRecord {
    line:    String,
    color:   String,
    station: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`StationRegistry`] from a stations CSV file.
pub fn load_stations_csv(path: &Path) -> NetworkResult<StationRegistry> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
pub fn load_stations_reader<R: Read>(reader: R) -> NetworkResult<StationRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = StationRegistry::new();

    for result in csv_reader.deserialize::<StationRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(format!("stations: {e}")))?;
        let name = row.station.trim();
        if name.is_empty() {
            return Err(NetworkError::Parse("stations: empty station name".to_owned()));
        }
        let pos = GeoPoint::new(row.lat, row.lon);
        match row.line.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            Some(line) => registry.register_for(line, name, pos),
            None => registry.register(name, pos),
        };
    }

    Ok(registry)
}

/// Load [`Line`]s from a lines CSV file.
pub fn load_lines_csv(path: &Path) -> NetworkResult<Vec<Line>> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_lines_reader(file)
}

/// Like [`load_lines_csv`] but accepts any `Read` source.
pub fn load_lines_reader<R: Read>(reader: R) -> NetworkResult<Vec<Line>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut lines: Vec<Line> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<LineRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(format!("lines: {e}")))?;
        let (name, color, station) = (row.line.trim(), row.color.trim(), row.station.trim());
        if name.is_empty() || station.is_empty() {
            return Err(NetworkError::Parse(format!(
                "lines: empty line or station name in row ({name:?}, {station:?})"
            )));
        }

        let idx = *by_name.entry(name.to_owned()).or_insert_with(|| {
            lines.push(Line::new(name, color, Vec::<String>::new()));
            lines.len() - 1
        });

        let line = &mut lines[idx];
        if line.color != color {
            return Err(NetworkError::Parse(format!(
                "lines: line {name:?} has conflicting colours {:?} and {color:?}",
                line.color
            )));
        }
        line.stations.push(station.to_owned());
    }

    Ok(lines)
}
