//! Table export and session snapshots
//!
//! Two output paths:
//! - CSV of the (possibly filtered) table, header matching the table
//!   column names, one row per grid point, full float precision. This is
//!   what the dashboard's download button serves.
//! - JSON snapshot save/load of a generated table, so a session's data
//!   can be inspected or replayed outside the dashboard.

use crate::core_types::{GridPoint, TABLE_COLUMNS};
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::Path;

/// Serialize a table to CSV
///
/// The header row is always present, including for an empty table.
///
/// # Errors
/// Returns an error if a row cannot be serialized or the writer fails
pub fn write_csv<W: io::Write>(writer: W, points: &[GridPoint]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if points.is_empty() {
        // The writer only emits the header alongside the first record;
        // an empty table writes it explicitly
        csv_writer
            .write_record(TABLE_COLUMNS)
            .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;
    }
    for point in points {
        csv_writer
            .serialize(point)
            .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| ExportError::SaveFailed(e.to_string()))?;
    Ok(())
}

/// Serialize a table to a CSV string
///
/// # Errors
/// Returns an error if a row cannot be serialized
pub fn to_csv_string(points: &[GridPoint]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, points)?;
    String::from_utf8(buffer).map_err(|e| ExportError::SerializeFailed(e.to_string()))
}

/// Download filename for a CSV export at the given timestamp
///
/// Matches the dashboard's naming:
/// `fire_detection_results_YYYYmmdd_HHMMSS.csv`
#[must_use]
pub fn export_filename(timestamp: DateTime<Utc>) -> String {
    format!(
        "fire_detection_results_{}.csv",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Save a table as a pretty-printed JSON snapshot
///
/// # Errors
/// Returns an error if the table cannot be serialized or written
pub fn save_snapshot<P: AsRef<Path>>(points: &[GridPoint], path: P) -> Result<(), ExportError> {
    let contents = serde_json::to_string_pretty(points)
        .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;

    fs::write(path, contents).map_err(|e| ExportError::SaveFailed(e.to_string()))?;

    Ok(())
}

/// Load a table from a JSON snapshot
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<GridPoint>, ExportError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ExportError::LoadFailed(e.to_string()))?;

    let points: Vec<GridPoint> = serde_json::from_str(&contents)
        .map_err(|e| ExportError::ParseFailed(e.to_string()))?;

    Ok(points)
}

/// Errors that can occur during export and snapshot operations
#[derive(Debug)]
pub enum ExportError {
    /// Failed to read a snapshot file
    LoadFailed(String),
    /// Failed to parse snapshot contents
    ParseFailed(String),
    /// Failed to serialize the table
    SerializeFailed(String),
    /// Failed to write the output
    SaveFailed(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ExportError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            ExportError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            ExportError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{generate, GridConfig};
    use chrono::TimeZone;

    const EXPECTED_HEADER: &str = "lat,lon,anomaly_score,fire_probability,fire_classification,\
                                   confidence,grid_id,Pre-Fire,During-Fire,Post-Fire";

    #[test]
    fn test_csv_header_and_row_count() {
        let points = generate(&GridConfig::default());
        let csv = to_csv_string(&points).expect("serialization succeeds");

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(EXPECTED_HEADER));
        assert_eq!(lines.count(), 100);
    }

    #[test]
    fn test_csv_round_trip() {
        let points = generate(&GridConfig::default());
        let csv = to_csv_string(&points).expect("serialization succeeds");

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let parsed: Vec<GridPoint> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("records parse back");
        assert_eq!(parsed, points);
    }

    #[test]
    fn test_empty_table_exports_header_only() {
        let csv = to_csv_string(&[]).expect("serialization succeeds");
        assert_eq!(csv.trim_end(), EXPECTED_HEADER);
    }

    #[test]
    fn test_export_filename_format() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 5).unwrap();
        assert_eq!(
            export_filename(timestamp),
            "fire_detection_results_20240315_093005.csv"
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let points = generate(&GridConfig::default());
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("snapshot.json");

        save_snapshot(&points, &path).expect("snapshot saves");
        let loaded = load_snapshot(&path).expect("snapshot loads");
        assert_eq!(loaded, points);
    }

    #[test]
    fn test_load_missing_snapshot_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = load_snapshot(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ExportError::LoadFailed(_))));
    }
}
