//! CSV export functionality
//!
//! Provides CSV serialization for comparisons, sweeps and scenario matrices.

use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use super::ExportableComparison;
use crate::sweep::{ScenarioRow, SweepPoint};
use crate::AppError;

/// Serialize records with a header row into any writer
pub fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<(), AppError> {
    let mut writer = Writer::from_writer(writer);

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AppError::Export(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

/// Render records as a CSV string
pub fn to_csv_string<T: Serialize>(records: &[T]) -> Result<String, AppError> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {}", e)))
}

fn write_file<T: Serialize>(records: &[T], path: &Path) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::Export(format!("Failed to create CSV file: {}", e)))?;
    write_records(file, records)?;
    tracing::info!("Wrote {} CSV rows to {:?}", records.len(), path);
    Ok(())
}

/// Write comparison rows to CSV format
pub fn write_comparisons_csv(records: &[ExportableComparison], path: &Path) -> Result<(), AppError> {
    write_file(records, path)
}

/// Write sweep points to CSV format
pub fn write_sweep_csv(points: &[SweepPoint], path: &Path) -> Result<(), AppError> {
    write_file(points, path)
}

/// Write scenario matrix rows to CSV format
pub fn write_scenarios_csv(rows: &[ScenarioRow], path: &Path) -> Result<(), AppError> {
    write_file(rows, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::evaluate;
    use crate::models::CostModelInput;
    use crate::reference::default_reference;
    use crate::sweep::{compare_scenarios, sweep, SweepParameter, SweepRange};

    #[test]
    fn test_write_comparisons_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        let evaluation = evaluate(&CostModelInput::default(), &default_reference()).unwrap();

        write_comparisons_csv(&[ExportableComparison::from(&evaluation)], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("scenario,egress,frame_cameras"));
        assert!(header.contains("percentage_savings"));
        assert!(lines.next().unwrap().starts_with("typical,telemetry,8,8,60"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_sweep_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let range = SweepRange {
            start: 30.0,
            end: 120.0,
            step: 30.0,
        };
        let points = sweep(
            &CostModelInput::default(),
            &default_reference(),
            SweepParameter::Fps,
            &range,
        )
        .unwrap();

        write_sweep_csv(&points, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        // header + 4 points
        assert_eq!(contents.lines().count(), 5);
        assert!(contents.starts_with("value,frame_total,event_total"));
    }

    #[test]
    fn test_scenarios_to_csv_string() {
        let rows = compare_scenarios(&CostModelInput::default(), &default_reference()).unwrap();
        let csv = to_csv_string(&rows).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("conservative,"));
        assert!(lines[3].starts_with("aggressive,"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_sweep_csv(&[], Path::new("/nonexistent/dir/sweep.csv")).unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
