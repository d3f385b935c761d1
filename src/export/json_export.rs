//! JSON export functionality
//!
//! Wraps exported data in an envelope carrying the export timestamp and the
//! reference data version it was computed against.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::metrics::Evaluation;
use crate::sweep::{ScenarioRow, SweepParameter, SweepPoint};
use crate::AppError;

/// Version of the export envelope layout
pub const EXPORT_VERSION: &str = "1.0";

/// Full evaluation export
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationExportJson<'a> {
    pub export_date: String,
    pub export_version: &'static str,
    pub evaluation: &'a Evaluation,
}

/// Sweep export
#[derive(Debug, Clone, Serialize)]
pub struct SweepExportJson<'a> {
    pub export_date: String,
    pub export_version: &'static str,
    pub reference_version: &'a str,
    pub parameter: SweepParameter,
    pub points: &'a [SweepPoint],
}

/// Scenario matrix export
#[derive(Debug, Clone, Serialize)]
pub struct ScenariosExportJson<'a> {
    pub export_date: String,
    pub export_version: &'static str,
    pub reference_version: &'a str,
    pub scenarios: &'a [ScenarioRow],
}

fn export_date() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl<'a> EvaluationExportJson<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            export_date: export_date(),
            export_version: EXPORT_VERSION,
            evaluation,
        }
    }
}

impl<'a> SweepExportJson<'a> {
    pub fn new(reference_version: &'a str, parameter: SweepParameter, points: &'a [SweepPoint]) -> Self {
        Self {
            export_date: export_date(),
            export_version: EXPORT_VERSION,
            reference_version,
            parameter,
            points,
        }
    }
}

impl<'a> ScenariosExportJson<'a> {
    pub fn new(reference_version: &'a str, scenarios: &'a [ScenarioRow]) -> Self {
        Self {
            export_date: export_date(),
            export_version: EXPORT_VERSION,
            reference_version,
            scenarios,
        }
    }
}

/// Write any export envelope as pretty-printed JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Export(format!("Failed to serialize JSON: {}", e)))?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| AppError::Export(format!("Failed to create JSON file: {}", e)))?;
    file.write_all(json.as_bytes())
        .map_err(|e| AppError::Export(format!("Failed to write JSON file: {}", e)))?;

    tracing::info!("Wrote JSON export to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::evaluate;
    use crate::models::CostModelInput;
    use crate::reference::default_reference;
    use crate::sweep::{sweep, SweepRange};

    #[test]
    fn test_write_evaluation_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation.json");
        let evaluation = evaluate(&CostModelInput::default(), &default_reference()).unwrap();

        write_json(&EvaluationExportJson::new(&evaluation), &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["export_version"], EXPORT_VERSION);
        assert_eq!(parsed["evaluation"]["input"]["frame_camera_count"], 8);
        assert_eq!(parsed["evaluation"]["frame"]["configuration"], "frame_based");
        assert!(parsed["evaluation"]["comparison"]["cost_savings"].as_f64().unwrap() > 0.0);

        // Round trips back into the evaluation it was written from
        let restored: Evaluation = serde_json::from_value(parsed["evaluation"].clone()).unwrap();
        assert_eq!(restored.input, evaluation.input);
    }

    #[test]
    fn test_write_sweep_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        let reference = default_reference();
        let range = SweepRange {
            start: 1.0,
            end: 3.0,
            step: 1.0,
        };
        let points = sweep(
            &CostModelInput::default(),
            &reference,
            SweepParameter::EventCameras,
            &range,
        )
        .unwrap();

        write_json(&SweepExportJson::new(&reference.version, SweepParameter::EventCameras, &points), &path)
            .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["parameter"], "event-cameras");
        assert_eq!(parsed["points"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["reference_version"], reference.version);
    }
}
