//! Export module for CSV and JSON export functionality
//!
//! Writes evaluations, sweeps and scenario matrices to disk so the figures
//! can be pasted into slides or spreadsheets.

pub mod csv_export;
pub mod json_export;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::metrics::Evaluation;
use crate::AppError;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(AppError::Export(format!(
                "Invalid export format: {}. Use 'csv' or 'json'",
                s
            ))),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flattened evaluation record for CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableComparison {
    pub scenario: String,
    pub egress: String,
    pub frame_cameras: u32,
    pub event_cameras: u32,
    pub fps: u32,
    pub items_per_hour: u32,
    pub defect_rate_percent: f64,
    pub scrap_cost_per_unit: f64,
    pub hours_per_day: u32,
    pub days_per_month: u32,
    pub frame_volume_gb: f64,
    pub frame_storage_cost: f64,
    pub frame_compute_cost: f64,
    pub frame_rework_cost: f64,
    pub frame_integration_cost: f64,
    pub frame_total_cost: f64,
    pub event_volume_gb: f64,
    pub event_storage_cost: f64,
    pub event_compute_cost: f64,
    pub event_rework_cost: f64,
    pub event_integration_cost: f64,
    pub event_total_cost: f64,
    pub data_reduction_percent: f64,
    pub cost_savings: f64,
    pub percentage_savings: Option<f64>,
    pub payback_months: Option<f64>,
    pub reference_version: String,
}

impl From<&Evaluation> for ExportableComparison {
    fn from(evaluation: &Evaluation) -> Self {
        let input = &evaluation.input;
        let frame = &evaluation.frame;
        let event = &evaluation.event;

        Self {
            scenario: input.scenario.label().to_lowercase(),
            egress: input.egress.as_str().to_string(),
            frame_cameras: input.frame_camera_count,
            event_cameras: input.event_camera_count,
            fps: input.frames_per_second,
            items_per_hour: input.items_per_hour,
            defect_rate_percent: input.defect_rate_percent,
            scrap_cost_per_unit: input.scrap_cost_per_unit,
            hours_per_day: input.operating_hours_per_day,
            days_per_month: input.days_per_month,
            frame_volume_gb: frame.data_volume_gb,
            frame_storage_cost: frame.storage_cost,
            frame_compute_cost: frame.compute_cost,
            frame_rework_cost: frame.rework_cost,
            frame_integration_cost: frame.integration_cost,
            frame_total_cost: frame.total_cost,
            event_volume_gb: event.data_volume_gb,
            event_storage_cost: event.storage_cost,
            event_compute_cost: event.compute_cost,
            event_rework_cost: event.rework_cost,
            event_integration_cost: event.integration_cost,
            event_total_cost: event.total_cost,
            data_reduction_percent: evaluation.comparison.data_reduction_percent,
            cost_savings: evaluation.comparison.cost_savings,
            percentage_savings: evaluation.comparison.percentage_savings,
            payback_months: evaluation.roi.payback_months,
            reference_version: evaluation.reference_version.clone(),
        }
    }
}

/// Get the default export directory (Downloads folder or temp dir)
pub fn get_export_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .unwrap_or_else(std::env::temp_dir)
}

/// Generate a timestamped filename for exports
pub fn generate_export_filename(prefix: &str, extension: &str) -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", prefix, timestamp, extension)
}

/// Resolve where an export goes: the explicit path, or a timestamped file in
/// the default export directory
pub fn resolve_export_path(explicit: Option<PathBuf>, prefix: &str, format: ExportFormat) -> PathBuf {
    explicit.unwrap_or_else(|| {
        get_export_directory().join(generate_export_filename(prefix, format.extension()))
    })
}

pub use csv_export::*;
pub use json_export::*;
