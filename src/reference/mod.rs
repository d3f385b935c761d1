//! Reference data module
//!
//! Physical and economic constants the evaluator runs against:
//! - Camera specs and per-configuration profiles
//! - Storage, egress, energy and cloud pricing
//! - Scene-motion scenario presets
//!
//! Reference data is an explicit value handed to the evaluator. It is loaded
//! once (built-in defaults or a JSON file), validated, and never mutated.

pub mod presets;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EgressMode, Scenario, SensingConfiguration};

pub use presets::{default_reference, REFERENCE_VERSION};

/// Environment variable naming a reference data JSON file
pub const REFERENCE_PATH_ENV: &str = "FRAMEVISION_REFERENCE";

/// Reference data errors
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Invalid reference data at {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Failed to read reference data from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sensor hardware constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
    /// Bits per pixel sample. Event sensors report polarity only.
    pub bit_depth: u32,
    pub power_watts: f64,
    /// Purchase price per unit, USD
    pub unit_cost: f64,
    /// Lossless packing ratio of the native output format, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lossless_packing_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_events_per_second: Option<f64>,
}

impl CameraSpec {
    pub fn pixels(&self) -> f64 {
        self.width_px as f64 * self.height_px as f64
    }

    pub fn bytes_per_pixel(&self) -> f64 {
        self.bit_depth as f64 / 8.0
    }
}

/// Everything that differs between the two deployments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    pub camera: CameraSpec,
    /// Cloud workers needed at the reference throughput (and, for frame-based,
    /// the reference frame rate)
    pub base_concurrency: f64,
    /// Relative change in escaped defects: positive is a penalty, negative a bonus
    pub accuracy_adjustment: f64,
    /// One-time integration budget at the baseline camera count, USD
    pub integration_budget: f64,
}

impl ConfigurationProfile {
    /// Multiplier applied to baseline rework cost
    pub fn accuracy_multiplier(&self) -> f64 {
        1.0 + self.accuracy_adjustment
    }
}

/// Unit prices, USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    pub storage_per_gb: f64,
    pub egress_per_gb: f64,
    pub energy_per_kwh: f64,
    pub compute_per_hour: f64,
}

/// Share of stored data that also leaves the cloud, per egress mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgressFractions {
    pub telemetry: f64,
    pub telemetry_and_clips: f64,
}

impl EgressFractions {
    pub fn fraction(&self, mode: EgressMode) -> f64 {
        match mode {
            EgressMode::Telemetry => self.telemetry,
            EgressMode::TelemetryAndClips => self.telemetry_and_clips,
        }
    }
}

/// Motion-dependent constants for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPreset {
    /// Encoded frame stream per camera at the reference frame rate
    pub bitrate_mbps: f64,
    /// Frame-equivalent volume divided by event volume
    pub data_reduction_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPresets {
    pub conservative: ScenarioPreset,
    pub typical: ScenarioPreset,
    pub aggressive: ScenarioPreset,
}

impl ScenarioPresets {
    pub fn get(&self, scenario: Scenario) -> &ScenarioPreset {
        match scenario {
            Scenario::Conservative => &self.conservative,
            Scenario::Typical => &self.typical,
            Scenario::Aggressive => &self.aggressive,
        }
    }
}

/// Complete constant set for one evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub version: String,
    pub reference_fps: f64,
    pub reference_items_per_hour: f64,
    /// Camera count the integration budgets are quoted for
    pub baseline_camera_count: f64,
    pub amortization_months: f64,
    pub frame: ConfigurationProfile,
    pub event: ConfigurationProfile,
    pub pricing: PricingRates,
    pub egress: EgressFractions,
    pub scenarios: ScenarioPresets,
}

impl Default for ReferenceData {
    fn default() -> Self {
        default_reference()
    }
}

impl ReferenceData {
    /// Profile for the given configuration
    pub fn profile(&self, configuration: SensingConfiguration) -> &ConfigurationProfile {
        match configuration {
            SensingConfiguration::FrameBased => &self.frame,
            SensingConfiguration::EventBased => &self.event,
        }
    }

    /// Load and validate reference data from a JSON file
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let reference: ReferenceData = serde_json::from_str(&contents)?;
        reference.validate()?;

        tracing::info!(
            "Loaded reference data version {} from {:?}",
            reference.version,
            path
        );
        Ok(reference)
    }

    /// Use an explicit path, else `FRAMEVISION_REFERENCE`, else built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ReferenceError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match std::env::var_os(REFERENCE_PATH_ENV) {
            Some(env_path) if !env_path.is_empty() => Self::load(Path::new(&env_path)),
            _ => {
                tracing::debug!("Using built-in reference data {}", REFERENCE_VERSION);
                Ok(default_reference())
            }
        }
    }

    /// Reject constant sets the evaluator cannot produce meaningful output from
    pub fn validate(&self) -> Result<(), ReferenceError> {
        positive("reference_fps", self.reference_fps)?;
        positive("reference_items_per_hour", self.reference_items_per_hour)?;
        positive("baseline_camera_count", self.baseline_camera_count)?;
        positive("amortization_months", self.amortization_months)?;

        for (prefix, profile) in [("frame", &self.frame), ("event", &self.event)] {
            validate_profile(prefix, profile)?;
        }

        if self.frame.camera.width_px == 0
            || self.frame.camera.height_px == 0
            || self.frame.camera.bit_depth == 0
        {
            return Err(invalid(
                "frame.camera",
                "resolution and bit depth must be non-zero",
            ));
        }

        non_negative("pricing.storage_per_gb", self.pricing.storage_per_gb)?;
        non_negative("pricing.egress_per_gb", self.pricing.egress_per_gb)?;
        non_negative("pricing.energy_per_kwh", self.pricing.energy_per_kwh)?;
        non_negative("pricing.compute_per_hour", self.pricing.compute_per_hour)?;

        fraction("egress.telemetry", self.egress.telemetry)?;
        fraction("egress.telemetry_and_clips", self.egress.telemetry_and_clips)?;

        for scenario in Scenario::ALL {
            let preset = self.scenarios.get(scenario);
            let name = scenario.label().to_lowercase();
            positive(&format!("scenarios.{}.bitrate_mbps", name), preset.bitrate_mbps)?;
            finite(
                &format!("scenarios.{}.data_reduction_factor", name),
                preset.data_reduction_factor,
            )?;
            if preset.data_reduction_factor < 1.0 {
                return Err(invalid(
                    &format!("scenarios.{}.data_reduction_factor", name),
                    "must be at least 1",
                ));
            }
        }

        let factors = Scenario::ALL.map(|s| self.scenarios.get(s).data_reduction_factor);
        if !(factors[0] < factors[1] && factors[1] < factors[2]) {
            return Err(invalid(
                "scenarios",
                "data reduction factors must increase from conservative to aggressive",
            ));
        }

        Ok(())
    }
}

fn validate_profile(prefix: &str, profile: &ConfigurationProfile) -> Result<(), ReferenceError> {
    non_negative(&format!("{}.camera.power_watts", prefix), profile.camera.power_watts)?;
    non_negative(&format!("{}.camera.unit_cost", prefix), profile.camera.unit_cost)?;
    if let Some(ratio) = profile.camera.lossless_packing_ratio {
        positive(&format!("{}.camera.lossless_packing_ratio", prefix), ratio)?;
    }
    if let Some(rate) = profile.camera.max_events_per_second {
        non_negative(&format!("{}.camera.max_events_per_second", prefix), rate)?;
    }
    non_negative(&format!("{}.base_concurrency", prefix), profile.base_concurrency)?;
    // Negative multipliers are allowed; rework is floored at zero during evaluation
    finite(&format!("{}.accuracy_adjustment", prefix), profile.accuracy_adjustment)?;
    non_negative(&format!("{}.integration_budget", prefix), profile.integration_budget)
}

fn invalid(field: &str, message: &str) -> ReferenceError {
    ReferenceError::Invalid {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ReferenceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ReferenceError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ReferenceError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn fraction(field: &str, value: f64) -> Result<(), ReferenceError> {
    non_negative(field, value)?;
    if value > 1.0 {
        return Err(invalid(field, "must be between 0 and 1"));
    }
    Ok(())
}
