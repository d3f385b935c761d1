//! Sensitivity analysis module
//!
//! Re-evaluates one input while stepping a single parameter across a range:
//! - One point per value, in ascending order
//! - Scenario matrix (same input under every preset)
//!
//! Output is shaped for chart series and CSV export.

pub mod scenarios;

use serde::{Deserialize, Serialize};

use crate::metrics::evaluate;
use crate::models::CostModelInput;
use crate::reference::ReferenceData;
use crate::validation::{ValidationError, ValidationErrorKind};

pub use scenarios::{compare_scenarios, ScenarioRow};

/// Upper bound on points produced by one sweep
pub const MAX_SWEEP_POINTS: usize = 1000;

/// Input parameter a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParameter {
    FrameCameras,
    EventCameras,
    /// Frame and event camera counts together
    Cameras,
    Fps,
    ItemsPerHour,
    DefectRate,
    ScrapCost,
    HoursPerDay,
}

impl SweepParameter {
    /// Whether values must be whole numbers
    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::DefectRate | Self::ScrapCost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrameCameras => "frame-cameras",
            Self::EventCameras => "event-cameras",
            Self::Cameras => "cameras",
            Self::Fps => "fps",
            Self::ItemsPerHour => "items-per-hour",
            Self::DefectRate => "defect-rate",
            Self::ScrapCost => "scrap-cost",
            Self::HoursPerDay => "hours-per-day",
        }
    }

    /// Copy of `input` with this parameter set to `value`
    fn apply(&self, input: &CostModelInput, value: f64) -> CostModelInput {
        let mut next = input.clone();
        // Integer values were checked to be whole and in u32 range before this point
        let whole = value as u32;
        match self {
            Self::FrameCameras => next.frame_camera_count = whole,
            Self::EventCameras => next.event_camera_count = whole,
            Self::Cameras => {
                next.frame_camera_count = whole;
                next.event_camera_count = whole;
            }
            Self::Fps => next.frames_per_second = whole,
            Self::ItemsPerHour => next.items_per_hour = whole,
            Self::DefectRate => next.defect_rate_percent = value,
            Self::ScrapCost => next.scrap_cost_per_unit = value,
            Self::HoursPerDay => next.operating_hours_per_day = whole,
        }
        next
    }
}

impl std::str::FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "frame-cameras" => Ok(Self::FrameCameras),
            "event-cameras" => Ok(Self::EventCameras),
            "cameras" => Ok(Self::Cameras),
            "fps" | "frames-per-second" => Ok(Self::Fps),
            "items-per-hour" | "throughput" => Ok(Self::ItemsPerHour),
            "defect-rate" => Ok(Self::DefectRate),
            "scrap-cost" => Ok(Self::ScrapCost),
            "hours-per-day" => Ok(Self::HoursPerDay),
            _ => Err(format!("Invalid sweep parameter: {}", s)),
        }
    }
}

/// Range a sweep walks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SweepRange {
    /// Values from `start` to `end` inclusive
    pub fn values(&self) -> Result<Vec<f64>, ValidationError> {
        for (field, value) in [("start", self.start), ("end", self.end), ("step", self.step)] {
            if !value.is_finite() {
                return Err(invalid_sweep(field, "must be a finite number"));
            }
        }
        if self.step <= 0.0 {
            return Err(invalid_sweep("step", "must be greater than zero"));
        }
        if self.start > self.end {
            return Err(invalid_sweep("start", "must not exceed end"));
        }

        // Tolerate float error when `end` is an exact multiple of `step` away
        let span = ((self.end - self.start) / self.step + 1e-9).floor();
        if span + 1.0 > MAX_SWEEP_POINTS as f64 {
            return Err(invalid_sweep(
                "step",
                format!("range produces more than {} points", MAX_SWEEP_POINTS),
            ));
        }

        let count = span as usize + 1;
        let tolerance = self.step * 1e-9;
        Ok((0..count)
            .map(|i| {
                let value = self.start + i as f64 * self.step;
                // Snap accumulated float error onto the upper bound
                if (self.end - value).abs() <= tolerance {
                    self.end
                } else {
                    value.min(self.end)
                }
            })
            .collect())
    }
}

/// One evaluated value of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub frame_total: f64,
    pub event_total: f64,
    pub cost_savings: f64,
    pub percentage_savings: Option<f64>,
    pub data_reduction_percent: f64,
}

fn invalid_sweep(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidSweep, field, message)
}

/// Evaluate `input` once per value of `range` applied to `parameter`
///
/// Fails on the first value that does not produce a valid input.
pub fn sweep(
    input: &CostModelInput,
    reference: &ReferenceData,
    parameter: SweepParameter,
    range: &SweepRange,
) -> Result<Vec<SweepPoint>, ValidationError> {
    let values = range.values()?;
    let mut points = Vec::with_capacity(values.len());

    for value in values {
        if parameter.is_integer()
            && (value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64)
        {
            return Err(invalid_sweep(
                parameter.as_str(),
                format!("{} is not a whole, non-negative value", value),
            ));
        }

        let evaluation = evaluate(&parameter.apply(input, value), reference)?;
        points.push(SweepPoint {
            value,
            frame_total: evaluation.frame.total_cost,
            event_total: evaluation.event.total_cost,
            cost_savings: evaluation.comparison.cost_savings,
            percentage_savings: evaluation.comparison.percentage_savings,
            data_reduction_percent: evaluation.comparison.data_reduction_percent,
        });
    }

    tracing::debug!(
        parameter = parameter.as_str(),
        points = points.len(),
        "Completed sensitivity sweep"
    );

    Ok(points)
}
