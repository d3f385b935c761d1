//! Input validation
//!
//! Out-of-range values are rejected, never clamped. Every error names the
//! offending field so CLI and HTTP callers can point at it.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CostModelInput;

pub const CAMERA_COUNT_RANGE: RangeInclusive<u32> = 1..=64;
pub const FPS_RANGE: RangeInclusive<u32> = 30..=120;
pub const ITEMS_PER_HOUR_RANGE: RangeInclusive<u32> = 1800..=7200;
pub const DEFECT_RATE_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const SCRAP_COST_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
pub const HOURS_PER_DAY_RANGE: RangeInclusive<u32> = 1..=24;
pub const DAYS_PER_MONTH_RANGE: RangeInclusive<u32> = 1..=31;

/// Category of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    OutOfRange,
    NotFinite,
    InvalidSweep,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::NotFinite => "not_finite",
            Self::InvalidSweep => "invalid_sweep",
        }
    }
}

/// A rejected input field
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, field: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Check every field of an input against its documented range
pub fn validate_input(input: &CostModelInput) -> Result<(), ValidationError> {
    check_int("frame_camera_count", input.frame_camera_count, CAMERA_COUNT_RANGE)?;
    check_int("event_camera_count", input.event_camera_count, CAMERA_COUNT_RANGE)?;
    check_int("frames_per_second", input.frames_per_second, FPS_RANGE)?;
    check_int("items_per_hour", input.items_per_hour, ITEMS_PER_HOUR_RANGE)?;
    check_decimal("defect_rate_percent", input.defect_rate_percent, DEFECT_RATE_RANGE)?;
    check_decimal("scrap_cost_per_unit", input.scrap_cost_per_unit, SCRAP_COST_RANGE)?;
    check_int(
        "operating_hours_per_day",
        input.operating_hours_per_day,
        HOURS_PER_DAY_RANGE,
    )?;
    check_int("days_per_month", input.days_per_month, DAYS_PER_MONTH_RANGE)?;
    Ok(())
}

fn check_int(field: &str, value: u32, range: RangeInclusive<u32>) -> Result<(), ValidationError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(
        ValidationErrorKind::OutOfRange,
        field,
        format!(
            "{} is outside the allowed range {}..={}",
            value,
            range.start(),
            range.end()
        ),
    ))
}

fn check_decimal(
    field: &str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            ValidationErrorKind::NotFinite,
            field,
            "must be a finite number",
        ));
    }
    if range.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(
        ValidationErrorKind::OutOfRange,
        field,
        format!(
            "{} is outside the allowed range {}..={}",
            value,
            range.start(),
            range.end()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_valid() {
        assert!(validate_input(&CostModelInput::default()).is_ok());
    }

    #[test]
    fn test_zero_frame_cameras_rejected() {
        let input = CostModelInput {
            frame_camera_count: 0,
            ..Default::default()
        };

        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        assert_eq!(err.field, "frame_camera_count");
        assert!(err.message.contains("1..=64"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let input = CostModelInput {
            frames_per_second: 120,
            items_per_hour: 1800,
            defect_rate_percent: 0.0,
            scrap_cost_per_unit: 1000.0,
            operating_hours_per_day: 24,
            ..Default::default()
        };
        assert!(validate_input(&input).is_ok());

        let input = CostModelInput {
            frames_per_second: 121,
            ..Default::default()
        };
        assert_eq!(validate_input(&input).unwrap_err().field, "frames_per_second");
    }

    #[test]
    fn test_negative_and_nan_decimals() {
        let input = CostModelInput {
            scrap_cost_per_unit: -1.0,
            ..Default::default()
        };
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.field, "scrap_cost_per_unit");
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange);

        let input = CostModelInput {
            defect_rate_percent: f64::NAN,
            ..Default::default()
        };
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.field, "defect_rate_percent");
        assert_eq!(err.kind, ValidationErrorKind::NotFinite);
    }

    #[test]
    fn test_error_serializes_kind_field_message() {
        let err = ValidationError::new(ValidationErrorKind::OutOfRange, "items_per_hour", "too low");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "out_of_range");
        assert_eq!(json["field"], "items_per_hour");
        assert_eq!(json["message"], "too low");
        assert_eq!(err.to_string(), "items_per_hour: too low");
    }
}
