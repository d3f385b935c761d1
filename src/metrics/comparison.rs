//! Frame-based vs event-based evaluation
//!
//! `evaluate` is the single entry point every surface (library, CLI, HTTP)
//! goes through. It is a pure function of the input and the reference data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{ComparisonResult, CostBreakdown, CostModelInput, SensingConfiguration};
use crate::reference::ReferenceData;
use crate::validation::{validate_input, ValidationError};

use super::cost::calculate_breakdown;
use super::roi::{calculate_roi, RoiSummary};
use super::volume::data_reduction_percent;

/// Everything derived from one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub input: CostModelInput,
    pub reference_version: String,
    pub frame: CostBreakdown,
    pub event: CostBreakdown,
    pub comparison: ComparisonResult,
    pub roi: RoiSummary,
}

/// Compare two breakdowns
pub fn compare(frame: &CostBreakdown, event: &CostBreakdown) -> ComparisonResult {
    let cost_savings = frame.total_cost - event.total_cost;
    let percentage_savings = if frame.total_cost == 0.0 {
        None
    } else {
        Some(cost_savings / frame.total_cost * 100.0)
    };

    ComparisonResult {
        data_reduction_percent: data_reduction_percent(frame.data_volume_gb, event.data_volume_gb),
        cost_savings,
        percentage_savings,
    }
}

/// Validate the input and evaluate both configurations
pub fn evaluate(
    input: &CostModelInput,
    reference: &ReferenceData,
) -> Result<Evaluation, ValidationError> {
    validate_input(input)?;

    let frame = calculate_breakdown(SensingConfiguration::FrameBased, input, reference);
    let event = calculate_breakdown(SensingConfiguration::EventBased, input, reference);
    let comparison = compare(&frame, &event);
    let roi = calculate_roi(input, reference, &frame, &event, &comparison);

    tracing::debug!(
        scenario = %input.scenario,
        frame_total = frame.total_cost,
        event_total = event.total_cost,
        cost_savings = comparison.cost_savings,
        "Evaluated cost comparison"
    );

    Ok(Evaluation {
        input: input.clone(),
        reference_version: reference.version.clone(),
        frame,
        event,
        comparison,
        roi,
    })
}

/// Evaluator bound to one reference data set
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    reference: Arc<ReferenceData>,
}

impl Evaluator {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference: Arc::new(reference),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn evaluate(&self, input: &CostModelInput) -> Result<Evaluation, ValidationError> {
        evaluate(input, &self.reference)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ReferenceData::default())
    }
}
