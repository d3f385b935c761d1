//! Scenario matrix
//!
//! Evaluates one input under every scenario preset.

use serde::{Deserialize, Serialize};

use crate::metrics::evaluate;
use crate::models::{CostModelInput, Scenario};
use crate::reference::ReferenceData;
use crate::validation::ValidationError;

/// One preset's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub scenario: Scenario,
    pub bitrate_mbps: f64,
    pub data_reduction_factor: f64,
    pub frame_volume_gb: f64,
    pub event_volume_gb: f64,
    pub frame_total: f64,
    pub event_total: f64,
    pub cost_savings: f64,
    pub percentage_savings: Option<f64>,
    pub data_reduction_percent: f64,
}

/// Evaluate `input` under conservative, typical and aggressive presets, in that order
///
/// The scenario already set on `input` is ignored.
pub fn compare_scenarios(
    input: &CostModelInput,
    reference: &ReferenceData,
) -> Result<Vec<ScenarioRow>, ValidationError> {
    Scenario::ALL
        .iter()
        .map(|&scenario| {
            let preset = reference.scenarios.get(scenario);
            let evaluation = evaluate(
                &CostModelInput {
                    scenario,
                    ..input.clone()
                },
                reference,
            )?;

            Ok(ScenarioRow {
                scenario,
                bitrate_mbps: preset.bitrate_mbps,
                data_reduction_factor: preset.data_reduction_factor,
                frame_volume_gb: evaluation.frame.data_volume_gb,
                event_volume_gb: evaluation.event.data_volume_gb,
                frame_total: evaluation.frame.total_cost,
                event_total: evaluation.event.total_cost,
                cost_savings: evaluation.comparison.cost_savings,
                percentage_savings: evaluation.comparison.percentage_savings,
                data_reduction_percent: evaluation.comparison.data_reduction_percent,
            })
        })
        .collect()
}
