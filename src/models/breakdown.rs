//! Cost breakdown types
//!
//! Derived, per-configuration monthly figures and the comparison between them.

use serde::{Deserialize, Serialize};

use super::input::SensingConfiguration;

/// Components of the monthly compute charge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputeCost {
    /// Camera hardware spread across the amortization period
    pub hardware_amortization: f64,
    /// Sensor power draw over the operating hours
    pub energy: f64,
    /// Workload-scaled cloud processing
    pub cloud_processing: f64,
}

impl ComputeCost {
    pub fn total(&self) -> f64 {
        self.hardware_amortization + self.energy + self.cloud_processing
    }
}

/// Monthly cost breakdown for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub configuration: SensingConfiguration,
    /// Stored/transmitted data per month, in GB
    pub data_volume_gb: f64,
    /// Uncompressed sensor output per month, in GB. Frame-based only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data_volume_gb: Option<f64>,
    pub storage_cost: f64,
    pub compute_cost: f64,
    pub compute: ComputeCost,
    pub rework_cost: f64,
    pub integration_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Assemble a breakdown; `total_cost` is always the sum of the four components
    pub fn new(
        configuration: SensingConfiguration,
        data_volume_gb: f64,
        raw_data_volume_gb: Option<f64>,
        storage_cost: f64,
        compute: ComputeCost,
        rework_cost: f64,
        integration_cost: f64,
    ) -> Self {
        let compute_cost = compute.total();
        let total_cost = storage_cost + compute_cost + rework_cost + integration_cost;

        Self {
            configuration,
            data_volume_gb,
            raw_data_volume_gb,
            storage_cost,
            compute_cost,
            compute,
            rework_cost,
            integration_cost,
            total_cost,
        }
    }

    /// Month-to-month spend that does not come from amortized one-time costs
    pub fn recurring_cost(&self) -> f64 {
        self.storage_cost + self.compute.energy + self.compute.cloud_processing + self.rework_cost
    }
}

/// Frame-based vs event-based comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Relative reduction of event vs frame data volume, in `[0, 100)`
    pub data_reduction_percent: f64,
    /// Frame total minus event total, USD per month. Negative when event costs more.
    pub cost_savings: f64,
    /// `None` when the frame-based total is zero
    pub percentage_savings: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_components() {
        let compute = ComputeCost {
            hardware_amortization: 100.0,
            energy: 12.5,
            cloud_processing: 40.0,
        };
        let breakdown = CostBreakdown::new(
            SensingConfiguration::FrameBased,
            1_000.0,
            Some(80_000.0),
            32.0,
            compute,
            500.0,
            250.0,
        );

        assert!((breakdown.compute_cost - 152.5).abs() < 1e-9);
        assert_eq!(
            breakdown.total_cost,
            breakdown.storage_cost + breakdown.compute_cost + breakdown.rework_cost + breakdown.integration_cost
        );
        assert!((breakdown.recurring_cost() - 584.5).abs() < 1e-9);
    }

    #[test]
    fn test_event_breakdown_omits_raw_volume() {
        let breakdown = CostBreakdown::new(
            SensingConfiguration::EventBased,
            10.0,
            None,
            1.0,
            ComputeCost::default(),
            0.0,
            0.0,
        );

        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("raw_data_volume_gb").is_none());
        assert_eq!(json["configuration"], "event_based");
    }
}
