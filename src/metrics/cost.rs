//! Cost calculation utilities
//!
//! Turns an input and a reference constant set into the monthly storage,
//! compute, rework and integration charges for one configuration.

use crate::models::{ComputeCost, CostBreakdown, CostModelInput, SensingConfiguration};
use crate::reference::{ConfigurationProfile, PricingRates, ReferenceData};

use super::volume::{encoded_frame_volume_gb, event_volume_gb, raw_frame_volume_gb};

/// Storage plus the exported share billed as egress
pub fn storage_cost(volume_gb: f64, pricing: &PricingRates, egress_fraction: f64) -> f64 {
    volume_gb * (pricing.storage_per_gb + pricing.egress_per_gb * egress_fraction)
}

/// Cloud workers needed for the given workload
///
/// Scales with throughput; frame-based processing also scales with frame rate.
pub fn concurrency(
    configuration: SensingConfiguration,
    profile: &ConfigurationProfile,
    input: &CostModelInput,
    reference: &ReferenceData,
) -> f64 {
    let throughput_scale = input.items_per_hour as f64 / reference.reference_items_per_hour;
    let base = profile.base_concurrency * throughput_scale;

    match configuration {
        SensingConfiguration::FrameBased => {
            base * input.frames_per_second as f64 / reference.reference_fps
        }
        SensingConfiguration::EventBased => base,
    }
}

/// Hardware amortization, sensor energy and cloud processing
pub fn compute_cost(
    configuration: SensingConfiguration,
    input: &CostModelInput,
    reference: &ReferenceData,
) -> ComputeCost {
    let profile = reference.profile(configuration);
    let cameras = input.camera_count(configuration) as f64;

    let hardware_amortization = cameras * profile.camera.unit_cost / reference.amortization_months;

    let kwh = cameras * profile.camera.power_watts / 1000.0 * input.monthly_hours();
    let energy = kwh * reference.pricing.energy_per_kwh;

    let cloud_processing = input.monthly_hours()
        * concurrency(configuration, profile, input, reference)
        * reference.pricing.compute_per_hour;

    ComputeCost {
        hardware_amortization,
        energy,
        cloud_processing,
    }
}

/// Scrap cost of defective items, adjusted for detection accuracy
pub fn rework_cost(input: &CostModelInput, profile: &ConfigurationProfile) -> f64 {
    let defective_items = input.monthly_items() * input.defect_rate_percent / 100.0;
    defective_items * input.scrap_cost_per_unit * profile.accuracy_multiplier()
}

/// `sqrt(cameras / baseline)`: integration effort grows sub-linearly with fleet size
pub fn complexity_factor(cameras: u32, reference: &ReferenceData) -> f64 {
    (cameras as f64 / reference.baseline_camera_count).sqrt()
}

/// Monthly share of the one-time integration budget
pub fn integration_cost(cameras: u32, profile: &ConfigurationProfile, reference: &ReferenceData) -> f64 {
    profile.integration_budget / reference.amortization_months * complexity_factor(cameras, reference)
}

/// One-time spend to stand up the configuration (hardware plus integration)
pub fn upfront_cost(
    configuration: SensingConfiguration,
    input: &CostModelInput,
    reference: &ReferenceData,
) -> f64 {
    let profile = reference.profile(configuration);
    let cameras = input.camera_count(configuration);

    cameras as f64 * profile.camera.unit_cost
        + profile.integration_budget * complexity_factor(cameras, reference)
}

/// Floor a derived cost at zero, logging when the floor is hit
fn non_negative(configuration: SensingConfiguration, component: &'static str, value: f64) -> f64 {
    if value < 0.0 {
        tracing::warn!(
            configuration = configuration.label(),
            component,
            value,
            "Derived cost is negative; clamping to 0"
        );
        return 0.0;
    }
    value
}

/// Full monthly breakdown for one configuration
///
/// Expects an input that already passed validation.
pub fn calculate_breakdown(
    configuration: SensingConfiguration,
    input: &CostModelInput,
    reference: &ReferenceData,
) -> CostBreakdown {
    let profile = reference.profile(configuration);
    let preset = reference.scenarios.get(input.scenario);
    let cameras = input.camera_count(configuration);

    let (data_volume_gb, raw_data_volume_gb) = match configuration {
        SensingConfiguration::FrameBased => (
            encoded_frame_volume_gb(cameras, input, preset, reference),
            Some(raw_frame_volume_gb(cameras, &profile.camera, input)),
        ),
        SensingConfiguration::EventBased => {
            (event_volume_gb(cameras, input, preset, reference), None)
        }
    };

    let egress_fraction = reference.egress.fraction(input.egress);
    let storage = non_negative(
        configuration,
        "storage",
        storage_cost(data_volume_gb, &reference.pricing, egress_fraction),
    );

    let compute = compute_cost(configuration, input, reference);
    let compute = ComputeCost {
        hardware_amortization: non_negative(
            configuration,
            "hardware_amortization",
            compute.hardware_amortization,
        ),
        energy: non_negative(configuration, "energy", compute.energy),
        cloud_processing: non_negative(configuration, "cloud_processing", compute.cloud_processing),
    };

    let rework = non_negative(configuration, "rework", rework_cost(input, profile));
    let integration = non_negative(
        configuration,
        "integration",
        integration_cost(cameras, profile, reference),
    );

    CostBreakdown::new(
        configuration,
        data_volume_gb,
        raw_data_volume_gb,
        storage,
        compute,
        rework,
        integration,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EgressMode;
    use crate::reference::default_reference;

    #[test]
    fn test_storage_cost_with_egress() {
        let pricing = default_reference().pricing;

        // 1000 GB * ($0.023 + $0.09 * 0.10) = $32.00
        let cost = storage_cost(1_000.0, &pricing, 0.10);
        assert!((cost - 32.0).abs() < 1e-9);

        let no_egress = storage_cost(1_000.0, &pricing, 0.0);
        assert!((no_egress - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_concurrency_scaling() {
        let reference = default_reference();
        let input = CostModelInput::default();

        // 60fps at reference throughput doubles frame-based workers
        let frame = concurrency(SensingConfiguration::FrameBased, &reference.frame, &input, &reference);
        assert!((frame - 2.0).abs() < 1e-9);

        // Event-based ignores frame rate
        let event = concurrency(SensingConfiguration::EventBased, &reference.event, &input, &reference);
        assert!((event - 0.25).abs() < 1e-9);

        let busier = CostModelInput {
            items_per_hour: 7200,
            ..Default::default()
        };
        let event = concurrency(SensingConfiguration::EventBased, &reference.event, &busier, &reference);
        assert!((event - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_compute_cost_components() {
        let reference = default_reference();
        let input = CostModelInput::default();

        let compute = compute_cost(SensingConfiguration::FrameBased, &input, &reference);

        // 8 * $2500 / 36 months
        assert!((compute.hardware_amortization - 555.555_555).abs() < 0.01);
        // 8 * 12W = 0.096 kW * 720h = 69.12 kWh * $0.15
        assert!((compute.energy - 10.368).abs() < 1e-9);
        // 720h * 2 workers * $0.90
        assert!((compute.cloud_processing - 1_296.0).abs() < 1e-9);
    }

    #[test]
    fn test_rework_cost_applies_accuracy() {
        let reference = default_reference();
        let input = CostModelInput::default();

        // 2,592,000 items * 0.3% = 7,776 defects * $2.50 = $19,440
        let frame = rework_cost(&input, &reference.frame);
        let event = rework_cost(&input, &reference.event);
        assert!((frame - 19_440.0 * 1.15).abs() < 1e-6);
        assert!((event - 19_440.0 * 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_integration_cost_complexity() {
        let reference = default_reference();

        // At baseline: $40,000 / 36
        let baseline = integration_cost(8, &reference.frame, &reference);
        assert!((baseline - 40_000.0 / 36.0).abs() < 1e-9);

        // 4x the cameras costs 2x to integrate
        let larger = integration_cost(32, &reference.frame, &reference);
        assert!((larger - 2.0 * baseline).abs() < 1e-9);
    }

    #[test]
    fn test_negative_rework_is_clamped() {
        let mut reference = default_reference();
        reference.event.accuracy_adjustment = -1.5;
        let input = CostModelInput::default();

        let breakdown = calculate_breakdown(SensingConfiguration::EventBased, &input, &reference);
        assert_eq!(breakdown.rework_cost, 0.0);
        assert!(breakdown.total_cost >= 0.0);
    }

    #[test]
    fn test_egress_mode_raises_storage() {
        let reference = default_reference();
        let telemetry = CostModelInput::default();
        let clips = CostModelInput {
            egress: EgressMode::TelemetryAndClips,
            ..Default::default()
        };

        let base = calculate_breakdown(SensingConfiguration::FrameBased, &telemetry, &reference);
        let with_clips = calculate_breakdown(SensingConfiguration::FrameBased, &clips, &reference);
        assert!(with_clips.storage_cost > base.storage_cost);
        assert_eq!(with_clips.compute_cost, base.compute_cost);
    }

    #[test]
    fn test_upfront_cost() {
        let reference = default_reference();
        let input = CostModelInput::default();

        // 8 * $4500 + $60,000 at baseline complexity
        let event = upfront_cost(SensingConfiguration::EventBased, &input, &reference);
        assert!((event - 96_000.0).abs() < 1e-9);
    }
}
