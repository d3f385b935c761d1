//! Built-in reference constants
//!
//! Figures used on the deck's cost slides. Treat them as a starting point;
//! site-specific numbers should be supplied as a reference data file.

use super::{
    CameraSpec, ConfigurationProfile, EgressFractions, PricingRates, ReferenceData,
    ScenarioPreset, ScenarioPresets,
};

/// Version tag of the built-in constant set
pub const REFERENCE_VERSION: &str = "2026.10-deck";

/// Default reference data (October 2026)
pub fn default_reference() -> ReferenceData {
    ReferenceData {
        version: REFERENCE_VERSION.to_string(),
        reference_fps: 30.0,
        reference_items_per_hour: 3600.0,
        baseline_camera_count: 8.0,
        amortization_months: 36.0,
        frame: ConfigurationProfile {
            camera: CameraSpec {
                name: "Industrial area-scan 2MP".to_string(),
                width_px: 1920,
                height_px: 1080,
                bit_depth: 12,
                power_watts: 12.0,
                unit_cost: 2_500.0,
                lossless_packing_ratio: None,
                max_events_per_second: None,
            },
            base_concurrency: 1.0,
            // Motion blur lets more defects through at line speed
            accuracy_adjustment: 0.15,
            integration_budget: 40_000.0,
        },
        event: ConfigurationProfile {
            camera: CameraSpec {
                name: "Event-based vision sensor HD".to_string(),
                width_px: 1280,
                height_px: 720,
                bit_depth: 1,
                power_watts: 1.5,
                unit_cost: 4_500.0,
                lossless_packing_ratio: Some(2.8),
                max_events_per_second: Some(1.066e9),
            },
            base_concurrency: 0.25,
            accuracy_adjustment: -0.15,
            integration_budget: 60_000.0,
        },
        pricing: PricingRates {
            storage_per_gb: 0.023,
            egress_per_gb: 0.09,
            energy_per_kwh: 0.15,
            compute_per_hour: 0.90,
        },
        egress: EgressFractions {
            telemetry: 0.10,
            telemetry_and_clips: 0.35,
        },
        scenarios: ScenarioPresets {
            conservative: ScenarioPreset {
                bitrate_mbps: 12.0,
                data_reduction_factor: 10.0,
            },
            typical: ScenarioPreset {
                bitrate_mbps: 8.0,
                data_reduction_factor: 50.0,
            },
            aggressive: ScenarioPreset {
                bitrate_mbps: 4.0,
                data_reduction_factor: 100.0,
            },
        },
    }
}
