//! Data volume calculations
//!
//! All volumes are monthly and expressed in GB (10^9 bytes).

use crate::models::CostModelInput;
use crate::reference::{CameraSpec, ReferenceData, ScenarioPreset};

const BYTES_PER_GB: f64 = 1_000_000_000.0;
const BYTES_PER_MEGABIT: f64 = 1_000_000.0 / 8.0;

/// Encoded frame stream for `cameras` units
///
/// The scenario bitrate is quoted at the reference frame rate and scales
/// linearly with `frames_per_second`.
pub fn encoded_frame_volume_gb(
    cameras: u32,
    input: &CostModelInput,
    preset: &ScenarioPreset,
    reference: &ReferenceData,
) -> f64 {
    let fps_scale = input.frames_per_second as f64 / reference.reference_fps;
    let bytes_per_second = preset.bitrate_mbps * fps_scale * BYTES_PER_MEGABIT;

    cameras as f64 * bytes_per_second * input.monthly_seconds() / BYTES_PER_GB
}

/// Uncompressed sensor output for `cameras` frame-based units
pub fn raw_frame_volume_gb(cameras: u32, camera: &CameraSpec, input: &CostModelInput) -> f64 {
    let bytes_per_frame = camera.pixels() * camera.bytes_per_pixel();

    cameras as f64
        * bytes_per_frame
        * input.frames_per_second as f64
        * input.monthly_seconds()
        / BYTES_PER_GB
}

/// Sparse event stream for `cameras` event-based units
///
/// Modeled as the equivalent encoded frame volume divided by the scenario's
/// reduction factor. No further compression is applied on top.
pub fn event_volume_gb(
    cameras: u32,
    input: &CostModelInput,
    preset: &ScenarioPreset,
    reference: &ReferenceData,
) -> f64 {
    encoded_frame_volume_gb(cameras, input, preset, reference) / preset.data_reduction_factor
}

/// Relative reduction of event vs frame data volume, in percent
///
/// Kept inside `[0, 100)`. A larger event deployment can out-produce a small
/// frame deployment; that case reports zero reduction and logs a warning.
pub fn data_reduction_percent(frame_volume_gb: f64, event_volume_gb: f64) -> f64 {
    if frame_volume_gb <= 0.0 {
        return 0.0;
    }

    let reduction = (frame_volume_gb - event_volume_gb) / frame_volume_gb * 100.0;
    if reduction < 0.0 {
        tracing::warn!(
            frame_volume_gb,
            event_volume_gb,
            "Event volume exceeds frame volume; clamping data reduction to 0%"
        );
        return 0.0;
    }
    reduction
}
