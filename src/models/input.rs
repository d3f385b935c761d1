//! Evaluator input types
//!
//! The scalar knobs a user moves on the calculator, plus the two explicit
//! switches (scenario preset and egress mode).

use serde::{Deserialize, Serialize};

/// Which simulated deployment a breakdown describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensingConfiguration {
    /// Conventional fixed-rate image capture
    FrameBased,
    /// Sparse, change-triggered capture
    EventBased,
}

impl SensingConfiguration {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrameBased => "Frame-based",
            Self::EventBased => "Event-based",
        }
    }
}

/// Scene-motion preset selecting bitrate and data-reduction factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// High-motion scenes, smallest event-side advantage
    Conservative,
    #[default]
    Typical,
    /// Mostly static scenes, largest event-side advantage
    Aggressive,
}

impl Scenario {
    /// All presets, ordered from least to most favourable for event sensing
    pub const ALL: [Scenario; 3] = [Self::Conservative, Self::Typical, Self::Aggressive];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Typical => "Typical",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Resolve a preset by name
    /// Supports exact names and common aliases, case-insensitive
    pub fn find(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "conservative" | "low" | "high-motion" | "high_motion" => Some(Self::Conservative),
            "typical" | "default" | "medium" => Some(Self::Typical),
            "aggressive" | "high" | "static" => Some(Self::Aggressive),
            _ => None,
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| {
            format!(
                "Invalid scenario: {}. Use 'conservative', 'typical' or 'aggressive'",
                s
            )
        })
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How much of the stored data is also exported off-site each month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EgressMode {
    /// Base telemetry only
    #[default]
    Telemetry,
    /// Telemetry plus exported video clips
    TelemetryAndClips,
}

impl EgressMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telemetry => "telemetry",
            Self::TelemetryAndClips => "telemetry_and_clips",
        }
    }
}

impl std::str::FromStr for EgressMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "telemetry" | "base" => Ok(Self::Telemetry),
            "telemetry_and_clips" | "clips" | "video" => Ok(Self::TelemetryAndClips),
            _ => Err(format!(
                "Invalid egress mode: {}. Use 'telemetry' or 'telemetry-and-clips'",
                s
            )),
        }
    }
}

fn default_days_per_month() -> u32 {
    30
}

/// One calculator configuration. Built fresh per interaction and consumed by
/// a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelInput {
    pub frame_camera_count: u32,
    pub event_camera_count: u32,
    pub frames_per_second: u32,
    pub items_per_hour: u32,
    /// Percent of inspected items that are defective (0.3 means 0.3%)
    pub defect_rate_percent: f64,
    /// USD lost per defective item that escapes or is scrapped
    pub scrap_cost_per_unit: f64,
    pub operating_hours_per_day: u32,
    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
    #[serde(default)]
    pub scenario: Scenario,
    #[serde(default)]
    pub egress: EgressMode,
}

impl Default for CostModelInput {
    /// The reference line used on the deck's comparison slide
    fn default() -> Self {
        Self {
            frame_camera_count: 8,
            event_camera_count: 8,
            frames_per_second: 60,
            items_per_hour: 3600,
            defect_rate_percent: 0.3,
            scrap_cost_per_unit: 2.5,
            operating_hours_per_day: 24,
            days_per_month: default_days_per_month(),
            scenario: Scenario::Typical,
            egress: EgressMode::Telemetry,
        }
    }
}

impl CostModelInput {
    /// Camera count for the given configuration
    pub fn camera_count(&self, configuration: SensingConfiguration) -> u32 {
        match configuration {
            SensingConfiguration::FrameBased => self.frame_camera_count,
            SensingConfiguration::EventBased => self.event_camera_count,
        }
    }

    /// Operating hours per month
    pub fn monthly_hours(&self) -> f64 {
        self.operating_hours_per_day as f64 * self.days_per_month as f64
    }

    /// Operating seconds per month
    pub fn monthly_seconds(&self) -> f64 {
        self.monthly_hours() * 3600.0
    }

    /// Items inspected per month
    pub fn monthly_items(&self) -> f64 {
        self.items_per_hour as f64 * self.monthly_hours()
    }
}
