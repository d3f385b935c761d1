//! Command-line arguments
//!
//! Every input flag defaults to the deck's reference line, so
//! `framevision-roi evaluate` with no flags reproduces the slide.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::export::ExportFormat;
use crate::models::{CostModelInput, EgressMode, Scenario};
use crate::sweep::{SweepParameter, SweepRange};

#[derive(Debug, Parser)]
#[command(
    name = "framevision-roi",
    version,
    about = "Compare monthly operating cost of frame-based and event-based inspection"
)]
pub struct Cli {
    /// Emit debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Reference data JSON file (defaults to $FRAMEVISION_REFERENCE, then built-in constants)
    #[arg(long, global = true, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one configuration
    Evaluate {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Re-evaluate while stepping one parameter across a range
    Sweep {
        #[command(flatten)]
        input: InputArgs,
        /// Parameter to vary (frame-cameras, event-cameras, cameras, fps,
        /// items-per-hour, defect-rate, scrap-cost, hours-per-day)
        #[arg(long)]
        parameter: SweepParameter,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Evaluate one configuration under every scenario preset
    Scenarios {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the reference data in use as JSON
    Presets,
    /// Run the HTTP service
    Serve {
        /// Bind address (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Calculator inputs
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    #[arg(long, default_value_t = 8)]
    pub frame_cameras: u32,
    #[arg(long, default_value_t = 8)]
    pub event_cameras: u32,
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    #[arg(long, default_value_t = 3600)]
    pub items_per_hour: u32,
    /// Defective items, in percent
    #[arg(long, default_value_t = 0.3)]
    pub defect_rate: f64,
    /// USD per defective item
    #[arg(long, default_value_t = 2.5)]
    pub scrap_cost: f64,
    #[arg(long, default_value_t = 24)]
    pub hours_per_day: u32,
    #[arg(long, default_value_t = 30)]
    pub days_per_month: u32,
    /// conservative, typical or aggressive
    #[arg(long, default_value = "typical")]
    pub scenario: Scenario,
    /// telemetry or telemetry-and-clips
    #[arg(long, default_value = "telemetry")]
    pub egress: EgressMode,
}

impl InputArgs {
    pub fn to_input(&self) -> CostModelInput {
        CostModelInput {
            frame_camera_count: self.frame_cameras,
            event_camera_count: self.event_cameras,
            frames_per_second: self.fps,
            items_per_hour: self.items_per_hour,
            defect_rate_percent: self.defect_rate,
            scrap_cost_per_unit: self.scrap_cost,
            operating_hours_per_day: self.hours_per_day,
            days_per_month: self.days_per_month,
            scenario: self.scenario,
            egress: self.egress,
        }
    }
}

/// How results are printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the result to a file in this format
    #[arg(long, value_name = "csv|json")]
    pub export: Option<ExportFormat>,

    /// Export destination (defaults to a timestamped file in Downloads)
    #[arg(long, value_name = "PATH", requires = "export")]
    pub output: Option<PathBuf>,
}

/// Sweep range from the CLI flags
pub fn sweep_range(start: f64, end: f64, step: f64) -> SweepRange {
    SweepRange { start, end, step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_defaults_match_deck_line() {
        let cli = Cli::try_parse_from(["framevision-roi", "evaluate"]).unwrap();
        match cli.command {
            Command::Evaluate { input, output } => {
                assert_eq!(input.to_input(), CostModelInput::default());
                assert_eq!(output.format, OutputFormat::Text);
                assert!(output.export.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_flags() {
        let cli = Cli::try_parse_from([
            "framevision-roi",
            "evaluate",
            "--frame-cameras",
            "12",
            "--event-cameras",
            "4",
            "--fps",
            "90",
            "--items-per-hour",
            "5400",
            "--defect-rate",
            "1.2",
            "--scrap-cost",
            "7.5",
            "--hours-per-day",
            "16",
            "--scenario",
            "aggressive",
            "--egress",
            "telemetry-and-clips",
            "--format",
            "json",
            "--export",
            "csv",
            "--output",
            "/tmp/out.csv",
        ])
        .unwrap();

        match cli.command {
            Command::Evaluate { input, output } => {
                let input = input.to_input();
                assert_eq!(input.frame_camera_count, 12);
                assert_eq!(input.event_camera_count, 4);
                assert_eq!(input.frames_per_second, 90);
                assert_eq!(input.items_per_hour, 5400);
                assert_eq!(input.defect_rate_percent, 1.2);
                assert_eq!(input.scrap_cost_per_unit, 7.5);
                assert_eq!(input.operating_hours_per_day, 16);
                assert_eq!(input.scenario, Scenario::Aggressive);
                assert_eq!(input.egress, EgressMode::TelemetryAndClips);
                assert_eq!(output.format, OutputFormat::Json);
                assert_eq!(output.export, Some(ExportFormat::Csv));
                assert_eq!(output.output, Some(PathBuf::from("/tmp/out.csv")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "framevision-roi",
            "presets",
            "--reference",
            "site.json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.reference, Some(PathBuf::from("site.json")));
    }

    #[test]
    fn test_sweep_args() {
        let cli = Cli::try_parse_from([
            "framevision-roi",
            "sweep",
            "--parameter",
            "frame-cameras",
            "--start",
            "1",
            "--end",
            "16",
        ])
        .unwrap();

        match cli.command {
            Command::Sweep {
                parameter,
                start,
                end,
                step,
                ..
            } => {
                assert_eq!(parameter, SweepParameter::FrameCameras);
                assert_eq!(sweep_range(start, end, step), SweepRange { start: 1.0, end: 16.0, step: 1.0 });
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_scenario_and_negative_cameras() {
        assert!(Cli::try_parse_from(["framevision-roi", "evaluate", "--scenario", "extreme"]).is_err());
        assert!(Cli::try_parse_from(["framevision-roi", "evaluate", "--frame-cameras", "-1"]).is_err());
    }

    #[test]
    fn test_output_requires_export() {
        assert!(Cli::try_parse_from(["framevision-roi", "evaluate", "--output", "x.csv"]).is_err());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["framevision-roi", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { host, port } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
