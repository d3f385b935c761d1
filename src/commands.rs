//! CLI command handlers
//!
//! Each subcommand resolves reference data, runs the library call, prints
//! to stdout in the requested format, and optionally exports to a file.

use std::fmt::Write as _;

use crate::cli::{sweep_range, Cli, Command, OutputArgs, OutputFormat};
use crate::config::ServerConfig;
use crate::export::{
    resolve_export_path, to_csv_string, write_comparisons_csv, write_json, write_scenarios_csv,
    write_sweep_csv, EvaluationExportJson, ExportFormat, ExportableComparison,
    ScenariosExportJson, SweepExportJson,
};
use crate::metrics::{evaluate, Evaluation, Evaluator};
use crate::models::CostBreakdown;
use crate::reference::ReferenceData;
use crate::sweep::{compare_scenarios, sweep, ScenarioRow, SweepParameter, SweepPoint};
use crate::AppError;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<(), AppError> {
    let reference = ReferenceData::resolve(cli.reference.as_deref())?;

    match cli.command {
        Command::Evaluate { input, output } => {
            let evaluation = evaluate(&input.to_input(), &reference)?;
            emit_evaluation(&evaluation, &output)
        }
        Command::Sweep {
            input,
            parameter,
            start,
            end,
            step,
            output,
        } => {
            let points = sweep(&input.to_input(), &reference, parameter, &sweep_range(start, end, step))?;
            emit_sweep(&reference, parameter, &points, &output)
        }
        Command::Scenarios { input, output } => {
            let rows = compare_scenarios(&input.to_input(), &reference)?;
            emit_scenarios(&reference, &rows, &output)
        }
        Command::Presets => {
            println!("{}", to_json(&reference)?);
            Ok(())
        }
        Command::Serve { host, port } => {
            let config = ServerConfig::from_env()?.with_overrides(host, port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(crate::server::serve(&config, Evaluator::new(reference)))
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize JSON: {}", e)))
}

fn emit_evaluation(evaluation: &Evaluation, output: &OutputArgs) -> Result<(), AppError> {
    let record = ExportableComparison::from(evaluation);

    match output.format {
        OutputFormat::Text => print!("{}", format_evaluation(evaluation)),
        OutputFormat::Json => println!("{}", to_json(evaluation)?),
        OutputFormat::Csv => print!("{}", to_csv_string(std::slice::from_ref(&record))?),
    }

    if let Some(format) = output.export {
        let path = resolve_export_path(output.output.clone(), "comparison", format);
        match format {
            ExportFormat::Csv => write_comparisons_csv(std::slice::from_ref(&record), &path)?,
            ExportFormat::Json => write_json(&EvaluationExportJson::new(evaluation), &path)?,
        }
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

fn emit_sweep(
    reference: &ReferenceData,
    parameter: SweepParameter,
    points: &[SweepPoint],
    output: &OutputArgs,
) -> Result<(), AppError> {
    match output.format {
        OutputFormat::Text => print!("{}", format_sweep(parameter, points)),
        OutputFormat::Json => println!(
            "{}",
            to_json(&SweepExportJson::new(&reference.version, parameter, points))?
        ),
        OutputFormat::Csv => print!("{}", to_csv_string(points)?),
    }

    if let Some(format) = output.export {
        let path = resolve_export_path(output.output.clone(), "sweep", format);
        match format {
            ExportFormat::Csv => write_sweep_csv(points, &path)?,
            ExportFormat::Json => {
                write_json(&SweepExportJson::new(&reference.version, parameter, points), &path)?
            }
        }
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

fn emit_scenarios(
    reference: &ReferenceData,
    rows: &[ScenarioRow],
    output: &OutputArgs,
) -> Result<(), AppError> {
    match output.format {
        OutputFormat::Text => print!("{}", format_scenarios(rows)),
        OutputFormat::Json => println!(
            "{}",
            to_json(&ScenariosExportJson::new(&reference.version, rows))?
        ),
        OutputFormat::Csv => print!("{}", to_csv_string(rows)?),
    }

    if let Some(format) = output.export {
        let path = resolve_export_path(output.output.clone(), "scenarios", format);
        match format {
            ExportFormat::Csv => write_scenarios_csv(rows, &path)?,
            ExportFormat::Json => write_json(&ScenariosExportJson::new(&reference.version, rows), &path)?,
        }
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

// ============================================================================
// Text rendering
// ============================================================================

/// Rounded for display only
fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "n/a".to_string(),
    }
}

fn breakdown_rows(frame: &CostBreakdown, event: &CostBreakdown) -> Vec<(&'static str, f64, f64)> {
    vec![
        ("Data volume (GB)", frame.data_volume_gb, event.data_volume_gb),
        ("Storage", frame.storage_cost, event.storage_cost),
        ("Compute", frame.compute_cost, event.compute_cost),
        ("  hardware", frame.compute.hardware_amortization, event.compute.hardware_amortization),
        ("  energy", frame.compute.energy, event.compute.energy),
        ("  cloud", frame.compute.cloud_processing, event.compute.cloud_processing),
        ("Rework", frame.rework_cost, event.rework_cost),
        ("Integration", frame.integration_cost, event.integration_cost),
        ("Total / month", frame.total_cost, event.total_cost),
    ]
}

/// Human-readable comparison table
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let comparison = &evaluation.comparison;
    let roi = &evaluation.roi;

    let _ = writeln!(
        out,
        "{} scenario, reference data {}",
        evaluation.input.scenario, evaluation.reference_version
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20} {:>14} {:>14}", "", "Frame-based", "Event-based");
    for (label, frame, event) in breakdown_rows(&evaluation.frame, &evaluation.event) {
        let _ = writeln!(out, "{:<20} {:>14.2} {:>14.2}", label, frame, event);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Data reduction:      {:.1}%", comparison.data_reduction_percent);
    let _ = writeln!(
        out,
        "Monthly savings:     ${:.2} ({})",
        comparison.cost_savings,
        format_percent(comparison.percentage_savings)
    );
    let _ = writeln!(out, "Annual savings:      ${:.2}", roi.annual_savings);
    let _ = writeln!(out, "Extra investment:    ${:.2}", roi.incremental_investment);
    let _ = writeln!(
        out,
        "Payback:             {}",
        roi.payback_months
            .map(|m| format!("{:.1} months", m))
            .unwrap_or_else(|| "never".to_string())
    );
    let _ = writeln!(out, "Rating:              {}", roi.rating.label());
    out
}

/// One line per sweep point
pub fn format_sweep(parameter: SweepParameter, points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>14} {:>14} {:>14} {:>14} {:>9}",
        parameter.as_str(),
        "frame total",
        "event total",
        "savings",
        "savings%"
    );
    for point in points {
        let _ = writeln!(
            out,
            "{:>14} {:>14.2} {:>14.2} {:>14.2} {:>9}",
            point.value,
            point.frame_total,
            point.event_total,
            point.cost_savings,
            format_percent(point.percentage_savings)
        );
    }
    out
}

/// One line per scenario preset
pub fn format_scenarios(rows: &[ScenarioRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>8} {:>8} {:>11} {:>14} {:>14} {:>9}",
        "scenario", "Mbps", "factor", "reduction", "frame total", "event total", "savings%"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<14} {:>8.1} {:>8.0} {:>10.1}% {:>14.2} {:>14.2} {:>9}",
            row.scenario.label(),
            row.bitrate_mbps,
            row.data_reduction_factor,
            row.data_reduction_percent,
            row.frame_total,
            row.event_total,
            format_percent(row.percentage_savings)
        );
    }
    out
}
