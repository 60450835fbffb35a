//! Output files for a finished run.
//!
//! - trace file: `row col max_battery` for the dock, then `row col battery`
//!   per step
//! - summary file: dock `row col`, one `row col` per step, the step and dirt
//!   tallies and the exit condition
//! - report file: the whole [`RunReport`] as YAML

use crate::config::OutputConfig;
use crate::error::{Result, SimError};
use crate::simulation::RunReport;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Render the trace file.
pub fn format_trace(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", report.dock, report.max_battery);
    for entry in &report.trace {
        let _ = writeln!(out, "{} {}", entry.pos, entry.battery);
    }
    out
}

/// Render the summary file.
pub fn format_summary(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.dock);
    for entry in &report.trace {
        let _ = writeln!(out, "{}", entry.pos);
    }
    let _ = writeln!(out, "Total number of steps performed: {}", report.steps);
    let _ = writeln!(out, "Amount of dirt left: {}", report.dirt_remaining);
    let _ = writeln!(out, "{}", report.exit_text());
    out
}

pub fn write_trace(report: &RunReport, path: &Path) -> Result<()> {
    create_parent(path)?;
    fs::write(path, format_trace(report))?;
    Ok(())
}

pub fn write_summary(report: &RunReport, path: &Path) -> Result<()> {
    create_parent(path)?;
    fs::write(path, format_summary(report))?;
    Ok(())
}

pub fn write_yaml(report: &RunReport, path: &Path) -> Result<()> {
    create_parent(path)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(writer, report)
        .map_err(|e| SimError::Report(format!("Failed to write {}: {}", path.display(), e)))
}

/// Write every configured output. Empty paths are skipped.
pub fn write_all(report: &RunReport, output: &OutputConfig) -> Result<()> {
    if !output.trace_path.is_empty() {
        write_trace(report, Path::new(&output.trace_path))?;
        log::info!("Trace written to {}", output.trace_path);
    }
    if !output.summary_path.is_empty() {
        write_summary(report, Path::new(&output.summary_path))?;
        log::info!("Summary written to {}", output.summary_path);
    }
    if !output.report_path.is_empty() {
        write_yaml(report, Path::new(&output.report_path))?;
        log::info!("Report written to {}", output.report_path);
    }
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
