//! Export command implementation.
//!
//! Writes the baseline and stressed cumulative return series side by side.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use portstress_sim::{run_stress_test, ReturnSeries, StressTestConfig};

use crate::commands::{build_config, ScenarioArgs};
use crate::error::{CliError, CliResult};
use crate::output::print_success;

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Output CSV file
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExportRow {
    date: String,
    baseline: f64,
    stressed: f64,
}

/// Execute the export command.
pub fn execute(args: ExportArgs, base: StressTestConfig, quiet: bool) -> Result<()> {
    let config = build_config(base, &args.scenario)?;
    let report = run_stress_test(&config)?;

    let rows = write_series(&args.output, &report.baseline, &report.stressed)?;
    info!(path = %args.output.display(), rows, "exported return series");

    if !quiet {
        print_success(&format!(
            "Wrote {} rows to {}",
            rows,
            args.output.display()
        ));
    }
    Ok(())
}

/// Writes `date,baseline,stressed` rows and returns the row count.
fn write_series(
    path: &Path,
    baseline: &ReturnSeries,
    stressed: &ReturnSeries,
) -> CliResult<usize> {
    if baseline.dates() != stressed.dates() {
        return Err(CliError::Serialization(
            "baseline and stressed series have different dates".to_string(),
        ));
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for ((date, b), s) in baseline.points().zip(stressed.values()) {
        wtr.serialize(ExportRow {
            date: date.to_string(),
            baseline: b,
            stressed: *s,
        })?;
    }
    wtr.flush()?;
    Ok(baseline.len())
}
