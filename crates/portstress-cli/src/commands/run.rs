//! Run command implementation.
//!
//! Simulates the portfolio on synthetic market data with and without a
//! stress scenario and reports the final values and the loss.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use portstress_sim::{
    run_stress_test, MarketDataset, PerformanceSummary, PortfolioWeights, StressScenario,
    StressTestConfig, StressTestReport,
};

use crate::cli::OutputFormat;
use crate::commands::{build_config, ScenarioArgs};
use crate::output::{
    format_percent, print_csv, print_grid, print_header, print_json, print_table, print_warning,
    KeyValue,
};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Number of market data rows to preview
    #[arg(long, default_value = "5")]
    pub preview: usize,
}

/// JSON view of a run: everything except the full series.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    scenario: &'a StressScenario,
    weights: &'a PortfolioWeights,
    observations: usize,
    baseline_periods: usize,
    summary: &'a PerformanceSummary,
    relative_loss_pct: f64,
}

/// Execute the run command.
pub fn execute(
    args: RunArgs,
    base: StressTestConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let config = build_config(base, &args.scenario)?;
    let report = run_stress_test(&config)?;
    let summary = report.summary;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_market_preview(&report.market_data, args.preview);
                print_scenario(&report.scenario);
                print_header("Results");
            }
            print_table(&summary_rows(&summary))?;

            if !summary.relative_loss.is_finite() {
                print_warning("Relative loss is not finite; check for non-positive price levels.");
            }
        }
        OutputFormat::Json => print_json(&json_view(&report))?,
        OutputFormat::Csv => print_csv(&summary_rows(&summary))?,
        OutputFormat::Minimal => {
            println!(
                "{:.2} {:.2} {}",
                summary.baseline_final_value,
                summary.stressed_final_value,
                format_percent(summary.relative_loss, 2)
            );
        }
    }

    Ok(())
}

fn summary_rows(summary: &PerformanceSummary) -> Vec<KeyValue> {
    vec![
        KeyValue::from_f64("Baseline Portfolio Final Value", summary.baseline_final_value, 2),
        KeyValue::from_f64("Stressed Portfolio Final Value", summary.stressed_final_value, 2),
        KeyValue::new(
            "Portfolio Loss Under Stress",
            format_percent(summary.relative_loss, 2),
        ),
    ]
}

fn json_view(report: &StressTestReport) -> RunOutput<'_> {
    RunOutput {
        scenario: &report.scenario,
        weights: &report.weights,
        observations: report.market_data.observation_count(),
        baseline_periods: report.baseline.len(),
        summary: &report.summary,
        relative_loss_pct: report.summary.relative_loss_pct(),
    }
}

/// Prints the first `rows` observations of every asset.
fn print_market_preview(market: &MarketDataset, rows: usize) {
    if rows == 0 {
        return;
    }
    let preview = market.head(rows);

    print_header(&format!("Market Data (first {} rows)", preview.observation_count()));

    let header: Vec<String> = std::iter::once("Date".to_string())
        .chain(preview.asset_names().map(str::to_string))
        .collect();
    let body: Vec<Vec<String>> = preview
        .dates()
        .iter()
        .enumerate()
        .map(|(i, date)| {
            std::iter::once(date.to_string())
                .chain(preview.series().iter().map(|s| format!("{:.4}", s.values()[i])))
                .collect()
        })
        .collect();

    print_grid(&header, &body);
}

fn print_scenario(scenario: &StressScenario) {
    print_header(&format!("Stress Scenario: {}", scenario.name));

    let header = vec!["Asset".to_string(), "Shock".to_string()];
    let body: Vec<Vec<String>> = scenario
        .shocks
        .iter()
        .map(|(asset, shock)| vec![asset.clone(), format_percent(*shock, 1)])
        .collect();
    print_grid(&header, &body);
}
