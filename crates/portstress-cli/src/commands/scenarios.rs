//! Scenarios command implementation.
//!
//! Lists the standard stress scenarios.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use portstress_sim::assets::STANDARD_ASSETS;
use portstress_sim::{stress_scenarios, StressScenario};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{format_percent, print_csv, print_header, print_json, print_table};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Show a single scenario by name or slug
    pub name: Option<String>,
}

/// Table row for one scenario.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Stocks")]
    stocks: String,
    #[tabled(rename = "Bonds")]
    bonds: String,
    #[tabled(rename = "RealEstate")]
    real_estate: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&StressScenario> for ScenarioRow {
    fn from(s: &StressScenario) -> Self {
        let shock = |asset: &str| {
            s.shock(asset)
                .map(|v| format_percent(v, 0))
                .unwrap_or_else(|| "-".to_string())
        };
        let [stocks, bonds, real_estate] = STANDARD_ASSETS.map(shock);
        Self {
            key: s.slug(),
            name: s.name.clone(),
            stocks,
            bonds,
            real_estate,
            description: s.description.clone().unwrap_or_default(),
        }
    }
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, format: OutputFormat) -> Result<()> {
    let scenarios = match args.name {
        Some(ref name) => vec![stress_scenarios::find(name)
            .ok_or_else(|| CliError::UnknownScenario(name.clone()))?],
        None => stress_scenarios::all(),
    };

    match format {
        OutputFormat::Json => print_json(&scenarios)?,
        OutputFormat::Minimal => {
            for s in &scenarios {
                println!("{}", s.slug());
            }
        }
        OutputFormat::Table => {
            let rows: Vec<ScenarioRow> = scenarios.iter().map(ScenarioRow::from).collect();
            print_header("Standard Stress Scenarios");
            print_table(&rows)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<ScenarioRow> = scenarios.iter().map(ScenarioRow::from).collect();
            print_csv(&rows)?;
        }
    }

    Ok(())
}
