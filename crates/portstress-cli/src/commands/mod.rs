//! CLI command implementations.

pub mod export;
pub mod run;
pub mod scenarios;

pub use export::ExportArgs;
pub use run::RunArgs;
pub use scenarios::ScenariosArgs;

use clap::Args;
use portstress_core::Date;
use portstress_sim::assets::{BONDS, REAL_ESTATE, STOCKS};
use portstress_sim::{stress_scenarios, StressTestConfig};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Portfolio, scenario, and market options shared by `run` and `export`.
#[derive(Args, Debug, Default, Clone)]
pub struct ScenarioArgs {
    /// Stocks allocation in whole percent
    #[arg(long)]
    pub stocks: Option<u32>,

    /// Bonds allocation in whole percent
    #[arg(long)]
    pub bonds: Option<u32>,

    /// Real estate allocation in whole percent
    #[arg(long)]
    pub real_estate: Option<u32>,

    /// Standard scenario to apply (see `portstress scenarios`)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Stocks shock in percent (e.g. -30)
    #[arg(long, allow_hyphen_values = true)]
    pub stocks_shock: Option<f64>,

    /// Bonds shock in percent (e.g. -10)
    #[arg(long, allow_hyphen_values = true)]
    pub bonds_shock: Option<f64>,

    /// Real estate shock in percent (e.g. -20)
    #[arg(long, allow_hyphen_values = true)]
    pub real_estate_shock: Option<f64>,

    /// Seed for reproducible market data
    #[arg(long)]
    pub seed: Option<u64>,

    /// First date of the market history (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Number of business-day observations
    #[arg(long)]
    pub periods: Option<usize>,
}

/// Layers command-line options over a base configuration.
///
/// Order: `--scenario` replaces all shocks, individual shock flags then
/// override single assets, followed by allocations and market settings.
pub fn build_config(
    mut config: StressTestConfig,
    args: &ScenarioArgs,
) -> CliResult<StressTestConfig> {
    if let Some(ref name) = args.scenario {
        let scenario =
            stress_scenarios::find(name).ok_or_else(|| CliError::UnknownScenario(name.clone()))?;
        debug!(scenario = %scenario.name, "applying standard scenario");
        config = config.with_scenario(&scenario);
    }

    for (asset, shock) in [
        (STOCKS, args.stocks_shock),
        (BONDS, args.bonds_shock),
        (REAL_ESTATE, args.real_estate_shock),
    ] {
        if let Some(pct) = shock {
            config = config.with_shock_pct(asset, pct);
        }
    }

    for (asset, allocation) in [
        (STOCKS, args.stocks),
        (BONDS, args.bonds),
        (REAL_ESTATE, args.real_estate),
    ] {
        if let Some(pct) = allocation {
            config = config.with_allocation(asset, pct);
        }
    }

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ref s) = args.start_date {
        config.market.start_date = parse_date(s)?;
    }
    if let Some(periods) = args.periods {
        config.market.period_count = periods;
    }

    Ok(config)
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2020-02-29").unwrap().to_string(), "2020-02-29");
        assert!(matches!(parse_date("2021-02-29"), Err(CliError::InvalidDate(_))));
        assert!(parse_date("29/02/2020").is_err());
    }

    #[test]
    fn test_build_config_defaults_untouched() {
        let config = build_config(StressTestConfig::default(), &ScenarioArgs::default()).unwrap();
        assert_eq!(config, StressTestConfig::default());
    }

    #[test]
    fn test_build_config_layering() {
        let args = ScenarioArgs {
            scenario: Some("equity-crash".into()),
            bonds_shock: Some(-5.0),
            stocks: Some(70),
            bonds: Some(20),
            seed: Some(3),
            periods: Some(100),
            start_date: Some("2010-06-01".into()),
            ..ScenarioArgs::default()
        };
        let config = build_config(StressTestConfig::default(), &args).unwrap();

        assert_eq!(config.scenario_name, "Equity Crash");
        assert!((config.shocks_pct["Stocks"] + 50.0).abs() < 1e-9);
        assert!((config.shocks_pct["Bonds"] + 5.0).abs() < 1e-9);
        assert_eq!(config.allocation_pct["Stocks"], 70);
        assert_eq!(config.allocation_pct["RealEstate"], 10);
        assert_eq!(config.market.seed, Some(3));
        assert_eq!(config.market.period_count, 100);
        assert_eq!(config.market.start_date.to_string(), "2010-06-01");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_config_unknown_scenario() {
        let args = ScenarioArgs {
            scenario: Some("alien-invasion".into()),
            ..ScenarioArgs::default()
        };
        assert!(matches!(
            build_config(StressTestConfig::default(), &args),
            Err(CliError::UnknownScenario(_))
        ));
    }
}
