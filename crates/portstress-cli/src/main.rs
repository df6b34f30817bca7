//! Portstress CLI - Command-line interface for portfolio stress testing.
//!
//! # Usage
//!
//! ```bash
//! # Baseline vs stressed run with the default 60/30/10 portfolio
//! portstress run --seed 42
//!
//! # Custom allocation and shocks
//! portstress run --stocks 50 --bonds 40 --real-estate 10 --stocks-shock=-40
//!
//! # Apply a standard scenario and print JSON
//! portstress --format json run --scenario equity-crash
//!
//! # Export both cumulative return series for plotting
//! portstress export --output returns.csv --seed 42
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    // Resolve the base configuration once; commands layer their flags on top
    let base = match cli.config.as_deref() {
        Some(path) => config::load_config(path)?,
        None => portstress_sim::StressTestConfig::default(),
    };

    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Run(args) => commands::run::execute(args, base, format, cli.quiet)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, format)?,
        Commands::Export(args) => commands::export::execute(args, base, cli.quiet)?,
    }

    Ok(())
}
