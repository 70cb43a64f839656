//! Lendrates CLI - Inspect reserve interest-rate strategies.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_calc, run_curve, run_strategies};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc(args) => {
            run_calc(&args, cli.format)?;
        }
        Commands::Curve(args) => {
            run_curve(&args, cli.format)?;
        }
        Commands::Strategies => {
            run_strategies(cli.format)?;
        }
    }

    Ok(())
}
