//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand, ValueEnum};
use lendrates_engine::math::parse_ray;
use lendrates_engine::StrategyPreset;

/// Lendrates CLI - Inspect reserve interest-rate strategies
#[derive(Parser, Debug)]
#[command(name = "lendrates")]
#[command(about = "CLI tool for inspecting reserve interest-rate strategies", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the three rates for one reserve snapshot
    Calc(CalcArgs),
    /// Sweep the rate curve across utilization
    Curve(CurveArgs),
    /// List the built-in strategy presets
    Strategies,
}

#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Strategy preset to price with (e.g. stable-two, volatile-one)
    #[arg(long, default_value = "stable-two")]
    pub strategy: StrategyPreset,

    /// JSON file with custom strategy parameters (overrides --strategy)
    #[arg(long, conflicts_with = "strategy")]
    pub params_file: Option<PathBuf>,

    /// Reserve asset address (identification only, does not affect rates)
    #[arg(long)]
    pub asset: Option<Address>,

    /// Underlying units held by the reserve and not lent out
    #[arg(long, default_value = "0")]
    pub available: U256,

    /// Outstanding stable-rate debt
    #[arg(long, default_value = "0")]
    pub stable_debt: U256,

    /// Outstanding variable-rate debt
    #[arg(long, default_value = "0")]
    pub variable_debt: U256,

    /// Average stable borrow rate as a decimal fraction (e.g. "0.039")
    #[arg(long, default_value = "0")]
    pub avg_stable_rate: RayArg,

    /// Reserve factor in basis points (0..=10000)
    #[arg(long, default_value = "0")]
    pub reserve_factor: u64,

    /// Externally tracked total supply, when it diverges from
    /// available + debt
    #[arg(long)]
    pub total_supply: Option<U256>,
}

#[derive(Parser, Debug)]
pub struct CurveArgs {
    /// Strategy preset to sweep (e.g. stable-two, volatile-one)
    #[arg(long, default_value = "stable-two")]
    pub strategy: StrategyPreset,

    /// JSON file with custom strategy parameters (overrides --strategy)
    #[arg(long, conflicts_with = "strategy")]
    pub params_file: Option<PathBuf>,

    /// Number of utilization steps between 0% and 100%
    #[arg(short = 'n', long, default_value = "20")]
    pub steps: u64,

    /// Average stable borrow rate as a decimal fraction (e.g. "0.039")
    #[arg(long, default_value = "0")]
    pub avg_stable_rate: RayArg,

    /// Reserve factor in basis points (0..=10000)
    #[arg(long, default_value = "0")]
    pub reserve_factor: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper parsing a decimal fraction (e.g. "0.039") into a ray value.
#[derive(Clone, Copy, Debug)]
pub struct RayArg(pub U256);

impl FromStr for RayArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ray(s).map(RayArg).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for RayArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", lendrates_engine::math::format_ray(self.0))
    }
}
