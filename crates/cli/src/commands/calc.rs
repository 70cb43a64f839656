//! Calc command: rates for one reserve snapshot.

use alloy_primitives::{Address, U256};
use anyhow::Result;
use lendrates_engine::ReserveSnapshot;

use crate::cli::{CalcArgs, OutputFormat};
use crate::output::{format_rates_detail, rates_to_json};

use super::load_strategy;

pub fn run_calc(args: &CalcArgs, format: OutputFormat) -> Result<()> {
    let strategy = load_strategy(args.strategy, args.params_file.as_deref())?;

    let mut snapshot = ReserveSnapshot::new(
        args.available,
        args.stable_debt,
        args.variable_debt,
        args.avg_stable_rate.0,
        U256::from(args.reserve_factor),
    );
    if let Some(total_supply) = args.total_supply {
        snapshot = snapshot.with_total_supply(total_supply);
    }

    let asset = args.asset.unwrap_or(Address::ZERO);
    let rates = strategy.calculate_interest_rates(asset, &snapshot);

    match format {
        OutputFormat::Table => {
            println!("{}", format_rates_detail(&snapshot, &rates));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rates_to_json(&rates))?;
            println!("{}", json);
        }
    }

    Ok(())
}
