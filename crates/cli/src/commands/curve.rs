//! Curve command: sweep rates across utilization.

use alloy_primitives::{Address, U256};
use anyhow::{bail, Result};
use lendrates_engine::{RateResult, ReserveSnapshot};

use crate::cli::{CurveArgs, OutputFormat};
use crate::output::{curve_to_json, format_curve_table};

use super::load_strategy;

/// One evaluated point on the curve.
pub struct CurvePoint {
    /// Utilization as a ray fraction.
    pub utilization: U256,
    pub rates: RateResult,
}

pub fn run_curve(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    if args.steps == 0 || args.steps > 1_000 {
        bail!("steps must be between 1 and 1000");
    }

    let strategy = load_strategy(args.strategy, args.params_file.as_deref())?;

    // A total of steps * 1M units keeps every sampled utilization exact
    // in ray math (each step is a whole number of units).
    let total = U256::from(args.steps) * U256::from(1_000_000u64);
    let mut points = Vec::with_capacity(args.steps as usize + 1);

    for step in 0..=args.steps {
        let debt = U256::from(step) * U256::from(1_000_000u64);
        let snapshot = ReserveSnapshot::new(
            total - debt,
            U256::ZERO,
            debt,
            args.avg_stable_rate.0,
            U256::from(args.reserve_factor),
        );
        points.push(CurvePoint {
            utilization: snapshot.borrow_utilization_rate(),
            rates: strategy.calculate_interest_rates(Address::ZERO, &snapshot),
        });
    }

    match format {
        OutputFormat::Table => {
            println!("{}", format_curve_table(&points));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&curve_to_json(&points))?;
            println!("{}", json);
        }
    }

    Ok(())
}
