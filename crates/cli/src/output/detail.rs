//! Detailed output formatting for a single rate calculation.

use alloy_primitives::U256;
use colored::Colorize;
use lendrates_engine::math::ray_to_f64;
use lendrates_engine::{RateResult, ReserveSnapshot};

fn format_rate(rate: U256) -> String {
    format!("{:.4}%", ray_to_f64(rate) * 100.0)
}

pub fn format_rates_detail(snapshot: &ReserveSnapshot, rates: &RateResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Reserve Snapshot".cyan().bold()));
    output.push_str(&format!(
        "  Available Liquidity: {}\n",
        snapshot.available_liquidity
    ));
    output.push_str(&format!(
        "  Stable Debt:         {}\n",
        snapshot.total_stable_debt
    ));
    output.push_str(&format!(
        "  Variable Debt:       {}\n",
        snapshot.total_variable_debt
    ));
    if let Some(total_supply) = snapshot.total_supply {
        output.push_str(&format!("  Total Supply:        {}\n", total_supply));
    }
    output.push_str(&format!(
        "  Avg Stable Rate:     {}\n",
        format_rate(snapshot.average_stable_borrow_rate)
    ));
    output.push_str(&format!(
        "  Reserve Factor:      {} bps\n",
        snapshot.reserve_factor
    ));
    output.push_str(&format!(
        "  Borrow Utilization:  {}\n",
        format_rate(snapshot.borrow_utilization_rate())
    ));
    if snapshot.total_supply.is_some() {
        output.push_str(&format!(
            "  Supply Utilization:  {}\n",
            format_rate(snapshot.supply_utilization_rate())
        ));
    }
    output.push('\n');

    output.push_str(&format!("{}\n", "Rates".cyan().bold()));
    output.push_str(&format!(
        "  Liquidity Rate:      {}\n",
        format_rate(rates.liquidity_rate).green()
    ));
    output.push_str(&format!(
        "  Stable Borrow Rate:  {}\n",
        format_rate(rates.stable_borrow_rate)
    ));
    output.push_str(&format!(
        "  Variable Borrow Rate: {}\n",
        format_rate(rates.variable_borrow_rate)
    ));

    output
}
