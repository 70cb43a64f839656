//! Table formatting for curve sweeps and preset listings.

use alloy_primitives::U256;
use lendrates_engine::math::ray_to_f64;
use lendrates_engine::StrategyPreset;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::commands::curve::CurvePoint;

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Liquidity")]
    liquidity: String,
    #[tabled(rename = "Stable Borrow")]
    stable: String,
    #[tabled(rename = "Variable Borrow")]
    variable: String,
}

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "Preset")]
    name: String,
    #[tabled(rename = "Optimal U")]
    optimal: String,
    #[tabled(rename = "Base Var")]
    base: String,
    #[tabled(rename = "Var Slope 1")]
    variable_slope1: String,
    #[tabled(rename = "Var Slope 2")]
    variable_slope2: String,
    #[tabled(rename = "Stable Slope 1")]
    stable_slope1: String,
    #[tabled(rename = "Stable Slope 2")]
    stable_slope2: String,
}

fn format_pct(value: U256) -> String {
    format!("{:.2}%", ray_to_f64(value) * 100.0)
}

pub fn format_curve_table(points: &[CurvePoint]) -> String {
    let rows: Vec<CurveRow> = points
        .iter()
        .map(|point| CurveRow {
            utilization: format_pct(point.utilization),
            liquidity: format_pct(point.rates.liquidity_rate),
            stable: format_pct(point.rates.stable_borrow_rate),
            variable: format_pct(point.rates.variable_borrow_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()));

    table.to_string()
}

pub fn format_strategies_table(presets: &[StrategyPreset]) -> String {
    let rows: Vec<StrategyRow> = presets
        .iter()
        .map(|preset| {
            let params = preset.params();
            StrategyRow {
                name: preset.name().to_string(),
                optimal: format_pct(params.optimal_utilization_rate),
                base: format_pct(params.base_variable_borrow_rate),
                variable_slope1: format_pct(params.variable_rate_slope1),
                variable_slope2: format_pct(params.variable_rate_slope2),
                stable_slope1: format_pct(params.stable_rate_slope1),
                stable_slope2: format_pct(params.stable_rate_slope2),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
