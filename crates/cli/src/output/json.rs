//! JSON views with decimal ray strings.
//!
//! The engine types serialize `U256` as hex quantities; for CLI output
//! the rates are rendered as exact decimal fractions instead, matching
//! the notation used everywhere else on the command line.

use lendrates_engine::math::format_ray;
use lendrates_engine::{RateResult, StrategyPreset};
use serde::Serialize;

use crate::commands::curve::CurvePoint;

#[derive(Serialize)]
pub struct RatesJson {
    pub liquidity_rate: String,
    pub stable_borrow_rate: String,
    pub variable_borrow_rate: String,
}

#[derive(Serialize)]
pub struct CurvePointJson {
    pub utilization: String,
    #[serde(flatten)]
    pub rates: RatesJson,
}

#[derive(Serialize)]
pub struct StrategyJson {
    pub name: String,
    pub optimal_utilization_rate: String,
    pub base_variable_borrow_rate: String,
    pub variable_rate_slope1: String,
    pub variable_rate_slope2: String,
    pub stable_rate_slope1: String,
    pub stable_rate_slope2: String,
}

pub fn rates_to_json(rates: &RateResult) -> RatesJson {
    RatesJson {
        liquidity_rate: format_ray(rates.liquidity_rate),
        stable_borrow_rate: format_ray(rates.stable_borrow_rate),
        variable_borrow_rate: format_ray(rates.variable_borrow_rate),
    }
}

pub fn curve_to_json(points: &[CurvePoint]) -> Vec<CurvePointJson> {
    points
        .iter()
        .map(|point| CurvePointJson {
            utilization: format_ray(point.utilization),
            rates: rates_to_json(&point.rates),
        })
        .collect()
}

pub fn strategies_to_json(presets: &[StrategyPreset]) -> Vec<StrategyJson> {
    presets
        .iter()
        .map(|preset| {
            let params = preset.params();
            StrategyJson {
                name: preset.name().to_string(),
                optimal_utilization_rate: format_ray(params.optimal_utilization_rate),
                base_variable_borrow_rate: format_ray(params.base_variable_borrow_rate),
                variable_rate_slope1: format_ray(params.variable_rate_slope1),
                variable_rate_slope2: format_ray(params.variable_rate_slope2),
                stable_rate_slope1: format_ray(params.stable_rate_slope1),
                stable_rate_slope2: format_ray(params.stable_rate_slope2),
            }
        })
        .collect()
}
