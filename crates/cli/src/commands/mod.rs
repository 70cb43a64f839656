//! Command implementations.

pub mod calc;
pub mod curve;
pub mod strategies;

use std::path::Path;

use anyhow::{Context, Result};
use lendrates_engine::math::parse_ray;
use lendrates_engine::{RateStrategy, RateStrategyParams, StrategyPreset};
use serde::Deserialize;

pub use calc::run_calc;
pub use curve::run_curve;
pub use strategies::run_strategies;

/// On-disk strategy parameters, as decimal fraction strings
/// (e.g. `"0.8"` for an 80% optimal utilization).
#[derive(Debug, Deserialize)]
struct StrategyParamsFile {
    optimal_utilization_rate: String,
    base_variable_borrow_rate: String,
    variable_rate_slope1: String,
    variable_rate_slope2: String,
    stable_rate_slope1: String,
    stable_rate_slope2: String,
}

impl StrategyParamsFile {
    fn into_params(self) -> Result<RateStrategyParams> {
        Ok(RateStrategyParams {
            optimal_utilization_rate: parse_ray(&self.optimal_utilization_rate)?,
            base_variable_borrow_rate: parse_ray(&self.base_variable_borrow_rate)?,
            variable_rate_slope1: parse_ray(&self.variable_rate_slope1)?,
            variable_rate_slope2: parse_ray(&self.variable_rate_slope2)?,
            stable_rate_slope1: parse_ray(&self.stable_rate_slope1)?,
            stable_rate_slope2: parse_ray(&self.stable_rate_slope2)?,
        })
    }
}

/// Builds the strategy from a params file when given, falling back to
/// the selected preset.
fn load_strategy(preset: StrategyPreset, params_file: Option<&Path>) -> Result<RateStrategy> {
    let params = match params_file {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file {}", path.display()))?;
            let file: StrategyParamsFile = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse params file {}", path.display()))?;
            file.into_params()?
        }
        None => preset.params(),
    };

    Ok(RateStrategy::new(params)?)
}
