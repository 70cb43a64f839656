//! Named rate-strategy parameter tables.
//!
//! Deployed lending markets configure each reserve from a small set of
//! shared curve shapes rather than bespoke constants: stablecoins
//! tolerate high utilization, volatile collateral gets a steep excess
//! slope at a low kink, and some assets are listed with borrowing
//! disabled outright. The presets here carry those shapes as a typed
//! enum keyed by name, so callers never dispatch on raw strings.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::RateModelError;
use crate::math::ray_from_bps;
use crate::strategy::RateStrategyParams;

/// The curve shapes markets are listed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyPreset {
    /// Stablecoins with deep liquidity: kink at 90%, gentle slopes.
    StableOne,
    /// Stablecoins with thinner liquidity: kink at 80%, steeper excess.
    StableTwo,
    /// Volatile collateral: kink at 45%, punitive 300% excess slope.
    VolatileOne,
    /// Wrapped native asset: kink at 65%.
    Weth,
    /// Assets listed without borrowing: all slopes zero.
    NoBorrow,
}

impl StrategyPreset {
    /// Every preset, in listing order.
    pub fn all() -> [StrategyPreset; 5] {
        [
            StrategyPreset::StableOne,
            StrategyPreset::StableTwo,
            StrategyPreset::VolatileOne,
            StrategyPreset::Weth,
            StrategyPreset::NoBorrow,
        ]
    }

    /// The preset's canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyPreset::StableOne => "stable-one",
            StrategyPreset::StableTwo => "stable-two",
            StrategyPreset::VolatileOne => "volatile-one",
            StrategyPreset::Weth => "weth",
            StrategyPreset::NoBorrow => "no-borrow",
        }
    }

    /// The curve constants for this preset.
    ///
    /// All presets satisfy [`crate::RateStrategy::new`]'s validation.
    pub fn params(&self) -> RateStrategyParams {
        match self {
            StrategyPreset::StableOne => RateStrategyParams {
                optimal_utilization_rate: ray_from_bps(9_000),
                base_variable_borrow_rate: U256::ZERO,
                variable_rate_slope1: ray_from_bps(400),
                variable_rate_slope2: ray_from_bps(6_000),
                stable_rate_slope1: ray_from_bps(200),
                stable_rate_slope2: ray_from_bps(6_000),
            },
            StrategyPreset::StableTwo => RateStrategyParams {
                optimal_utilization_rate: ray_from_bps(8_000),
                base_variable_borrow_rate: U256::ZERO,
                variable_rate_slope1: ray_from_bps(400),
                variable_rate_slope2: ray_from_bps(7_500),
                stable_rate_slope1: ray_from_bps(200),
                stable_rate_slope2: ray_from_bps(7_500),
            },
            StrategyPreset::VolatileOne => RateStrategyParams {
                optimal_utilization_rate: ray_from_bps(4_500),
                base_variable_borrow_rate: U256::ZERO,
                variable_rate_slope1: ray_from_bps(700),
                variable_rate_slope2: ray_from_bps(30_000),
                stable_rate_slope1: ray_from_bps(1_000),
                stable_rate_slope2: ray_from_bps(30_000),
            },
            StrategyPreset::Weth => RateStrategyParams {
                optimal_utilization_rate: ray_from_bps(6_500),
                base_variable_borrow_rate: U256::ZERO,
                variable_rate_slope1: ray_from_bps(800),
                variable_rate_slope2: ray_from_bps(10_000),
                stable_rate_slope1: ray_from_bps(1_000),
                stable_rate_slope2: ray_from_bps(10_000),
            },
            StrategyPreset::NoBorrow => RateStrategyParams {
                optimal_utilization_rate: ray_from_bps(4_500),
                base_variable_borrow_rate: U256::ZERO,
                variable_rate_slope1: U256::ZERO,
                variable_rate_slope2: U256::ZERO,
                stable_rate_slope1: U256::ZERO,
                stable_rate_slope2: U256::ZERO,
            },
        }
    }
}

impl fmt::Display for StrategyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyPreset {
    type Err = RateModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyPreset::all()
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| RateModelError::UnknownPreset {
                name: s.to_string(),
            })
    }
}
