//! Reserve snapshot and rate result types.
//!
//! A [`ReserveSnapshot`] is the per-call view of a reserve's liquidity
//! and debt that the pool hands to the engine after a state-mutating
//! operation (supply, withdraw, borrow, repay, liquidation). The engine
//! never persists it; the caller rebuilds it fresh each time.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::curve::utilization_rate;
use crate::math::ray_div_down;

/// Snapshot of a reserve's liquidity and debt at the moment rates are
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    /// Underlying units currently held by the reserve and not lent out.
    pub available_liquidity: U256,

    /// Outstanding principal plus accrued interest at stable rates.
    pub total_stable_debt: U256,

    /// Outstanding principal plus accrued interest at variable rates.
    pub total_variable_debt: U256,

    /// Weighted average rate paid across all stable-rate debt
    /// (ray-scaled). Serves as the stable curve's baseline; its upstream
    /// derivation is the caller's rebalancing policy, opaque here.
    pub average_stable_borrow_rate: U256,

    /// Share of generated interest retained as protocol revenue, in
    /// basis points (0..=10000).
    pub reserve_factor: U256,

    /// Externally tracked total supply, when it diverges from
    /// `available_liquidity + total_debt` (e.g. minted principal not
    /// matched by liquidity). `None` means the two coincide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<U256>,
}

impl ReserveSnapshot {
    /// Creates a snapshot where total supply equals available liquidity
    /// plus debt. Field order mirrors the pool's calling convention.
    pub fn new(
        available_liquidity: U256,
        total_stable_debt: U256,
        total_variable_debt: U256,
        average_stable_borrow_rate: U256,
        reserve_factor: U256,
    ) -> Self {
        Self {
            available_liquidity,
            total_stable_debt,
            total_variable_debt,
            average_stable_borrow_rate,
            reserve_factor,
            total_supply: None,
        }
    }

    /// Sets an externally tracked total supply, decoupling the
    /// supply-side utilization from the borrow-side one.
    pub fn with_total_supply(mut self, total_supply: U256) -> Self {
        self.total_supply = Some(total_supply);
        self
    }

    /// Total outstanding debt across both rate modes.
    pub fn total_debt(&self) -> U256 {
        self.total_stable_debt + self.total_variable_debt
    }

    /// Utilization seen by the borrow-rate curves:
    /// `total_debt / (available_liquidity + total_debt)`, ray-scaled.
    pub fn borrow_utilization_rate(&self) -> U256 {
        utilization_rate(self.total_debt(), self.available_liquidity)
    }

    /// Utilization used by the liquidity-rate multiplier.
    ///
    /// Equals [`Self::borrow_utilization_rate`] unless an external
    /// `total_supply` is set, in which case it is
    /// `total_debt / total_supply`. A zero external supply degrades to
    /// zero utilization rather than dividing by zero.
    pub fn supply_utilization_rate(&self) -> U256 {
        let total_debt = self.total_debt();
        match self.total_supply {
            Some(total_supply) if !total_supply.is_zero() => {
                ray_div_down(total_debt, total_supply)
            }
            Some(_) => U256::ZERO,
            None => self.borrow_utilization_rate(),
        }
    }
}

/// The three rates returned by a rate calculation, all ray-scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResult {
    /// Rate earned by suppliers, after the reserve factor cut.
    pub liquidity_rate: U256,

    /// Rate offered on new stable-rate borrows.
    pub stable_borrow_rate: U256,

    /// Rate charged on variable-rate debt.
    pub variable_borrow_rate: U256,
}
