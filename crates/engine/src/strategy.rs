//! Reserve interest-rate strategy.
//!
//! A [`RateStrategy`] holds the six curve constants configured for one
//! reserve at listing time and converts reserve snapshots into the three
//! current rates. It is the only stateful-looking piece of the engine,
//! and even that state is immutable configuration: calculation itself is
//! a pure function of the snapshot, safe to share across threads.
//!
//! The pool calls [`RateStrategy::calculate_interest_rates`] once per
//! state-mutating reserve operation with the post-operation figures,
//! persists the returned rates, and accrues indices with them until the
//! next operation.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{Address, U256};
//! use lendrates_engine::math::ray_from_bps;
//! use lendrates_engine::{RateStrategy, RateStrategyParams, ReserveSnapshot};
//!
//! let strategy = RateStrategy::new(RateStrategyParams {
//!     optimal_utilization_rate: ray_from_bps(8_000),
//!     base_variable_borrow_rate: U256::ZERO,
//!     variable_rate_slope1: ray_from_bps(400),
//!     variable_rate_slope2: ray_from_bps(7_500),
//!     stable_rate_slope1: ray_from_bps(200),
//!     stable_rate_slope2: ray_from_bps(7_500),
//! })
//! .unwrap();
//!
//! // 800K borrowed against 200K idle: exactly at the 80% kink
//! let snapshot = ReserveSnapshot::new(
//!     U256::from(200_000u64),
//!     U256::ZERO,
//!     U256::from(800_000u64),
//!     ray_from_bps(390),
//!     U256::from(1_000u64),
//! );
//! let rates = strategy.calculate_interest_rates(Address::ZERO, &snapshot);
//! assert_eq!(rates.variable_borrow_rate, ray_from_bps(400));
//! ```

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::curve::{curve_contribution, overall_borrow_rate};
use crate::error::RateModelError;
use crate::math::{percent_mul_down, ray_mul_down, zero_floor_sub, PERCENTAGE_FACTOR, RAY};
use crate::reserve::{RateResult, ReserveSnapshot};

/// The six ray-scaled curve constants configured per reserve.
///
/// All values are non-negative by type; slopes of zero disable a curve
/// segment. The optimal utilization must lie strictly between 0 and one
/// ray, which [`RateStrategy::new`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateStrategyParams {
    /// Utilization at which the curves switch from slope1 to slope2.
    pub optimal_utilization_rate: U256,

    /// Variable rate charged at zero utilization.
    pub base_variable_borrow_rate: U256,

    /// Variable-curve slope below the optimal point.
    pub variable_rate_slope1: U256,

    /// Variable-curve slope above the optimal point.
    pub variable_rate_slope2: U256,

    /// Stable-curve slope below the optimal point, applied on top of the
    /// reserve's average stable rate.
    pub stable_rate_slope1: U256,

    /// Stable-curve slope above the optimal point.
    pub stable_rate_slope2: U256,
}

/// Validated interest-rate strategy for a single reserve.
///
/// Construction rejects configurations that would make a curve
/// denominator zero; after that every calculation is infallible.
/// Serialization round-trips through [`RateStrategyParams`] so a
/// deserialized strategy is re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateStrategyParams", into = "RateStrategyParams")]
pub struct RateStrategy {
    params: RateStrategyParams,
    excess_utilization_rate: U256,
}

impl TryFrom<RateStrategyParams> for RateStrategy {
    type Error = RateModelError;

    fn try_from(params: RateStrategyParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<RateStrategy> for RateStrategyParams {
    fn from(strategy: RateStrategy) -> Self {
        strategy.params
    }
}

impl RateStrategy {
    /// Validates the parameters and builds the strategy.
    ///
    /// # Errors
    ///
    /// [`RateModelError::InvalidOptimalUtilization`] when the optimal
    /// utilization is zero or at least one ray. Either bound would zero
    /// the denominator of a curve segment, so misconfiguration fails
    /// here instead of at call time.
    pub fn new(params: RateStrategyParams) -> Result<Self, RateModelError> {
        if params.optimal_utilization_rate.is_zero() || params.optimal_utilization_rate >= RAY {
            return Err(RateModelError::InvalidOptimalUtilization {
                value: params.optimal_utilization_rate,
            });
        }

        Ok(Self {
            excess_utilization_rate: RAY - params.optimal_utilization_rate,
            params,
        })
    }

    /// The configured optimal utilization rate.
    pub fn optimal_utilization_rate(&self) -> U256 {
        self.params.optimal_utilization_rate
    }

    /// `RAY - optimal`, the width of the excess-utilization segment.
    pub fn excess_utilization_rate(&self) -> U256 {
        self.excess_utilization_rate
    }

    /// The configured base variable borrow rate.
    pub fn base_variable_borrow_rate(&self) -> U256 {
        self.params.base_variable_borrow_rate
    }

    /// The configured variable-curve slope below the optimal point.
    pub fn variable_rate_slope1(&self) -> U256 {
        self.params.variable_rate_slope1
    }

    /// The configured variable-curve slope above the optimal point.
    pub fn variable_rate_slope2(&self) -> U256 {
        self.params.variable_rate_slope2
    }

    /// The configured stable-curve slope below the optimal point.
    pub fn stable_rate_slope1(&self) -> U256 {
        self.params.stable_rate_slope1
    }

    /// The configured stable-curve slope above the optimal point.
    pub fn stable_rate_slope2(&self) -> U256 {
        self.params.stable_rate_slope2
    }

    /// The full parameter set, bit-for-bit as configured.
    pub fn params(&self) -> &RateStrategyParams {
        &self.params
    }

    /// Computes the liquidity, stable, and variable rates for a reserve
    /// snapshot.
    ///
    /// Pure and deterministic: no side effects, no I/O, no call-time
    /// validation of snapshot values. `asset` identifies the reserve for
    /// interface parity with the pool's calling convention and does not
    /// affect the computation.
    ///
    /// # Rate Calculation
    ///
    /// 1. With zero debt the variable rate is the configured base, the
    ///    stable rate is the caller-supplied average baseline, and the
    ///    liquidity rate is zero (nothing borrowed, nothing accrues).
    /// 2. Otherwise both borrow curves are evaluated at the borrow-side
    ///    utilization (see [`crate::curve`]): the variable curve on top
    ///    of the configured base, the stable curve on top of the
    ///    snapshot's average stable rate.
    /// 3. The liquidity rate is the debt-weighted overall borrow rate,
    ///    scaled by the supply-side utilization and by
    ///    `1 - reserve_factor` in basis points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alloy_primitives::{Address, U256};
    /// use lendrates_engine::math::ray_from_bps;
    /// use lendrates_engine::{RateStrategy, ReserveSnapshot, StrategyPreset};
    ///
    /// let strategy = RateStrategy::new(StrategyPreset::StableTwo.params()).unwrap();
    ///
    /// // Fully borrowed reserve: base + slope1 + slope2
    /// let snapshot = ReserveSnapshot::new(
    ///     U256::ZERO,
    ///     U256::ZERO,
    ///     U256::from(1_000_000u64),
    ///     ray_from_bps(390),
    ///     U256::from(1_000u64),
    /// );
    /// let rates = strategy.calculate_interest_rates(Address::ZERO, &snapshot);
    /// assert_eq!(rates.variable_borrow_rate, ray_from_bps(7_900));
    /// ```
    pub fn calculate_interest_rates(
        &self,
        asset: Address,
        snapshot: &ReserveSnapshot,
    ) -> RateResult {
        let _ = asset;

        let total_debt = snapshot.total_debt();
        if total_debt.is_zero() {
            return RateResult {
                liquidity_rate: U256::ZERO,
                stable_borrow_rate: snapshot.average_stable_borrow_rate,
                variable_borrow_rate: self.params.base_variable_borrow_rate,
            };
        }

        let utilization = snapshot.borrow_utilization_rate();

        let variable_borrow_rate = self.params.base_variable_borrow_rate
            + curve_contribution(
                utilization,
                self.params.optimal_utilization_rate,
                self.params.variable_rate_slope1,
                self.params.variable_rate_slope2,
            );

        let stable_borrow_rate = snapshot.average_stable_borrow_rate
            + curve_contribution(
                utilization,
                self.params.optimal_utilization_rate,
                self.params.stable_rate_slope1,
                self.params.stable_rate_slope2,
            );

        let overall = overall_borrow_rate(
            snapshot.total_stable_debt,
            snapshot.total_variable_debt,
            variable_borrow_rate,
            snapshot.average_stable_borrow_rate,
        );

        let supplier_share = zero_floor_sub(PERCENTAGE_FACTOR, snapshot.reserve_factor);
        let liquidity_rate = percent_mul_down(
            ray_mul_down(overall, snapshot.supply_utilization_rate()),
            supplier_share,
        );

        RateResult {
            liquidity_rate,
            stable_borrow_rate,
            variable_borrow_rate,
        }
    }
}
