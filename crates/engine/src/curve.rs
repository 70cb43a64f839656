//! Two-slope interest-rate curve evaluation.
//!
//! Borrow rates follow a piecewise-linear curve of utilization with a
//! kink at the configured optimal point:
//!
//! ```text
//! If utilization <= optimal:
//!     contribution = slope1 * (utilization / optimal)
//! If utilization > optimal:
//!     excess = (utilization - optimal) / (1 - optimal)
//!     contribution = slope1 + slope2 * excess
//! ```
//!
//! Below the kink the rate climbs gradually toward `slope1`; past it the
//! excess-utilization term takes over, and `slope2` is typically an order
//! of magnitude larger to push utilization back down. The two branches
//! agree at the kink, so the curve is continuous.
//!
//! All arithmetic is truncating ray math; see [`crate::math`].
//!
//! # Example
//!
//! ```rust
//! use lendrates_engine::curve::curve_contribution;
//! use lendrates_engine::math::ray_from_bps;
//!
//! let optimal = ray_from_bps(8_000); // 80%
//! let slope1 = ray_from_bps(400);    // 4%
//! let slope2 = ray_from_bps(7_500);  // 75%
//!
//! // Exactly at the kink the contribution is slope1
//! assert_eq!(curve_contribution(optimal, optimal, slope1, slope2), slope1);
//! ```

use alloy_primitives::U256;

use crate::math::{ray_div_down, ray_mul_down, RAY};

/// Returns the borrow-side utilization rate as a ray fraction.
///
/// `total_debt / (available_liquidity + total_debt)`, or zero when
/// nothing is borrowed (the denominator would otherwise be zero for an
/// empty reserve).
pub fn utilization_rate(total_debt: U256, available_liquidity: U256) -> U256 {
    if total_debt.is_zero() {
        return U256::ZERO;
    }
    ray_div_down(total_debt, available_liquidity + total_debt)
}

/// Evaluates the two-slope curve at `utilization`.
///
/// Returns the rate contribution to add on top of the curve's baseline
/// (the base variable rate, or the reserve's average stable rate).
///
/// The caller guarantees `0 < optimal < RAY`; [`crate::RateStrategy`]
/// enforces this at construction.
pub fn curve_contribution(
    utilization: U256,
    optimal: U256,
    slope1: U256,
    slope2: U256,
) -> U256 {
    if utilization <= optimal {
        ray_mul_down(slope1, ray_div_down(utilization, optimal))
    } else {
        let excess = ray_div_down(utilization - optimal, RAY - optimal);
        slope1 + ray_mul_down(slope2, excess)
    }
}

/// Debt-weighted average borrow cost across both rate modes.
///
/// `(variable_rate * variable_debt + avg_stable_rate * stable_debt) /
/// total_debt`. Debt amounts are unscaled underlying units, so the
/// weighted quotient stays ray-scaled. Zero when nothing is borrowed.
pub fn overall_borrow_rate(
    total_stable_debt: U256,
    total_variable_debt: U256,
    variable_borrow_rate: U256,
    average_stable_borrow_rate: U256,
) -> U256 {
    let total_debt = total_stable_debt + total_variable_debt;
    if total_debt.is_zero() {
        return U256::ZERO;
    }

    let weighted_variable = variable_borrow_rate * total_variable_debt;
    let weighted_stable = average_stable_borrow_rate * total_stable_debt;

    (weighted_variable + weighted_stable) / total_debt
}
