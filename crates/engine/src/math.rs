//! Fixed-point ray arithmetic.
//!
//! Rates and ratios are carried as unsigned integers scaled by 10^27
//! (a "ray"). Every scaled multiplication and division truncates toward
//! zero; reproducing the reference rate tables bit-for-bit depends on
//! exactly this rounding rule, so there are no half-up variants here.
//!
//! Reserve factors use a separate basis-point scale (10^4) with the same
//! truncating rule.
//!
//! # Example
//!
//! ```rust
//! use lendrates_engine::math::{ray_mul_down, ray_from_bps, RAY};
//!
//! let half = ray_from_bps(5_000);
//! assert_eq!(ray_mul_down(RAY, half), half);
//! ```

use alloy_primitives::U256;

use crate::error::RateModelError;

/// One ray: 10^27, the fixed-point unit for rates and ratios.
pub const RAY: U256 = U256::from_limbs([11_515_845_246_265_065_472, 54_210_108, 0, 0]);

/// Basis-point scale (10^4) used for reserve factors.
pub const PERCENTAGE_FACTOR: U256 = U256::from_limbs([10_000, 0, 0, 0]);

/// Number of decimal digits in a ray.
pub const RAY_DECIMALS: usize = 27;

/// Ray multiplication, truncating: `a * b / RAY`.
pub fn ray_mul_down(a: U256, b: U256) -> U256 {
    a * b / RAY
}

/// Ray division, truncating: `a * RAY / b`.
///
/// The caller guarantees `b != 0`; every call site in this crate is
/// guarded by a zero-debt branch or construction-time validation.
pub fn ray_div_down(a: U256, b: U256) -> U256 {
    a * RAY / b
}

/// Basis-point multiplication, truncating: `value * bps / 10_000`.
pub fn percent_mul_down(value: U256, bps: U256) -> U256 {
    value * bps / PERCENTAGE_FACTOR
}

/// Subtraction floored at zero.
pub fn zero_floor_sub(a: U256, b: U256) -> U256 {
    a.saturating_sub(b)
}

/// Converts a basis-point amount to a ray fraction.
///
/// `ray_from_bps(10_000)` is exactly [`RAY`]; the conversion is exact
/// because RAY is divisible by the percentage factor.
pub fn ray_from_bps(bps: u64) -> U256 {
    RAY / PERCENTAGE_FACTOR * U256::from(bps)
}

/// Converts a ray value to `f64` for display purposes only.
///
/// Values beyond `u128::MAX` saturate; rates in practice are a few ray
/// at most, so the lossy conversion never matters outside formatting.
pub fn ray_to_f64(value: U256) -> f64 {
    value.saturating_to::<u128>() as f64 / 1e27
}

/// Parses a decimal string (e.g. `"0.039"`) into a ray value.
///
/// Accepts an optional fractional part of up to 27 digits. The parse is
/// exact: no floating point is involved.
///
/// # Example
///
/// ```rust
/// use lendrates_engine::math::{parse_ray, ray_from_bps};
///
/// assert_eq!(parse_ray("0.04").unwrap(), ray_from_bps(400));
/// assert_eq!(parse_ray("1").unwrap(), lendrates_engine::math::RAY);
/// ```
pub fn parse_ray(input: &str) -> Result<U256, RateModelError> {
    let invalid = || RateModelError::InvalidRayDecimal {
        input: input.to_string(),
    };

    let (int_part, frac_part) = match input.split_once('.') {
        Some((i, f)) => (i, f),
        None => (input, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if frac_part.len() > RAY_DECIMALS {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| invalid())?
    };

    let frac_value = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let digits = U256::from_str_radix(frac_part, 10).map_err(|_| invalid())?;
        let rescale = U256::from(10).pow(U256::from(RAY_DECIMALS - frac_part.len()));
        digits * rescale
    };

    int_value
        .checked_mul(RAY)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(invalid)
}

/// Formats a ray value as a decimal string with trailing zeros trimmed.
///
/// The inverse of [`parse_ray`] for all inputs that round-trip through
/// it: `format_ray(parse_ray(s)?)` returns `s` up to trailing zeros.
pub fn format_ray(value: U256) -> String {
    let int_part = value / RAY;
    let frac_part = value % RAY;

    if frac_part.is_zero() {
        return int_part.to_string();
    }

    let digits = frac_part.to_string();
    let mut frac = "0".repeat(RAY_DECIMALS - digits.len());
    frac.push_str(&digits);
    let trimmed = frac.trim_end_matches('0');

    format!("{int_part}.{trimmed}")
}
