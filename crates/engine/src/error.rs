//! Error types for the rate engine.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised by strategy construction and ray parsing.
///
/// The rate calculation itself is infallible: misconfiguration is
/// rejected up front so that every per-call division has a nonzero
/// denominator.
#[derive(Debug, Error)]
pub enum RateModelError {
    /// Optimal utilization of 0 or >= RAY would zero a curve denominator
    #[error("Invalid optimal utilization rate {value}: must be greater than 0 and less than 1 ray")]
    InvalidOptimalUtilization { value: U256 },

    /// Input is not a decimal number representable in 27 fractional digits
    #[error("Invalid ray decimal {input:?}: expected a non-negative decimal with at most 27 fractional digits")]
    InvalidRayDecimal { input: String },

    /// Preset name does not match any known strategy
    #[error("Unknown strategy preset {name:?}")]
    UnknownPreset { name: String },
}
