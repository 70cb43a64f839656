//! Reserve Interest-Rate Engine
//!
//! This crate implements the interest-rate strategy used by a pooled
//! lending protocol: the model that converts a reserve's utilization
//! (the fraction of supplied liquidity currently borrowed) into
//! liquidity, variable-borrow, and stable-borrow rates.
//!
//! # Overview
//!
//! - Rates follow a two-slope piecewise-linear curve of utilization with
//!   a kink at a configured optimal point ([`curve`])
//! - All rate math is fixed-point ray arithmetic (10^27) with
//!   round-toward-zero on every scaled operation, for bit-exact
//!   reproducibility ([`math`])
//! - A [`RateStrategy`] holds the six curve constants for one reserve,
//!   validated at construction; calculation is a pure function of a
//!   [`ReserveSnapshot`] with no side effects or I/O
//! - The supplier-side rate splits borrower interest by the reserve
//!   factor and may use a supply-side utilization that diverges from the
//!   borrow-side one when externally minted principal exists
//! - [`StrategyPreset`] carries the shared curve shapes reserves are
//!   listed with ([`presets`])
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{Address, U256};
//! use lendrates_engine::math::{ray_from_bps, ray_to_f64};
//! use lendrates_engine::{RateStrategy, ReserveSnapshot, StrategyPreset};
//!
//! let strategy = RateStrategy::new(StrategyPreset::StableTwo.params()).unwrap();
//!
//! let snapshot = ReserveSnapshot::new(
//!     U256::from(200_000u64), // available liquidity
//!     U256::ZERO,             // stable debt
//!     U256::from(800_000u64), // variable debt
//!     ray_from_bps(390),      // average stable borrow rate
//!     U256::from(1_000u64),   // reserve factor, bps
//! );
//!
//! let rates = strategy.calculate_interest_rates(Address::ZERO, &snapshot);
//! assert!((ray_to_f64(rates.liquidity_rate) - 0.0288).abs() < 1e-12);
//! ```

pub mod curve;
pub mod error;
pub mod math;
pub mod presets;
pub mod reserve;
pub mod strategy;

// Re-export commonly used types
pub use error::RateModelError;

// Math exports
pub use math::{PERCENTAGE_FACTOR, RAY};

// Curve exports
pub use curve::{curve_contribution, overall_borrow_rate, utilization_rate};

// Reserve exports
pub use reserve::{RateResult, ReserveSnapshot};

// Strategy exports
pub use strategy::{RateStrategy, RateStrategyParams};

// Preset exports
pub use presets::StrategyPreset;
