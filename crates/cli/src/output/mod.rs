//! Output formatting for CLI results.

pub mod detail;
pub mod json;
pub mod table;

pub use detail::format_rates_detail;
pub use json::{curve_to_json, rates_to_json, strategies_to_json};
pub use table::{format_curve_table, format_strategies_table};
