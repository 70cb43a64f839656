//! Strategies command: list the built-in presets.

use anyhow::Result;
use lendrates_engine::StrategyPreset;

use crate::cli::OutputFormat;
use crate::output::{format_strategies_table, strategies_to_json};

pub fn run_strategies(format: OutputFormat) -> Result<()> {
    let presets = StrategyPreset::all();

    match format {
        OutputFormat::Table => {
            println!("{}", format_strategies_table(&presets));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&strategies_to_json(&presets))?;
            println!("{}", json);
        }
    }

    Ok(())
}
