//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command for the compiled binary.
pub fn lendrates_cmd() -> Command {
    Command::cargo_bin("lendrates").unwrap()
}

/// Absolute path to a JSON fixture under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}
