//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and
//! provides helpful error messages.

use predicates::prelude::*;

use super::helpers::lendrates_cmd;

#[test]
fn test_help_output() {
    lendrates_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lendrates"))
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("curve"))
        .stdout(predicate::str::contains("strategies"));
}

#[test]
fn test_calc_help_output() {
    lendrates_cmd()
        .args(["calc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--available"))
        .stdout(predicate::str::contains("--variable-debt"))
        .stdout(predicate::str::contains("--reserve-factor"));
}

#[test]
fn test_invalid_command() {
    lendrates_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_unknown_strategy_preset() {
    lendrates_cmd()
        .args(["calc", "--strategy", "stable-nine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown strategy preset"));
}

#[test]
fn test_invalid_ray_decimal() {
    lendrates_cmd()
        .args(["calc", "--avg-stable-rate", "four-percent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ray decimal"));
}

#[test]
fn test_negative_amount_rejected() {
    lendrates_cmd()
        .args(["calc", "--available", "-5"])
        .assert()
        .failure();
}

#[test]
fn test_params_file_conflicts_with_strategy() {
    lendrates_cmd()
        .args([
            "calc",
            "--strategy",
            "weth",
            "--params-file",
            "params.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_invalid_asset_address() {
    lendrates_cmd()
        .args(["calc", "--asset", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
