//! Calc command tests against the reference curve scenarios.

use predicates::prelude::*;

use super::helpers::{fixture_path, lendrates_cmd};

#[test]
fn test_calc_empty_reserve() {
    // No debt: liquidity rate 0, variable rate equals the (zero) base,
    // stable rate passes the baseline through
    lendrates_cmd()
        .args([
            "calc",
            "--avg-stable-rate",
            "0.039",
            "--reserve-factor",
            "1000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""liquidity_rate": "0""#))
        .stdout(predicate::str::contains(r#""stable_borrow_rate": "0.039""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0""#));
}

#[test]
fn test_calc_at_optimal_utilization() {
    // 800K variable debt against 200K idle: exactly at stable-two's kink
    lendrates_cmd()
        .args([
            "calc",
            "--strategy",
            "stable-two",
            "--available",
            "200000",
            "--variable-debt",
            "800000",
            "--avg-stable-rate",
            "0.039",
            "--reserve-factor",
            "1000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""liquidity_rate": "0.0288""#))
        .stdout(predicate::str::contains(r#""stable_borrow_rate": "0.059""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.04""#));
}

#[test]
fn test_calc_at_full_utilization() {
    lendrates_cmd()
        .args([
            "calc",
            "--variable-debt",
            "1000000",
            "--avg-stable-rate",
            "0.039",
            "--reserve-factor",
            "1000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""liquidity_rate": "0.711""#))
        .stdout(predicate::str::contains(r#""stable_borrow_rate": "0.809""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.79""#));
}

#[test]
fn test_calc_supply_utilization_divergence() {
    // Borrow-side utilization 80%, supply-side 0.8%: borrow rates match
    // the kink scenario but the liquidity rate shrinks 100x
    lendrates_cmd()
        .args([
            "calc",
            "--available",
            "200000",
            "--variable-debt",
            "800000",
            "--total-supply",
            "100000000",
            "--avg-stable-rate",
            "0.039",
            "--reserve-factor",
            "1000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""liquidity_rate": "0.000288""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.04""#));
}

#[test]
fn test_calc_table_output() {
    lendrates_cmd()
        .args([
            "calc",
            "--available",
            "200000",
            "--variable-debt",
            "800000",
            "--reserve-factor",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reserve Snapshot"))
        .stdout(predicate::str::contains("Borrow Utilization:  80.0000%"))
        .stdout(predicate::str::contains("Liquidity Rate"))
        .stdout(predicate::str::contains("Variable Borrow Rate"));
}

#[test]
fn test_calc_with_params_file() {
    // Custom curve: optimal 50%, base 1%, slopes 2%/100%. Fully borrowed
    // puts the variable rate at 0.01 + 0.02 + 1.0 = 1.03
    lendrates_cmd()
        .args([
            "calc",
            "--params-file",
            &fixture_path("custom_strategy"),
            "--variable-debt",
            "1000000",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "1.03""#))
        .stdout(predicate::str::contains(r#""stable_borrow_rate": "1.01""#));
}

#[test]
fn test_calc_rejects_invalid_params_file() {
    lendrates_cmd()
        .args([
            "calc",
            "--params-file",
            &fixture_path("bad_strategy"),
            "--variable-debt",
            "1000000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid optimal utilization"));
}

#[test]
fn test_calc_missing_params_file() {
    lendrates_cmd()
        .args(["calc", "--params-file", "/nonexistent/params.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read params file"));
}
