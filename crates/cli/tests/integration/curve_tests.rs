//! Curve command tests.

use predicates::prelude::*;

use super::helpers::{fixture_path, lendrates_cmd};

#[test]
fn test_curve_table_output() {
    lendrates_cmd()
        .args(["curve", "--strategy", "stable-two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Utilization"))
        .stdout(predicate::str::contains("Variable Borrow"))
        .stdout(predicate::str::contains("0.00%"))
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn test_curve_json_endpoints() {
    // With no reserve factor and all-variable debt, the liquidity rate
    // at 100% utilization equals the variable rate: 0.04 + 0.75 = 0.79
    lendrates_cmd()
        .args(["curve", "--steps", "10", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""utilization": "0""#))
        .stdout(predicate::str::contains(r#""utilization": "0.5""#))
        .stdout(predicate::str::contains(r#""utilization": "1""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.79""#))
        .stdout(predicate::str::contains(r#""liquidity_rate": "0.79""#));
}

#[test]
fn test_curve_includes_kink_value() {
    // 20 steps sample utilization at exactly 80%, where stable-two's
    // variable contribution is slope1
    lendrates_cmd()
        .args(["curve", "--steps", "20", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""utilization": "0.8""#))
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.04""#));
}

#[test]
fn test_curve_with_params_file() {
    lendrates_cmd()
        .args([
            "curve",
            "--params-file",
            &fixture_path("custom_strategy"),
            "--steps",
            "4",
            "--format",
            "json",
        ])
        .assert()
        .success()
        // Base rate shows at zero utilization
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "0.01""#))
        // Fully borrowed: 0.01 + 0.02 + 1.0
        .stdout(predicate::str::contains(r#""variable_borrow_rate": "1.03""#));
}

#[test]
fn test_curve_rejects_zero_steps() {
    lendrates_cmd()
        .args(["curve", "--steps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps must be between"));
}

#[test]
fn test_curve_rejects_excessive_steps() {
    lendrates_cmd()
        .args(["curve", "--steps", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps must be between"));
}
