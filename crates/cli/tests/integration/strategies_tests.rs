//! Strategies command tests.

use predicates::prelude::*;

use super::helpers::lendrates_cmd;

#[test]
fn test_strategies_table_lists_all_presets() {
    lendrates_cmd()
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("stable-one"))
        .stdout(predicate::str::contains("stable-two"))
        .stdout(predicate::str::contains("volatile-one"))
        .stdout(predicate::str::contains("weth"))
        .stdout(predicate::str::contains("no-borrow"));
}

#[test]
fn test_strategies_table_shows_curve_constants() {
    lendrates_cmd()
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal U"))
        .stdout(predicate::str::contains("80.00%"))
        .stdout(predicate::str::contains("300.00%"));
}

#[test]
fn test_strategies_json_output() {
    lendrates_cmd()
        .args(["strategies", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "stable-two""#))
        .stdout(predicate::str::contains(r#""optimal_utilization_rate": "0.8""#))
        .stdout(predicate::str::contains(r#""variable_rate_slope2": "3""#));
}
