use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("meteogram"));
}

#[test]
fn get_rejects_inverted_date_range() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--start", "2024-05-10", "--end", "2024-05-01"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("after"));
}

#[test]
fn get_rejects_unknown_data_type() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--data-type", "sunshine"]);
    cmd.assert().failure();
}

#[test]
fn start_without_end_is_rejected() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--start", "2024-05-01"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--end"));
}

#[test]
fn explicit_range_conflicts_with_trailing_window() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args([
        "get",
        "--start",
        "2024-05-01",
        "--end",
        "2024-05-03",
        "--past-days",
        "2",
    ]);
    cmd.assert().failure();
}

#[test]
fn past_days_and_past_hours_conflict() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--past-days", "2", "--past-hours", "12"]);
    cmd.assert().failure();
}

#[test]
fn lat_requires_lon() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--lat", "60.17"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--lon"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_temperature() {
    let mut cmd = Command::cargo_bin("meteogram").unwrap();
    cmd.args(["get", "--city", "Helsinki", "--past-hours", "20", "--stats"]);
    cmd.assert().success();
}
