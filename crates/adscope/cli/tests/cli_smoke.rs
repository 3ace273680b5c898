//! CLI smoke tests against the bundled fixtures.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../../fixtures")
}

fn adscope() -> Command {
    Command::cargo_bin("adscope").unwrap()
}

#[test]
fn doctor_passes_on_bundled_fixtures() {
    let trace = tempfile::tempdir().unwrap();
    adscope()
        .args([
            "doctor",
            "--fixtures",
            fixtures(),
            "--trace-dir",
            trace.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("environment looks good"));
}

#[test]
fn diagnose_low_impressions_reports_low_bids() {
    let trace = tempfile::tempdir().unwrap();
    adscope()
        .args([
            "diagnose",
            "--scenario",
            "low_impressions",
            "--fixtures",
            fixtures(),
            "--trace-dir",
            trace.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bids too low"))
        .stdout(predicate::str::contains("Trace written to"));

    // Exactly one trace file per run.
    let traces: Vec<_> = std::fs::read_dir(trace.path()).unwrap().collect();
    assert_eq!(traces.len(), 1);
}

#[test]
fn diagnose_with_broken_competitor_still_succeeds() {
    let trace = tempfile::tempdir().unwrap();
    adscope()
        .args([
            "diagnose",
            "--scenario",
            "low_impressions",
            "--break-competitor",
            "--no-trace",
            "--fixtures",
            fixtures(),
            "--trace-dir",
            trace.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagnosis:"));
}

#[test]
fn diagnose_unknown_scenario_exits_nonzero() {
    let trace = tempfile::tempdir().unwrap();
    adscope()
        .args([
            "diagnose",
            "--scenario",
            "no_such_scenario",
            "--fixtures",
            fixtures(),
            "--trace-dir",
            trace.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load scenario"));
}

#[test]
fn battery_runs_all_bundled_scenarios() {
    let trace = tempfile::tempdir().unwrap();
    adscope()
        .args([
            "battery",
            "--fixtures",
            fixtures(),
            "--trace-dir",
            trace.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("battery complete: 3 scenarios ok"));

    let traces: Vec<_> = std::fs::read_dir(trace.path()).unwrap().collect();
    assert_eq!(traces.len(), 3);
}
