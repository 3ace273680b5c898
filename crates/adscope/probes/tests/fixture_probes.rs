//! Fixture-backed probe runs, end to end through the engine seam.

use std::path::PathBuf;

use adscope_engine::{DiagnosticLoop, NullObserver, ProbeExecutor};
use adscope_probes::{AdsMode, FixtureExecutor};
use adscope_types::{FeatureValue, Goal, ProbeError, ProbeName, ScenarioInput};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn scenario(name: &str, goal: Goal) -> ScenarioInput {
    ScenarioInput {
        asin: "B01EXAMPLE".into(),
        goal,
        lookback_days: 14,
        notes: None,
        scenario_name: Some(name.into()),
    }
}

#[test]
fn ads_metrics_features_for_low_impressions() {
    let executor = FixtureExecutor::new(fixtures_root());
    let outcome = executor
        .execute(
            ProbeName::AdsMetrics,
            &scenario("low_impressions", Goal::IncreaseImpressions),
        )
        .unwrap();

    let ratio = outcome.features["avg_cpc_ratio"].as_number().unwrap();
    // 10.5 spend / 30 clicks = 0.35 cpc against a 1.1 category average.
    assert!((ratio - 0.35 / 1.1).abs() < 1e-9);
    assert_eq!(outcome.features["keyword_count"], FeatureValue::Number(3.0));
    assert_eq!(
        outcome.features["total_impressions"],
        FeatureValue::Number(2500.0)
    );
}

#[test]
fn ads_metrics_campaign_mode_reads_campaign_fixture() {
    let executor = FixtureExecutor::new(fixtures_root()).with_mode(AdsMode::Campaign);
    let outcome = executor
        .execute(
            ProbeName::AdsMetrics,
            &scenario("low_impressions", Goal::IncreaseImpressions),
        )
        .unwrap();

    assert_eq!(outcome.features["campaign_count"], FeatureValue::Number(3.0));
    assert_eq!(
        outcome.features["active_campaign_count"],
        FeatureValue::Number(2.0)
    );
}

#[test]
fn inventory_probe_reads_fixture() {
    let executor = FixtureExecutor::new(fixtures_root());
    let outcome = executor
        .execute(
            ProbeName::Inventory,
            &scenario("high_acos", Goal::ReduceAcos),
        )
        .unwrap();
    assert_eq!(
        outcome.features["days_of_inventory"],
        FeatureValue::Number(36.0)
    );
    assert_eq!(
        outcome.features["stockout_risk"],
        FeatureValue::Text("low".into())
    );
}

#[test]
fn unknown_scenario_is_io_error() {
    let executor = FixtureExecutor::new(fixtures_root());
    let err = executor
        .execute(
            ProbeName::ListingAudit,
            &scenario("no_such_scenario", Goal::ImproveConversion),
        )
        .unwrap_err();
    assert!(matches!(err, ProbeError::Io { .. }));
}

#[test]
fn competitor_fault_injection_surfaces_timeout() {
    let executor = FixtureExecutor::new(fixtures_root()).with_competitor_fault(true);
    let err = executor
        .execute(
            ProbeName::Competitor,
            &scenario("low_impressions", Goal::IncreaseImpressions),
        )
        .unwrap_err();
    assert!(matches!(err, ProbeError::Timeout { .. }));
}

#[test]
fn low_impressions_run_diagnoses_low_bids() {
    let executor = FixtureExecutor::new(fixtures_root());
    let report = DiagnosticLoop::with_defaults().run(
        scenario("low_impressions", Goal::IncreaseImpressions),
        &executor,
        &mut NullObserver,
    );
    assert_eq!(report.strategy.primary_hypothesis, "Bids too low");
    assert!(report.strategy.confidence > 0.35);
}

#[test]
fn high_acos_run_diagnoses_broad_match_waste() {
    let executor = FixtureExecutor::new(fixtures_root());
    let report = DiagnosticLoop::with_defaults().run(
        scenario("high_acos", Goal::ReduceAcos),
        &executor,
        &mut NullObserver,
    );
    assert_eq!(report.strategy.primary_hypothesis, "Broad-match waste");
}

#[test]
fn low_conversion_run_diagnoses_listing_quality() {
    let executor = FixtureExecutor::new(fixtures_root());
    let report = DiagnosticLoop::with_defaults().run(
        scenario("high_click_low_conversion", Goal::ImproveConversion),
        &executor,
        &mut NullObserver,
    );
    assert_eq!(report.strategy.primary_hypothesis, "Listing quality");
}

#[test]
fn broken_competitor_still_completes_the_run() {
    let executor = FixtureExecutor::new(fixtures_root()).with_competitor_fault(true);
    let report = DiagnosticLoop::with_defaults().run(
        scenario("low_impressions", Goal::IncreaseImpressions),
        &executor,
        &mut NullObserver,
    );
    assert_eq!(report.strategy.primary_hypothesis, "Bids too low");

    let failed: Vec<_> = report
        .trace
        .steps
        .iter()
        .filter(|s| !s.result.ok)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].selected_probe, ProbeName::Competitor);
}
