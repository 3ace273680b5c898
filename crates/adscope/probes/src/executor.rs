//! Fixture-backed probe executor wired into the engine.

use std::path::PathBuf;

use adscope_engine::{ProbeExecutor, ProbeOutcome};
use adscope_types::{ProbeError, ProbeName, ScenarioInput};

use crate::store::FixtureStore;
use crate::{ads_metrics, competitor, inventory, listing_audit};

/// Which advertising dataset the ads-metrics probe analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdsMode {
    #[default]
    Keyword,
    Campaign,
}

impl std::fmt::Display for AdsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdsMode::Keyword => write!(f, "keyword"),
            AdsMode::Campaign => write!(f, "campaign"),
        }
    }
}

impl std::str::FromStr for AdsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(AdsMode::Keyword),
            "campaign" => Ok(AdsMode::Campaign),
            other => Err(format!("unknown ads mode '{other}' (expected keyword|campaign)")),
        }
    }
}

/// Dispatches probe invocations to the fixture-backed probe bodies.
///
/// Carries the ads analysis mode and the competitor fault-injection
/// switch used to exercise the engine's failure handling.
#[derive(Debug, Clone)]
pub struct FixtureExecutor {
    store: FixtureStore,
    mode: AdsMode,
    break_competitor: bool,
}

impl FixtureExecutor {
    pub fn new(fixtures_root: impl Into<PathBuf>) -> Self {
        Self {
            store: FixtureStore::new(fixtures_root),
            mode: AdsMode::default(),
            break_competitor: false,
        }
    }

    pub fn with_mode(mut self, mode: AdsMode) -> Self {
        self.mode = mode;
        self
    }

    /// Simulate a competitor-probe timeout on every invocation.
    pub fn with_competitor_fault(mut self, broken: bool) -> Self {
        self.break_competitor = broken;
        self
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }
}

impl ProbeExecutor for FixtureExecutor {
    fn execute(
        &self,
        probe: ProbeName,
        scenario: &ScenarioInput,
    ) -> Result<ProbeOutcome, ProbeError> {
        let name = scenario.fixture_name();
        match probe {
            ProbeName::AdsMetrics => ads_metrics::analyze(&self.store, name, self.mode),
            ProbeName::ListingAudit => listing_audit::analyze(&self.store, name),
            ProbeName::Competitor => competitor::analyze(&self.store, name, self.break_competitor),
            ProbeName::Inventory => inventory::analyze(&self.store, name),
        }
    }
}
