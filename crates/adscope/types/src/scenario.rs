//! Scenario input - the business problem a diagnostic run starts from.

use serde::{Deserialize, Serialize};

/// Optimization goal the operator wants to pursue.
///
/// The goal seeds the initial belief distribution: hypotheses that
/// commonly explain problems for a given goal receive a small bonus
/// before any probe runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Impressions are too low; the listing is barely shown.
    IncreaseImpressions,
    /// Advertising cost of sales is too high.
    ReduceAcos,
    /// Clicks arrive but do not convert.
    ImproveConversion,
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Goal::IncreaseImpressions => write!(f, "increase_impressions"),
            Goal::ReduceAcos => write!(f, "reduce_acos"),
            Goal::ImproveConversion => write!(f, "improve_conversion"),
        }
    }
}

/// Input describing one diagnostic scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Product identifier under diagnosis.
    pub asin: String,

    /// What the operator is trying to improve.
    pub goal: Goal,

    /// Observation window in days.
    pub lookback_days: u32,

    /// Free-form operator notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Name of the fixture scenario backing this run.
    #[serde(default)]
    pub scenario_name: Option<String>,
}

impl ScenarioInput {
    /// The fixture directory name for this scenario, falling back to
    /// `"default"` when none was supplied.
    pub fn fixture_name(&self) -> &str {
        self.scenario_name.as_deref().unwrap_or("default")
    }
}
