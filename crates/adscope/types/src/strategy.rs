//! The terminal artifact: a ranked explanation with recommended actions.

use serde::{Deserialize, Serialize};

/// One concrete recommended action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// What to do.
    pub description: String,
    /// Expected effect of doing it.
    pub impact: String,
    /// What could go wrong.
    pub risk: String,
    /// Metric to watch.
    pub kpi: String,
}

impl Action {
    pub fn new(
        description: impl Into<String>,
        impact: impl Into<String>,
        risk: impl Into<String>,
        kpi: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            impact: impact.into(),
            risk: risk.into(),
            kpi: kpi.into(),
        }
    }
}

/// Final output of a diagnostic run.
///
/// Derived deterministically from the final hypothesis set and never
/// mutated afterward. Holds at most three actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionStrategy {
    /// Display name of the top-belief hypothesis.
    pub primary_hypothesis: String,

    /// Final belief in that hypothesis.
    pub confidence: f64,

    /// Recommended actions, strongest first.
    pub actions: Vec<Action>,

    /// Deterministic summary of how the conclusion was reached.
    pub reasoning: String,
}
