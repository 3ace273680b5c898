//! Execution trace: the structured record a run leaves behind.
//!
//! Produced as a side effect of the loop and persisted by the CLI; the
//! core never reads it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ActionStrategy, Hypothesis, ProbeName, ProbeResult, ScenarioInput};

/// Record of one loop iteration that executed a probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTrace {
    /// 1-based step counter.
    pub step: u32,

    /// Probe chosen by the selection policy.
    pub selected_probe: ProbeName,

    /// Full probe outcome, success or failure.
    pub result: ProbeResult,

    /// Hypothesis snapshot after belief updates for this step.
    pub hypotheses: Vec<Hypothesis>,
}

/// Complete record of one diagnostic run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTrace {
    pub run_id: Uuid,
    pub scenario: ScenarioInput,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub steps: Vec<StepTrace>,
    pub final_strategy: ActionStrategy,
    pub total_steps: u32,
}
