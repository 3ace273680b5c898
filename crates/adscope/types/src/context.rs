//! Mutable state threaded through one diagnostic run.

use serde::{Deserialize, Serialize};

use crate::{Hypothesis, ProbeName, ProbeResult, ScenarioInput};

/// Everything the loop knows mid-run.
///
/// The hypothesis list is revised in place by the belief updater and read
/// by the selection and termination policies, so the per-step phase order
/// (observe, terminate-check, select, execute, update) must be preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunContext {
    pub scenario: ScenarioInput,

    /// 1-based loop iteration counter; 0 before the first iteration.
    pub step: u32,

    /// Every probe invocation so far, successes and failures, in
    /// issuance order.
    pub probe_results: Vec<ProbeResult>,

    pub hypotheses: Vec<Hypothesis>,

    /// Probe executed most recently, if any.
    #[serde(default)]
    pub last_probe: Option<ProbeName>,

    /// Belief delta of the top hypothesis between the two most recent
    /// successful probe executions. Used to suppress re-selecting an
    /// unproductive probe.
    #[serde(default)]
    pub last_gain: f64,
}

impl RunContext {
    /// Fresh context at step zero.
    pub fn new(scenario: ScenarioInput, hypotheses: Vec<Hypothesis>) -> Self {
        Self {
            scenario,
            step: 0,
            probe_results: Vec::new(),
            hypotheses,
            last_probe: None,
            last_gain: 0.0,
        }
    }

    /// Highest belief across all hypotheses, or zero when none exist.
    pub fn max_belief(&self) -> f64 {
        self.hypotheses
            .iter()
            .map(|h| h.belief)
            .fold(0.0_f64, f64::max)
    }

    /// First hypothesis holding the maximum belief; ties resolve to
    /// registry declaration order.
    pub fn top_hypothesis(&self) -> Option<&Hypothesis> {
        let mut top: Option<&Hypothesis> = None;
        for hypothesis in &self.hypotheses {
            match top {
                Some(current) if hypothesis.belief <= current.belief => {}
                _ => top = Some(hypothesis),
            }
        }
        top
    }
}
