//! Termination policy: when the loop has learned enough.

use std::collections::HashSet;

use adscope_types::{ProbeName, RunContext};

use crate::config::EngineConfig;
use crate::registry::RuleGraph;

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminationReason {
    /// The top hypothesis cleared the unconditional confidence bar.
    HighConfidence { hypothesis: String, belief: f64 },

    /// The top hypothesis cleared the medium bar and every probe
    /// relevant to it has executed successfully.
    ConfidentWithCoverage { hypothesis: String, belief: f64 },

    /// The hard step cap was reached without a confident conclusion.
    StepLimit { step: u32 },
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::HighConfidence { hypothesis, belief } => {
                write!(f, "high confidence in '{hypothesis}' (belief {belief:.2})")
            }
            TerminationReason::ConfidentWithCoverage { hypothesis, belief } => write!(
                f,
                "confident in '{hypothesis}' (belief {belief:.2}) with full probe coverage"
            ),
            TerminationReason::StepLimit { step } => {
                write!(f, "step limit reached at step {step}")
            }
        }
    }
}

/// Decide whether the loop should stop.
///
/// Two-tier variant: an unconditional high bar, a medium bar gated on
/// the top hypothesis having full successful probe coverage, and the
/// hard step cap. Nothing terminates before the minimum exploration
/// floor.
pub fn should_terminate(
    ctx: &RunContext,
    graph: &RuleGraph,
    config: &EngineConfig,
) -> Option<TerminationReason> {
    if ctx.step < config.min_steps {
        return None;
    }

    if let Some(top) = ctx.top_hypothesis() {
        if top.belief >= config.confidence_high {
            return Some(TerminationReason::HighConfidence {
                hypothesis: top.name.clone(),
                belief: top.belief,
            });
        }

        if top.belief >= config.confidence_medium {
            let executed: HashSet<ProbeName> = ctx
                .probe_results
                .iter()
                .filter(|r| r.ok)
                .map(|r| r.probe)
                .collect();
            let covered = graph
                .probes_for(top.id)
                .iter()
                .all(|p| executed.contains(p));
            if covered {
                return Some(TerminationReason::ConfidentWithCoverage {
                    hypothesis: top.name.clone(),
                    belief: top.belief,
                });
            }
        }
    }

    if ctx.step >= config.max_steps {
        return Some(TerminationReason::StepLimit { step: ctx.step });
    }

    None
}
