//! Probe selection: greedy best-first with a low-gain repeat guard.

use std::collections::HashSet;

use adscope_types::{ProbeName, RunContext};

use crate::config::EngineConfig;
use crate::registry::RuleGraph;

/// A chosen probe plus the justification trace for observability.
#[derive(Debug, Clone)]
pub struct ProbeSelection {
    pub probe: ProbeName,
    pub rationale: String,
}

/// Pick the next probe to run, or `None` when no useful probe remains.
///
/// Hypotheses are ranked by belief (descending, stable so ties keep
/// registry order) and their probes scanned in rule-graph order. Probes
/// that already ran - successfully or not - are skipped; failed probes
/// are never retried. A probe equal to the previous one is additionally
/// skipped while the last top-belief gain sits under the configured
/// epsilon and at least one probe has already succeeded, so an
/// unproductive probe cannot be hammered. `None` means "no more useful
/// probes", not an error.
pub fn select_next_probe(
    ctx: &RunContext,
    graph: &RuleGraph,
    config: &EngineConfig,
) -> Option<ProbeSelection> {
    let mut executed: HashSet<ProbeName> = HashSet::new();
    let mut failed: HashSet<ProbeName> = HashSet::new();
    for result in &ctx.probe_results {
        if result.ok {
            executed.insert(result.probe);
        } else {
            failed.insert(result.probe);
        }
    }

    let mut ranked: Vec<_> = ctx.hypotheses.iter().collect();
    ranked.sort_by(|a, b| b.belief.total_cmp(&a.belief));

    for hypothesis in ranked {
        for probe in graph.probes_for(hypothesis.id) {
            if executed.contains(&probe) || failed.contains(&probe) {
                continue;
            }
            if ctx.last_probe == Some(probe)
                && ctx.last_gain < config.gain_epsilon
                && !executed.is_empty()
            {
                continue;
            }
            return Some(ProbeSelection {
                probe,
                rationale: format!(
                    "probing {} to test leading hypothesis '{}' (belief {:.2})",
                    probe, hypothesis.name, hypothesis.belief
                ),
            });
        }
    }

    None
}
