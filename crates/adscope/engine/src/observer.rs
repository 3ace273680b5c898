//! Observer seam: trace points the orchestrator reports through.
//!
//! Replaces any global console state with an injectable sink. Hooks
//! default to no-ops so observers implement only what they care about.

use adscope_types::{ActionStrategy, Hypothesis, ProbeResult, RunContext};

use crate::belief::BeliefChange;
use crate::fallback::FallbackAdvisory;
use crate::selection::ProbeSelection;
use crate::termination::TerminationReason;

/// Receiver for the orchestrator's trace points.
pub trait DiagnosticObserver {
    /// A loop iteration began; the context reflects state before any
    /// work this step.
    fn on_step_started(&mut self, _step: u32, _ctx: &RunContext) {}

    /// Current hypothesis set, pre-update, in registry order.
    fn on_hypotheses_ranked(&mut self, _hypotheses: &[Hypothesis]) {}

    /// The selection policy picked a probe.
    fn on_probe_selected(&mut self, _selection: &ProbeSelection) {}

    /// A probe finished, successfully or not.
    fn on_probe_result(&mut self, _result: &ProbeResult) {}

    /// Belief revisions applied from a successful probe.
    fn on_beliefs_updated(&mut self, _changes: &[BeliefChange]) {}

    /// A probe failed; advisory is reporting-only guidance.
    fn on_probe_fallback(&mut self, _result: &ProbeResult, _advisory: &FallbackAdvisory) {}

    /// The termination policy stopped the loop.
    fn on_terminated(&mut self, _reason: &TerminationReason) {}

    /// Selection found no further useful probe.
    fn on_probes_exhausted(&mut self) {}

    /// The final strategy was assembled.
    fn on_strategy_ready(&mut self, _strategy: &ActionStrategy) {}
}

/// Observer that ignores everything. Useful in tests.
#[derive(Debug, Default)]
pub struct NullObserver;

impl DiagnosticObserver for NullObserver {}

/// Observer that emits each trace point as a structured tracing event.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl DiagnosticObserver for TracingObserver {
    fn on_step_started(&mut self, step: u32, ctx: &RunContext) {
        tracing::info!(
            step,
            asin = %ctx.scenario.asin,
            goal = %ctx.scenario.goal,
            probes_run = ctx.probe_results.len(),
            "observe"
        );
    }

    fn on_hypotheses_ranked(&mut self, hypotheses: &[Hypothesis]) {
        let mut ranked: Vec<_> = hypotheses.iter().collect();
        ranked.sort_by(|a, b| b.belief.total_cmp(&a.belief));
        for h in ranked {
            tracing::debug!(
                hypothesis = %h.id,
                belief = format_args!("{:.2}", h.belief),
                delta = format_args!("{:+.2}", h.last_delta()),
                "belief state"
            );
        }
    }

    fn on_probe_selected(&mut self, selection: &ProbeSelection) {
        tracing::info!(probe = %selection.probe, rationale = %selection.rationale, "act");
    }

    fn on_probe_result(&mut self, result: &ProbeResult) {
        if result.ok {
            tracing::info!(
                probe = %result.probe,
                latency_ms = result.latency_ms,
                features = result.features.len(),
                "probe succeeded"
            );
        } else {
            tracing::warn!(
                probe = %result.probe,
                latency_ms = result.latency_ms,
                error = result.error.as_deref().unwrap_or("unknown"),
                "probe failed"
            );
        }
    }

    fn on_beliefs_updated(&mut self, changes: &[BeliefChange]) {
        for change in changes {
            tracing::info!(
                hypothesis = %change.hypothesis,
                old = format_args!("{:.2}", change.old_belief),
                new = format_args!("{:.2}", change.new_belief),
                evidence = %change.evidence.join("; "),
                "belief updated"
            );
        }
    }

    fn on_probe_fallback(&mut self, result: &ProbeResult, advisory: &FallbackAdvisory) {
        tracing::warn!(
            probe = %result.probe,
            advisory = %advisory.message,
            "falling back"
        );
    }

    fn on_terminated(&mut self, reason: &TerminationReason) {
        tracing::info!(reason = %reason, "terminating");
    }

    fn on_probes_exhausted(&mut self) {
        tracing::info!("no more useful probes; terminating");
    }

    fn on_strategy_ready(&mut self, strategy: &ActionStrategy) {
        tracing::info!(
            primary = %strategy.primary_hypothesis,
            confidence = format_args!("{:.1}%", strategy.confidence * 100.0),
            actions = strategy.actions.len(),
            "strategy ready"
        );
    }
}
