//! Loop orchestrator: drives the observe-think-act cycle.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use adscope_types::{
    ActionStrategy, FeatureMap, ProbeError, ProbeName, ProbeResult, RunContext, RunTrace,
    ScenarioInput, StepTrace,
};

use crate::actions::build_strategy;
use crate::belief::apply_probe_features;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::fallback::fallback_for;
use crate::observer::DiagnosticObserver;
use crate::registry::{initialize_hypotheses, RuleGraph};
use crate::selection::select_next_probe;
use crate::termination::should_terminate;

/// What a probe hands back on success.
#[derive(Debug, Clone, Default)]
pub struct ProbeOutcome {
    /// Presentational detail for operators.
    pub data: BTreeMap<String, serde_json::Value>,
    /// Measurements the belief engine consumes.
    pub features: FeatureMap,
}

/// External collaborator that runs probes.
///
/// Implementations may raise any [`ProbeError`]; the orchestrator
/// catches every error at this boundary and converts it into a failed
/// [`ProbeResult`]. The engine itself never propagates probe errors.
pub trait ProbeExecutor {
    fn execute(
        &self,
        probe: ProbeName,
        scenario: &ScenarioInput,
    ) -> Result<ProbeOutcome, ProbeError>;
}

/// Final output of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub strategy: ActionStrategy,
    pub trace: RunTrace,
    pub total_steps: u32,
}

/// The diagnostic loop.
///
/// Synchronous and single-threaded: one probe at a time, and the
/// per-step phase order (observe, terminate-check, select, execute,
/// update) is fixed because selection and termination read the same
/// hypothesis list the updater mutates.
#[derive(Debug, Clone)]
pub struct DiagnosticLoop {
    config: EngineConfig,
    graph: RuleGraph,
}

impl DiagnosticLoop {
    /// Build a loop with a validated configuration.
    pub fn new(config: EngineConfig, graph: RuleGraph) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config, graph })
    }

    /// Default configuration over the standard rule graph.
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            graph: RuleGraph::standard(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full diagnostic cycle for a scenario.
    ///
    /// Always produces a strategy: probe failures contribute no evidence
    /// but never abort the run, and the step cap bounds the loop.
    pub fn run(
        &self,
        scenario: ScenarioInput,
        executor: &dyn ProbeExecutor,
        observer: &mut dyn DiagnosticObserver,
    ) -> RunReport {
        let started_at = Utc::now();
        let mut ctx = RunContext::new(
            scenario.clone(),
            initialize_hypotheses(scenario.goal, &self.config),
        );
        let mut steps: Vec<StepTrace> = Vec::new();

        while ctx.step < self.config.max_steps {
            ctx.step += 1;

            // OBSERVE
            observer.on_step_started(ctx.step, &ctx);
            observer.on_hypotheses_ranked(&ctx.hypotheses);

            // THINK
            if let Some(reason) = should_terminate(&ctx, &self.graph, &self.config) {
                observer.on_terminated(&reason);
                break;
            }

            // ACT
            let Some(selection) = select_next_probe(&ctx, &self.graph, &self.config) else {
                observer.on_probes_exhausted();
                break;
            };
            observer.on_probe_selected(&selection);

            let result = self.invoke_probe(executor, selection.probe, &ctx.scenario);
            observer.on_probe_result(&result);

            if result.ok {
                let changes = apply_probe_features(
                    &mut ctx.hypotheses,
                    selection.probe,
                    &result.features,
                    &self.graph,
                    &self.config,
                );
                observer.on_beliefs_updated(&changes);
            } else {
                let advisory = fallback_for(selection.probe);
                observer.on_probe_fallback(&result, &advisory);
            }

            ctx.probe_results.push(result.clone());
            ctx.last_probe = Some(selection.probe);
            if result.ok && ctx.probe_results.len() >= 2 {
                ctx.last_gain = top_belief_gain(&ctx);
            }

            steps.push(StepTrace {
                step: ctx.step,
                selected_probe: selection.probe,
                result,
                hypotheses: ctx.hypotheses.clone(),
            });
        }

        let strategy = build_strategy(&ctx);
        observer.on_strategy_ready(&strategy);

        let trace = RunTrace {
            run_id: Uuid::new_v4(),
            scenario,
            started_at,
            ended_at: Utc::now(),
            steps,
            final_strategy: strategy.clone(),
            total_steps: ctx.step,
        };

        RunReport {
            strategy,
            trace,
            total_steps: ctx.step,
        }
    }

    /// Invoke a probe, measuring latency and converting any raised error
    /// into a failed result at this boundary.
    fn invoke_probe(
        &self,
        executor: &dyn ProbeExecutor,
        probe: ProbeName,
        scenario: &ScenarioInput,
    ) -> ProbeResult {
        let start = Instant::now();
        match executor.execute(probe, scenario) {
            Ok(outcome) => ProbeResult::success(
                probe,
                outcome.data,
                outcome.features,
                start.elapsed().as_millis() as u64,
            ),
            Err(err) => {
                ProbeResult::failure(probe, err.to_string(), start.elapsed().as_millis() as u64)
            }
        }
    }
}

/// Delta of the maximum belief across the most recent update, using the
/// `previous_belief` markers left by the updater.
fn top_belief_gain(ctx: &RunContext) -> f64 {
    let current_max = ctx
        .hypotheses
        .iter()
        .map(|h| h.belief)
        .fold(0.0_f64, f64::max);
    let previous_max = ctx
        .hypotheses
        .iter()
        .map(|h| h.previous_belief.unwrap_or(h.belief))
        .fold(0.0_f64, f64::max);
    current_max - previous_max
}
