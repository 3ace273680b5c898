//! Adscope hypothesis-belief engine.
//!
//! Drives the observe-think-act diagnostic cycle: rank competing
//! root-cause hypotheses, pick the probe most likely to resolve the
//! leaders, convert probe features into signed evidence, revise beliefs,
//! and stop once confidence or the step budget is exhausted.
//!
//! The engine is deliberately synchronous and single-threaded: one probe
//! executes at a time, and belief updates at step n depend on beliefs at
//! step n-1, so no phase is re-orderable. External collaborators plug in
//! at two seams: [`ProbeExecutor`] supplies probe execution and
//! [`DiagnosticObserver`] receives trace points.

#![deny(unsafe_code)]

mod actions;
mod belief;
mod config;
mod error;
mod fallback;
mod observer;
mod orchestrator;
mod registry;
mod scoring;
mod selection;
mod termination;

pub use actions::{actions_for, build_strategy, MAX_ACTIONS};
pub use belief::{apply_probe_features, update_belief, BeliefChange, BeliefUpdate};
pub use config::EngineConfig;
pub use error::EngineError;
pub use fallback::{fallback_for, FallbackAdvisory};
pub use observer::{DiagnosticObserver, NullObserver, TracingObserver};
pub use orchestrator::{DiagnosticLoop, ProbeExecutor, ProbeOutcome, RunReport};
pub use registry::{initialize_hypotheses, RuleGraph};
pub use scoring::score_feature;
pub use selection::{select_next_probe, ProbeSelection};
pub use termination::{should_terminate, TerminationReason};
