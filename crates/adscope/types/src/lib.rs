//! Adscope domain types.
//!
//! Shared vocabulary for the diagnostic loop: scenarios and goals,
//! hypotheses and their beliefs, probes and their results, scoring
//! rules, and the terminal action strategy. This crate carries no
//! policy - only data and small constructors.

#![deny(unsafe_code)]

mod context;
mod hypothesis;
mod probe;
mod rule;
mod scenario;
mod strategy;
mod trace;

pub use context::RunContext;
pub use hypothesis::{Hypothesis, HypothesisId};
pub use probe::{FeatureMap, FeatureValue, ProbeError, ProbeName, ProbeResult};
pub use rule::ScoringRule;
pub use scenario::{Goal, ScenarioInput};
pub use strategy::{Action, ActionStrategy};
pub use trace::{RunTrace, StepTrace};
