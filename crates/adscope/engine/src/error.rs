//! Engine error types.

use thiserror::Error;

/// Errors raised by the belief engine itself.
///
/// Probe failures are not errors at this level: they are converted into
/// failed [`adscope_types::ProbeResult`] values at the invocation
/// boundary and the loop continues.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration values the engine cannot run with.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
