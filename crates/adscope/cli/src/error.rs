//! CLI error types.

use std::path::PathBuf;

use adscope_engine::EngineError;
use thiserror::Error;

/// Errors surfaced to the operator; every one maps to exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario file could not be read.
    #[error("failed to load scenario from {path}: {source}")]
    ScenarioLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file was not valid JSON for a scenario.
    #[error("invalid scenario file: {0}")]
    ScenarioParse(#[from] serde_json::Error),

    /// Engine rejected its configuration.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Filesystem trouble outside scenario loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more battery scenarios failed.
    #[error("{failed} of {total} battery scenarios failed")]
    BatteryFailed { failed: usize, total: usize },

    /// Environment validation found problems.
    #[error("environment check failed: {0}")]
    Doctor(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
