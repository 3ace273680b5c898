//! Fixture store: scenario-scoped JSON data for probes.

use std::path::{Path, PathBuf};

use adscope_types::{ProbeError, ProbeName};
use serde::de::DeserializeOwned;

/// Loads per-scenario JSON files from a fixtures directory.
///
/// Layout: `<root>/<scenario>/<file>.json`. Missing files surface as
/// [`ProbeError::Io`], malformed JSON as [`ProbeError::Parse`]; both are
/// converted into failed probe results at the engine boundary.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of one fixture file, without touching the filesystem.
    pub fn path_for(&self, scenario: &str, file: &str) -> PathBuf {
        self.root.join(scenario).join(file)
    }

    /// Load and deserialize one fixture file for a probe.
    pub fn load<T: DeserializeOwned>(
        &self,
        probe: ProbeName,
        scenario: &str,
        file: &str,
    ) -> Result<T, ProbeError> {
        let path = self.path_for(scenario, file);
        tracing::debug!(probe = %probe, path = %path.display(), "loading fixture");
        let contents =
            std::fs::read_to_string(&path).map_err(|source| ProbeError::Io { probe, source })?;
        serde_json::from_str(&contents).map_err(|err| ProbeError::Parse {
            probe,
            details: err.to_string(),
        })
    }
}
