//! Probes: named diagnostic tools, their results, and their failures.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named diagnostic probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeName {
    /// Keyword and campaign advertising metrics.
    AdsMetrics,
    /// Product page quality audit.
    ListingAudit,
    /// Competitive landscape analysis.
    Competitor,
    /// Inventory level and restock status.
    Inventory,
}

impl std::fmt::Display for ProbeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProbeName::AdsMetrics => "AdsMetrics",
            ProbeName::ListingAudit => "ListingAudit",
            ProbeName::Competitor => "Competitor",
            ProbeName::Inventory => "Inventory",
        };
        write!(f, "{s}")
    }
}

/// A single measurement produced by a probe.
///
/// Features are either numeric, categorical text, or boolean flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FeatureValue {
    /// Numeric view of this feature, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual label for categorical matching.
    pub fn as_label(&self) -> Cow<'_, str> {
        match self {
            FeatureValue::Text(s) => Cow::Borrowed(s),
            FeatureValue::Number(n) => Cow::Owned(format!("{n}")),
            FeatureValue::Flag(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(n: f64) -> Self {
        FeatureValue::Number(n)
    }
}

impl From<u64> for FeatureValue {
    fn from(n: u64) -> Self {
        FeatureValue::Number(n as f64)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s.to_string())
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Flag(b)
    }
}

/// Ordered feature map; ordering keeps serialized traces deterministic.
pub type FeatureMap = BTreeMap<String, FeatureValue>;

/// Outcome of one probe invocation.
///
/// The belief engine consumes only `ok` and `features`; `data` is
/// presentational detail for operators. A failed probe carries an empty
/// feature map and contributes no evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub probe: ProbeName,
    pub ok: bool,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    pub latency_ms: u64,
    #[serde(default)]
    pub features: FeatureMap,
}

impl ProbeResult {
    /// Successful invocation with presentational data and features.
    pub fn success(
        probe: ProbeName,
        data: BTreeMap<String, serde_json::Value>,
        features: FeatureMap,
        latency_ms: u64,
    ) -> Self {
        Self {
            probe,
            ok: true,
            data,
            error: None,
            latency_ms,
            features,
        }
    }

    /// Failed invocation; carries the error message and no features.
    pub fn failure(probe: ProbeName, error: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            probe,
            ok: false,
            data: BTreeMap::new(),
            error: Some(error.into()),
            latency_ms,
            features: FeatureMap::new(),
        }
    }
}

/// Errors a probe body may raise.
///
/// These never cross the engine boundary: the orchestrator converts any
/// of them into a `ProbeResult { ok: false, .. }` at the invocation site.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A required field was absent from the probe's input data.
    #[error("probe {probe} is missing required field '{field}'")]
    DataMissing { probe: ProbeName, field: String },

    /// Input data existed but could not be parsed.
    #[error("probe {probe} failed to parse input data: {details}")]
    Parse { probe: ProbeName, details: String },

    /// The probe exceeded its time budget (injected or real).
    #[error("probe {probe} timed out after {timeout_secs}s")]
    Timeout { probe: ProbeName, timeout_secs: u64 },

    /// Backing data could not be read.
    #[error("probe {probe} could not read data: {source}")]
    Io {
        probe: ProbeName,
        #[source]
        source: std::io::Error,
    },

    /// Unclassified execution failure.
    #[error("probe {probe} failed: {message}")]
    Failed { probe: ProbeName, message: String },
}

impl ProbeError {
    /// The probe this error originated from.
    pub fn probe(&self) -> ProbeName {
        match self {
            ProbeError::DataMissing { probe, .. }
            | ProbeError::Parse { probe, .. }
            | ProbeError::Timeout { probe, .. }
            | ProbeError::Io { probe, .. }
            | ProbeError::Failed { probe, .. } => *probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_value_deserializes_untagged() {
        let v: FeatureValue = serde_json::from_str("0.42").unwrap();
        assert_eq!(v.as_number(), Some(0.42));

        let v: FeatureValue = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(v.as_label(), "high");

        let v: FeatureValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, FeatureValue::Flag(true));
    }

    #[test]
    fn integer_json_becomes_number() {
        let v: FeatureValue = serde_json::from_str("7").unwrap();
        assert_eq!(v.as_number(), Some(7.0));
    }

    #[test]
    fn failure_has_no_features() {
        let r = ProbeResult::failure(ProbeName::Competitor, "timed out", 102);
        assert!(!r.ok);
        assert!(r.features.is_empty());
        assert_eq!(r.error.as_deref(), Some("timed out"));
    }
}
