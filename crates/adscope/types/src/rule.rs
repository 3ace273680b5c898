//! Scoring rules: static mappings from a probe feature to signed evidence.

use serde::Serialize;

/// One evidentiary rule, matched against a single feature value.
///
/// Each variant carries exactly the fields its scoring branch needs, so
/// an ill-formed type/direction combination cannot be constructed. Rules
/// are static configuration baked into the rule graph, hence the static
/// strings; they serialize for trace output but are never read back. The
/// `feature` key names an entry a probe's feature map may produce; a rule
/// whose feature is absent from a given run is skipped, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// Ratio where lower is better: values under the threshold support
    /// the hypothesis proportionally to their distance; values at or
    /// above it are mild counter-evidence.
    RatioBelow {
        feature: &'static str,
        threshold: f64,
    },

    /// Count where more is better: meeting the threshold supports the
    /// hypothesis, falling short counts mildly against it.
    CountAtLeast {
        feature: &'static str,
        threshold: f64,
    },

    /// Binary trigger: exceeding the threshold is full evidence of a
    /// problem.
    ThresholdAbove {
        feature: &'static str,
        threshold: f64,
    },

    /// Deficit trigger: values under the threshold indicate a problem,
    /// scaled by how far under they fall.
    ThresholdBelow {
        feature: &'static str,
        threshold: f64,
    },

    /// Signed gap where a shortfall below the threshold indicates a
    /// problem (e.g. a price disadvantage).
    GapBelow {
        feature: &'static str,
        threshold: f64,
    },

    /// Categorical membership: the stringified value being one of the
    /// bad values is full evidence.
    Categorical {
        feature: &'static str,
        bad_values: &'static [&'static str],
    },
}

impl ScoringRule {
    /// The feature-map key this rule reads.
    pub fn feature(&self) -> &'static str {
        match self {
            ScoringRule::RatioBelow { feature, .. }
            | ScoringRule::CountAtLeast { feature, .. }
            | ScoringRule::ThresholdAbove { feature, .. }
            | ScoringRule::ThresholdBelow { feature, .. }
            | ScoringRule::GapBelow { feature, .. }
            | ScoringRule::Categorical { feature, .. } => feature,
        }
    }
}
