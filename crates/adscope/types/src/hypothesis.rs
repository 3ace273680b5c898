//! Candidate root-cause explanations and their belief state.

use serde::{Deserialize, Serialize};

/// Identifier for a candidate root-cause explanation.
///
/// Declaration order is the registry insertion order; ranking ties and
/// stable sorts resolve in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HypothesisId {
    /// Bids are too low to win competitive placements.
    BidTooLow,
    /// Too few targeted keywords limit coverage.
    KeywordShortage,
    /// Strong competitors suppress ad performance.
    CompetitorPressure,
    /// Listing quality drags down conversion and ad efficiency.
    ListingQuality,
    /// Broad-match keywords burn spend on irrelevant traffic.
    BroadMatchWaste,
    /// Inventory depth constrains how aggressively ads can run.
    InventoryRisk,
}

impl std::fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HypothesisId::BidTooLow => "bid-too-low",
            HypothesisId::KeywordShortage => "keyword-shortage",
            HypothesisId::CompetitorPressure => "competitor-pressure",
            HypothesisId::ListingQuality => "listing-quality",
            HypothesisId::BroadMatchWaste => "broad-match-waste",
            HypothesisId::InventoryRisk => "inventory-risk",
        };
        write!(f, "{s}")
    }
}

/// A hypothesis with its current belief.
///
/// `belief` is revised in place by the belief updater; `previous_belief`
/// holds the value from before the most recent update so observers can
/// report deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,

    /// Short display name.
    pub name: String,

    /// One-sentence explanation of what this hypothesis claims.
    pub description: String,

    /// Confidence in this explanation, always within `[0.0, 1.0]`.
    pub belief: f64,

    /// Belief before the most recent update, if any update has happened.
    #[serde(default)]
    pub previous_belief: Option<f64>,
}

impl Hypothesis {
    /// Create a hypothesis at an initial belief level.
    pub fn new(
        id: HypothesisId,
        name: impl Into<String>,
        description: impl Into<String>,
        belief: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            belief: belief.clamp(0.0, 1.0),
            previous_belief: None,
        }
    }

    /// Belief movement since the last update, or zero when untouched.
    pub fn last_delta(&self) -> f64 {
        match self.previous_belief {
            Some(prev) => self.belief - prev,
            None => 0.0,
        }
    }
}
