//! Hypothesis catalog and the probe-to-hypothesis rule graph.
//!
//! Both are static configuration built once at startup and immutable
//! thereafter. Catalog declaration order is the registry insertion order
//! used for ranking tie-breaks.

use adscope_types::{Goal, Hypothesis, HypothesisId, ProbeName, ScoringRule};

use crate::config::EngineConfig;

struct CatalogEntry {
    id: HypothesisId,
    name: &'static str,
    description: &'static str,
}

const CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        id: HypothesisId::BidTooLow,
        name: "Bids too low",
        description: "Bid amounts are too low to win competitive keyword placements",
    },
    CatalogEntry {
        id: HypothesisId::KeywordShortage,
        name: "Keyword shortage",
        description: "Too few targeted keywords limit advertising coverage",
    },
    CatalogEntry {
        id: HypothesisId::CompetitorPressure,
        name: "Competitor pressure",
        description: "Strong competitors suppress ad visibility and performance",
    },
    CatalogEntry {
        id: HypothesisId::ListingQuality,
        name: "Listing quality",
        description: "Product page quality drags down conversion and ad efficiency",
    },
    CatalogEntry {
        id: HypothesisId::BroadMatchWaste,
        name: "Broad-match waste",
        description: "Broad-match keywords attract irrelevant traffic and waste spend",
    },
    CatalogEntry {
        id: HypothesisId::InventoryRisk,
        name: "Inventory risk",
        description: "Inventory depth constrains how aggressively ads can run",
    },
];

/// Hypotheses whose initial belief gets the goal bonus.
fn goal_boosted(goal: Goal) -> &'static [HypothesisId] {
    match goal {
        Goal::IncreaseImpressions => &[HypothesisId::BidTooLow, HypothesisId::KeywordShortage],
        Goal::ReduceAcos => &[HypothesisId::BroadMatchWaste],
        Goal::ImproveConversion => &[HypothesisId::ListingQuality],
    }
}

/// Build the hypothesis set for a fresh run.
///
/// Every hypothesis starts at the base belief; goal-relevant hypotheses
/// get a small fixed bonus on top. The goal-to-bonus mapping is static
/// configuration, not computed.
pub fn initialize_hypotheses(goal: Goal, config: &EngineConfig) -> Vec<Hypothesis> {
    let boosted = goal_boosted(goal);
    CATALOG
        .iter()
        .map(|entry| {
            let mut belief = config.base_belief;
            if boosted.contains(&entry.id) {
                belief += config.goal_bonus;
            }
            Hypothesis::new(entry.id, entry.name, entry.description, belief)
        })
        .collect()
}

/// The evidentiary relevance graph: probe -> hypothesis -> rules.
///
/// Edge order is insertion order and drives deterministic iteration in
/// the selection policy.
#[derive(Debug, Clone)]
pub struct RuleGraph {
    edges: Vec<(ProbeName, Vec<(HypothesisId, Vec<ScoringRule>)>)>,
}

impl RuleGraph {
    /// The standard diagnostic graph.
    pub fn standard() -> Self {
        Self {
            edges: vec![
                (
                    ProbeName::AdsMetrics,
                    vec![
                        (
                            HypothesisId::BidTooLow,
                            vec![ScoringRule::RatioBelow {
                                feature: "avg_cpc_ratio",
                                threshold: 0.6,
                            }],
                        ),
                        (
                            HypothesisId::KeywordShortage,
                            vec![ScoringRule::CountAtLeast {
                                feature: "keyword_count",
                                threshold: 5.0,
                            }],
                        ),
                        (
                            HypothesisId::BroadMatchWaste,
                            vec![ScoringRule::ThresholdAbove {
                                feature: "broad_acos",
                                threshold: 0.6,
                            }],
                        ),
                    ],
                ),
                (
                    ProbeName::ListingAudit,
                    vec![(
                        HypothesisId::ListingQuality,
                        vec![
                            ScoringRule::ThresholdBelow {
                                feature: "main_image_score",
                                threshold: 0.6,
                            },
                            ScoringRule::ThresholdBelow {
                                feature: "rating",
                                threshold: 4.0,
                            },
                            ScoringRule::CountAtLeast {
                                feature: "reviews",
                                threshold: 50.0,
                            },
                        ],
                    )],
                ),
                (
                    ProbeName::Competitor,
                    vec![(
                        HypothesisId::CompetitorPressure,
                        vec![
                            ScoringRule::ThresholdAbove {
                                feature: "sponsored_share",
                                threshold: 0.35,
                            },
                            ScoringRule::GapBelow {
                                feature: "comp_price_gap",
                                threshold: -0.05,
                            },
                        ],
                    )],
                ),
                (
                    ProbeName::Inventory,
                    vec![(
                        HypothesisId::InventoryRisk,
                        vec![
                            ScoringRule::ThresholdBelow {
                                feature: "days_of_inventory",
                                threshold: 14.0,
                            },
                            ScoringRule::Categorical {
                                feature: "stockout_risk",
                                bad_values: &["high", "critical"],
                            },
                        ],
                    )],
                ),
            ],
        }
    }

    /// Rules this probe contributes to this hypothesis; empty when the
    /// graph has no such edge.
    pub fn rules_for(&self, probe: ProbeName, hypothesis: HypothesisId) -> &[ScoringRule] {
        self.edges
            .iter()
            .find(|(p, _)| *p == probe)
            .and_then(|(_, hyps)| {
                hyps.iter()
                    .find(|(h, _)| *h == hypothesis)
                    .map(|(_, rules)| rules.as_slice())
            })
            .unwrap_or(&[])
    }

    /// Probes that can provide evidence for a hypothesis, in insertion
    /// order.
    pub fn probes_for(&self, hypothesis: HypothesisId) -> Vec<ProbeName> {
        self.edges
            .iter()
            .filter(|(_, hyps)| hyps.iter().any(|(h, _)| *h == hypothesis))
            .map(|(p, _)| *p)
            .collect()
    }

    /// All probes in the graph, in insertion order.
    pub fn probes(&self) -> Vec<ProbeName> {
        self.edges.iter().map(|(p, _)| *p).collect()
    }
}
