//! Belief revision: asymmetric bounded-exponential updates.

use adscope_types::{FeatureMap, Hypothesis, HypothesisId, ProbeName};

use crate::config::EngineConfig;
use crate::registry::RuleGraph;
use crate::scoring::score_feature;

/// Result of one belief update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeliefUpdate {
    pub new_belief: f64,
    pub delta: f64,
}

/// Revise a belief with a batch of evidence scores.
///
/// An empty score list leaves the belief untouched. Otherwise the mean
/// score drives an asymmetric exponential approach: positive evidence
/// converges toward 1.0 with diminishing steps as belief rises, negative
/// evidence converges toward 0.0 with diminishing steps as belief falls.
/// The result is clamped to `[0.0, 1.0]`.
///
/// Known asymmetry: a belief of exactly 0.0 cannot move under negative
/// evidence (the multiplicative term is zero), and a belief of exactly
/// 1.0 cannot move under positive evidence. The boundaries are absorbing
/// in those directions only.
pub fn update_belief(belief: f64, alpha: f64, scores: &[f64]) -> BeliefUpdate {
    if scores.is_empty() {
        return BeliefUpdate {
            new_belief: belief,
            delta: 0.0,
        };
    }

    let avg = scores.iter().sum::<f64>() / scores.len() as f64;

    let raw = if avg > 0.0 {
        belief + alpha * avg * (1.0 - belief)
    } else {
        belief + alpha * avg * belief
    };

    let new_belief = raw.clamp(0.0, 1.0);
    BeliefUpdate {
        new_belief,
        delta: new_belief - belief,
    }
}

/// Detail record for one hypothesis revised by a probe's evidence.
#[derive(Debug, Clone)]
pub struct BeliefChange {
    pub hypothesis: HypothesisId,
    pub name: String,
    /// Human-readable evidence notes, one per scored feature.
    pub evidence: Vec<String>,
    pub mean_score: f64,
    pub old_belief: f64,
    pub new_belief: f64,
    pub delta: f64,
}

/// Apply a successful probe's features to every hypothesis the rule
/// graph links to that probe.
///
/// Rules whose feature key is absent from the map are skipped silently.
/// A hypothesis with no scored features keeps its belief; hypotheses
/// without rules under this probe are untouched entirely. Returns one
/// change record per hypothesis that was actually revised.
pub fn apply_probe_features(
    hypotheses: &mut [Hypothesis],
    probe: ProbeName,
    features: &FeatureMap,
    graph: &RuleGraph,
    config: &EngineConfig,
) -> Vec<BeliefChange> {
    let mut changes = Vec::new();

    for hypothesis in hypotheses.iter_mut() {
        let rules = graph.rules_for(probe, hypothesis.id);
        if rules.is_empty() {
            continue;
        }

        hypothesis.previous_belief = Some(hypothesis.belief);

        let mut scores = Vec::new();
        let mut evidence = Vec::new();
        for rule in rules {
            let Some(value) = features.get(rule.feature()) else {
                continue;
            };
            let score = score_feature(value, rule);
            evidence.push(format!(
                "{}={} (score {:+.2})",
                rule.feature(),
                value.as_label(),
                score
            ));
            scores.push(score);
        }

        if scores.is_empty() {
            continue;
        }

        let mean_score = scores.iter().sum::<f64>() / scores.len() as f64;
        let old_belief = hypothesis.belief;
        let update = update_belief(old_belief, config.alpha, &scores);
        hypothesis.belief = update.new_belief;

        changes.push(BeliefChange {
            hypothesis: hypothesis.id,
            name: hypothesis.name.clone(),
            evidence,
            mean_score,
            old_belief,
            new_belief: update.new_belief,
            delta: update.delta,
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use adscope_types::FeatureValue;

    #[test]
    fn empty_scores_leave_belief_unchanged() {
        let update = update_belief(0.37, 0.2, &[]);
        assert_eq!(update.new_belief, 0.37);
        assert_eq!(update.delta, 0.0);
    }

    #[test]
    fn positive_evidence_raises_belief() {
        let update = update_belief(0.30, 0.2, &[0.5]);
        // 0.30 + 0.2 * 0.5 * 0.70 = 0.37
        assert!((update.new_belief - 0.37).abs() < 1e-9);
        assert!(update.delta > 0.0);
    }

    #[test]
    fn negative_evidence_lowers_belief() {
        let update = update_belief(0.30, 0.2, &[-0.5]);
        // 0.30 + 0.2 * -0.5 * 0.30 = 0.27
        assert!((update.new_belief - 0.27).abs() < 1e-9);
        assert!(update.delta < 0.0);
    }

    #[test]
    fn zero_belief_absorbs_negative_evidence() {
        let update = update_belief(0.0, 0.2, &[-1.0]);
        assert_eq!(update.new_belief, 0.0);
        assert_eq!(update.delta, 0.0);
    }

    #[test]
    fn full_belief_absorbs_positive_evidence() {
        let update = update_belief(1.0, 0.2, &[1.0]);
        assert_eq!(update.new_belief, 1.0);
        assert_eq!(update.delta, 0.0);
    }

    #[test]
    fn apply_updates_only_linked_hypotheses() {
        let config = EngineConfig::default();
        let graph = RuleGraph::standard();
        let mut hypotheses = crate::registry::initialize_hypotheses(
            adscope_types::Goal::IncreaseImpressions,
            &config,
        );

        let mut features = FeatureMap::new();
        features.insert("avg_cpc_ratio".into(), FeatureValue::Number(0.4));

        let inventory_before = hypotheses
            .iter()
            .find(|h| h.id == HypothesisId::InventoryRisk)
            .map(|h| h.belief)
            .unwrap();

        let changes = apply_probe_features(
            &mut hypotheses,
            ProbeName::AdsMetrics,
            &features,
            &graph,
            &config,
        );

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].hypothesis, HypothesisId::BidTooLow);
        assert!(changes[0].delta > 0.0);

        let inventory_after = hypotheses
            .iter()
            .find(|h| h.id == HypothesisId::InventoryRisk)
            .map(|h| h.belief)
            .unwrap();
        assert_eq!(inventory_before, inventory_after);
    }
}
