//! Evidence scoring: one feature value against one rule.

use adscope_types::{FeatureValue, ScoringRule};

/// Score a feature value against a rule, yielding signed evidence in
/// `[-1.0, 1.0]`.
///
/// Pure function. Distance branches scale with how far the value sits
/// from the threshold, capped at 1.0; healthy readings score a fixed
/// mild counter-evidence constant per rule kind. A zero threshold in a
/// distance branch is scored as maximum severity 1.0 rather than
/// dividing by zero. A numeric rule meeting a non-numeric value scores
/// neutral 0.0.
pub fn score_feature(value: &FeatureValue, rule: &ScoringRule) -> f64 {
    match rule {
        ScoringRule::RatioBelow { threshold, .. } => match value.as_number() {
            Some(v) if v < *threshold => severity(*threshold - v, *threshold),
            Some(_) => -0.3,
            None => 0.0,
        },
        ScoringRule::CountAtLeast { threshold, .. } => match value.as_number() {
            Some(v) if v >= *threshold => severity(v - *threshold, *threshold),
            Some(_) => -0.2,
            None => 0.0,
        },
        ScoringRule::ThresholdAbove { threshold, .. } => match value.as_number() {
            Some(v) if v > *threshold => 1.0,
            Some(_) => -0.2,
            None => 0.0,
        },
        ScoringRule::ThresholdBelow { threshold, .. } => match value.as_number() {
            Some(v) if v < *threshold => severity(*threshold - v, *threshold),
            Some(_) => -0.2,
            None => 0.0,
        },
        ScoringRule::GapBelow { threshold, .. } => match value.as_number() {
            Some(v) if v < *threshold => severity((v - *threshold).abs(), threshold.abs()),
            Some(_) => -0.1,
            None => 0.0,
        },
        ScoringRule::Categorical { bad_values, .. } => {
            if bad_values.contains(&value.as_label().as_ref()) {
                1.0
            } else {
                -0.2
            }
        }
    }
}

/// Distance-to-threshold severity, capped at 1.0.
///
/// `threshold == 0` would divide by zero; it is scored as maximum
/// severity instead.
fn severity(distance: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        return 1.0;
    }
    (distance / threshold).min(1.0)
}
