//! Listing audit probe: product page quality.

use adscope_engine::ProbeOutcome;
use adscope_types::{FeatureValue, ProbeError, ProbeName};
use serde::Deserialize;
use serde_json::json;

use crate::store::FixtureStore;

const PROBE: ProbeName = ProbeName::ListingAudit;

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub main_image_score: Option<f64>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    #[serde(default)]
    pub a_plus_content: bool,
    #[serde(default)]
    pub title_keyword_coverage: f64,
    #[serde(default)]
    pub bullet_points_count: u32,
}

pub fn analyze(store: &FixtureStore, scenario: &str) -> Result<ProbeOutcome, ProbeError> {
    let data: ListingData = store.load(PROBE, scenario, "listing_audit.json")?;
    audit_outcome(&data)
}

fn audit_outcome(data: &ListingData) -> Result<ProbeOutcome, ProbeError> {
    let main_image_score = require(data.main_image_score, "main_image_score")?;
    let rating = require(data.rating, "rating")?;
    let reviews = require(data.reviews.map(|r| r as f64), "reviews")?;

    let quality_score = quality_score(
        main_image_score,
        rating,
        reviews,
        data.a_plus_content,
        data.title_keyword_coverage,
        data.bullet_points_count,
    );
    let suggestions = suggestions(data);

    let mut outcome = ProbeOutcome::default();
    outcome.features.insert(
        "main_image_score".into(),
        FeatureValue::Number(main_image_score),
    );
    outcome
        .features
        .insert("rating".into(), FeatureValue::Number(rating));
    outcome
        .features
        .insert("reviews".into(), FeatureValue::Number(reviews));
    outcome
        .features
        .insert("a_plus".into(), FeatureValue::Flag(data.a_plus_content));
    outcome.features.insert(
        "title_keyword_coverage".into(),
        FeatureValue::Number(data.title_keyword_coverage),
    );
    outcome.features.insert(
        "bullet_points_count".into(),
        FeatureValue::Number(data.bullet_points_count as f64),
    );
    outcome
        .features
        .insert("quality_score".into(), FeatureValue::Number(quality_score));

    outcome.data.insert(
        "main_image_score".into(),
        json!(format!("{main_image_score:.2}")),
    );
    outcome.data.insert("rating".into(), json!(format!("{rating:.1}")));
    outcome.data.insert("reviews".into(), json!(reviews as u64));
    outcome
        .data
        .insert("a_plus_content".into(), json!(data.a_plus_content));
    outcome.data.insert(
        "quality_score".into(),
        json!(format!("{quality_score:.0}/100")),
    );
    outcome.data.insert("suggestions".into(), json!(suggestions));

    Ok(outcome)
}

fn require(value: Option<f64>, field: &str) -> Result<f64, ProbeError> {
    value.ok_or_else(|| ProbeError::DataMissing {
        probe: PROBE,
        field: field.into(),
    })
}

/// Weighted page quality score, capped at 100.
///
/// Weights: main image 25, rating 20, reviews 15 (100 reviews saturate),
/// A+ content 15, title keyword coverage 15, bullet points 10 (5
/// bullets saturate).
fn quality_score(
    main_image: f64,
    rating: f64,
    reviews: f64,
    a_plus: bool,
    title_coverage: f64,
    bullet_count: u32,
) -> f64 {
    let mut score = 0.0;
    score += main_image * 25.0;
    score += rating / 5.0 * 20.0;
    score += (reviews / 100.0).min(1.0) * 15.0;
    if a_plus {
        score += 15.0;
    }
    score += title_coverage * 15.0;
    score += (bullet_count as f64 / 5.0).min(1.0) * 10.0;
    score.min(100.0)
}

fn suggestions(data: &ListingData) -> Vec<String> {
    let mut out = Vec::new();
    if data.main_image_score.unwrap_or(0.0) < 0.7 {
        out.push("Improve main image quality and appeal".to_string());
    }
    if data.rating.unwrap_or(0.0) < 4.0 {
        out.push("Raise the product rating; address recurring complaints".to_string());
    }
    if data.reviews.unwrap_or(0) < 50 {
        out.push("Grow the review count".to_string());
    }
    if !data.a_plus_content {
        out.push("Create an A+ content page".to_string());
    }
    if data.title_keyword_coverage < 0.8 {
        out.push("Improve title keyword coverage".to_string());
    }
    if data.bullet_points_count < 5 {
        out.push("Flesh out the bullet points".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> ListingData {
        ListingData {
            main_image_score: Some(0.9),
            rating: Some(4.5),
            reviews: Some(120),
            a_plus_content: true,
            title_keyword_coverage: 0.85,
            bullet_points_count: 5,
        }
    }

    #[test]
    fn strong_listing_scores_high() {
        let outcome = audit_outcome(&listing()).unwrap();
        let quality = outcome.features["quality_score"].as_number().unwrap();
        // 22.5 + 18 + 15 + 15 + 12.75 + 10 = 93.25
        assert!((quality - 93.25).abs() < 1e-9);
        assert_eq!(outcome.features["a_plus"], FeatureValue::Flag(true));
    }

    #[test]
    fn missing_rating_is_data_missing() {
        let data = ListingData {
            rating: None,
            ..listing()
        };
        let err = audit_outcome(&data).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::DataMissing { field, .. } if field == "rating"
        ));
    }

    #[test]
    fn weak_listing_generates_suggestions() {
        let data = ListingData {
            main_image_score: Some(0.4),
            rating: Some(3.2),
            reviews: Some(12),
            a_plus_content: false,
            title_keyword_coverage: 0.3,
            bullet_points_count: 2,
        };
        let outcome = audit_outcome(&data).unwrap();
        let suggestions = outcome.data["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 6);
    }
}
