//! Competitor probe: market position and competitive pressure.

use adscope_engine::ProbeOutcome;
use adscope_types::{FeatureValue, ProbeError, ProbeName};
use serde::Deserialize;
use serde_json::json;

use crate::store::FixtureStore;

const PROBE: ProbeName = ProbeName::Competitor;

/// Timeout reported by the injected-fault path.
const SIMULATED_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct CompetitorData {
    pub avg_competitor_price: Option<f64>,
    pub our_price: Option<f64>,
    #[serde(default)]
    pub top_competitor_rating: f64,
    #[serde(default)]
    pub sponsored_share: f64,
    #[serde(default = "default_level")]
    pub market_saturation: String,
    #[serde(default = "default_low")]
    pub brand_recognition: String,
}

fn default_level() -> String {
    "medium".into()
}

fn default_low() -> String {
    "low".into()
}

/// Run the probe. `inject_timeout` simulates an upstream timeout; it is
/// a test hook for the failure path, not a real deadline.
pub fn analyze(
    store: &FixtureStore,
    scenario: &str,
    inject_timeout: bool,
) -> Result<ProbeOutcome, ProbeError> {
    if inject_timeout {
        return Err(ProbeError::Timeout {
            probe: PROBE,
            timeout_secs: SIMULATED_TIMEOUT_SECS,
        });
    }

    let data: CompetitorData = store.load(PROBE, scenario, "competitor.json")?;
    competitor_outcome(&data)
}

fn competitor_outcome(data: &CompetitorData) -> Result<ProbeOutcome, ProbeError> {
    let avg_competitor_price = require(data.avg_competitor_price, "avg_competitor_price")?;
    let our_price = require(data.our_price, "our_price")?;

    let price_gap = if our_price > 0.0 {
        (avg_competitor_price - our_price) / our_price
    } else {
        0.0
    };
    let price_label = price_competitiveness(price_gap);
    let pressure = competitive_pressure(
        data.sponsored_share,
        data.top_competitor_rating,
        &data.market_saturation,
        &data.brand_recognition,
    );

    let mut outcome = ProbeOutcome::default();
    outcome
        .features
        .insert("comp_price_gap".into(), FeatureValue::Number(price_gap));
    outcome.features.insert(
        "sponsored_share".into(),
        FeatureValue::Number(data.sponsored_share),
    );
    outcome.features.insert(
        "top_competitor_rating".into(),
        FeatureValue::Number(data.top_competitor_rating),
    );
    outcome.features.insert(
        "competitive_pressure".into(),
        FeatureValue::Text(pressure.to_string()),
    );
    outcome.features.insert(
        "price_competitiveness".into(),
        FeatureValue::Text(price_label.to_string()),
    );

    outcome.data.insert(
        "avg_competitor_price".into(),
        json!(format!("${avg_competitor_price:.2}")),
    );
    outcome
        .data
        .insert("our_price".into(), json!(format!("${our_price:.2}")));
    outcome
        .data
        .insert("price_gap".into(), json!(format!("{price_gap:+.1}%", price_gap = price_gap * 100.0)));
    outcome.data.insert(
        "sponsored_share".into(),
        json!(format!("{:.1}%", data.sponsored_share * 100.0)),
    );
    outcome
        .data
        .insert("competitive_pressure".into(), json!(pressure));
    outcome
        .data
        .insert("price_competitiveness".into(), json!(price_label));

    Ok(outcome)
}

fn require(value: Option<f64>, field: &str) -> Result<f64, ProbeError> {
    value.ok_or_else(|| ProbeError::DataMissing {
        probe: PROBE,
        field: field.into(),
    })
}

fn price_competitiveness(price_gap: f64) -> &'static str {
    if price_gap > 0.1 {
        "price advantage"
    } else if price_gap > -0.05 {
        "price parity"
    } else if price_gap > -0.15 {
        "price disadvantage"
    } else {
        "severe price disadvantage"
    }
}

/// Pressure level from sponsored saturation, the strongest rival's
/// rating, market saturation, and our brand recognition (weaker brand
/// means more pressure).
fn competitive_pressure(
    sponsored_share: f64,
    top_rating: f64,
    saturation: &str,
    brand_recognition: &str,
) -> &'static str {
    let mut score = 0u32;

    score += if sponsored_share > 0.4 {
        3
    } else if sponsored_share > 0.25 {
        2
    } else {
        1
    };

    score += if top_rating > 4.5 {
        3
    } else if top_rating > 4.0 {
        2
    } else {
        1
    };

    score += match saturation {
        "high" => 3,
        "low" => 1,
        _ => 2,
    };

    score += match brand_recognition {
        "high" => 1,
        "low" => 3,
        _ => 2,
    };

    if score >= 9 {
        "high"
    } else if score >= 6 {
        "medium"
    } else {
        "low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> CompetitorData {
        CompetitorData {
            avg_competitor_price: Some(23.0),
            our_price: Some(25.0),
            top_competitor_rating: 4.7,
            sponsored_share: 0.45,
            market_saturation: "high".into(),
            brand_recognition: "low".into(),
        }
    }

    #[test]
    fn price_gap_and_pressure_computed() {
        let outcome = competitor_outcome(&market()).unwrap();
        let gap = outcome.features["comp_price_gap"].as_number().unwrap();
        assert!((gap - (-0.08)).abs() < 1e-9);
        assert_eq!(
            outcome.features["competitive_pressure"],
            FeatureValue::Text("high".into())
        );
        assert_eq!(
            outcome.features["price_competitiveness"],
            FeatureValue::Text("price disadvantage".into())
        );
    }

    #[test]
    fn missing_price_is_data_missing() {
        let data = CompetitorData {
            our_price: None,
            ..market()
        };
        let err = competitor_outcome(&data).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::DataMissing { field, .. } if field == "our_price"
        ));
    }

    #[test]
    fn calm_market_is_low_pressure() {
        assert_eq!(competitive_pressure(0.1, 3.8, "low", "high"), "low");
    }
}
