//! Advertising metrics probe: keyword and campaign performance.

use adscope_engine::ProbeOutcome;
use adscope_types::{FeatureValue, ProbeError, ProbeName};
use serde::Deserialize;
use serde_json::json;

use crate::executor::AdsMode;
use crate::store::FixtureStore;

const PROBE: ProbeName = ProbeName::AdsMetrics;

#[derive(Debug, Deserialize)]
pub struct KeywordData {
    #[serde(default)]
    pub keywords: Vec<KeywordRecord>,
    #[serde(default = "default_category_avg_cpc")]
    pub category_avg_cpc: f64,
}

fn default_category_avg_cpc() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    #[serde(default)]
    pub match_type: String,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub sales: f64,
}

#[derive(Debug, Deserialize)]
pub struct CampaignData {
    #[serde(default)]
    pub campaigns: Vec<CampaignRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CampaignRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub sales: f64,
}

/// Run the probe against a scenario's fixture data.
pub fn analyze(
    store: &FixtureStore,
    scenario: &str,
    mode: AdsMode,
) -> Result<ProbeOutcome, ProbeError> {
    match mode {
        AdsMode::Keyword => {
            let data: KeywordData = store.load(PROBE, scenario, "ads_keywords.json")?;
            keyword_outcome(&data)
        }
        AdsMode::Campaign => {
            let data: CampaignData = store.load(PROBE, scenario, "ads_campaign.json")?;
            campaign_outcome(&data)
        }
    }
}

fn keyword_outcome(data: &KeywordData) -> Result<ProbeOutcome, ProbeError> {
    if data.keywords.is_empty() {
        return Err(ProbeError::DataMissing {
            probe: PROBE,
            field: "keywords".into(),
        });
    }

    let total_impressions: u64 = data.keywords.iter().map(|k| k.impressions).sum();
    let total_clicks: u64 = data.keywords.iter().map(|k| k.clicks).sum();
    let total_spend: f64 = data.keywords.iter().map(|k| k.spend).sum();
    let total_sales: f64 = data.keywords.iter().map(|k| k.sales).sum();

    let avg_cpc = ratio(total_spend, total_clicks as f64);
    let overall_ctr = ratio(total_clicks as f64, total_impressions as f64);
    let overall_acos = ratio(total_spend, total_sales);

    let broad: Vec<&KeywordRecord> = data
        .keywords
        .iter()
        .filter(|k| k.match_type == "broad")
        .collect();
    let broad_spend: f64 = broad.iter().map(|k| k.spend).sum();
    let broad_sales: f64 = broad.iter().map(|k| k.sales).sum();
    let broad_acos = ratio(broad_spend, broad_sales);

    let avg_cpc_ratio = if data.category_avg_cpc > 0.0 {
        avg_cpc / data.category_avg_cpc
    } else {
        1.0
    };

    let mut outcome = ProbeOutcome::default();
    outcome
        .features
        .insert("avg_cpc_ratio".into(), FeatureValue::Number(avg_cpc_ratio));
    outcome.features.insert(
        "keyword_count".into(),
        FeatureValue::Number(data.keywords.len() as f64),
    );
    outcome
        .features
        .insert("broad_acos".into(), FeatureValue::Number(broad_acos));
    outcome
        .features
        .insert("overall_ctr".into(), FeatureValue::Number(overall_ctr));
    outcome
        .features
        .insert("overall_acos".into(), FeatureValue::Number(overall_acos));
    outcome.features.insert(
        "total_impressions".into(),
        FeatureValue::Number(total_impressions as f64),
    );
    outcome.features.insert(
        "total_clicks".into(),
        FeatureValue::Number(total_clicks as f64),
    );

    outcome.data.insert("total_impressions".into(), json!(total_impressions));
    outcome.data.insert("total_clicks".into(), json!(total_clicks));
    outcome
        .data
        .insert("overall_ctr".into(), json!(format!("{overall_ctr:.3}")));
    outcome
        .data
        .insert("overall_acos".into(), json!(format!("{overall_acos:.2}")));
    outcome
        .data
        .insert("keyword_count".into(), json!(data.keywords.len()));

    Ok(outcome)
}

fn campaign_outcome(data: &CampaignData) -> Result<ProbeOutcome, ProbeError> {
    if data.campaigns.is_empty() {
        return Err(ProbeError::DataMissing {
            probe: PROBE,
            field: "campaigns".into(),
        });
    }

    let total_spend: f64 = data.campaigns.iter().map(|c| c.spend).sum();
    let total_sales: f64 = data.campaigns.iter().map(|c| c.sales).sum();
    let active = data
        .campaigns
        .iter()
        .filter(|c| c.status == "enabled")
        .count();
    let acos = ratio(total_spend, total_sales);

    let mut outcome = ProbeOutcome::default();
    outcome.features.insert(
        "campaign_count".into(),
        FeatureValue::Number(data.campaigns.len() as f64),
    );
    outcome.features.insert(
        "active_campaign_count".into(),
        FeatureValue::Number(active as f64),
    );
    outcome
        .features
        .insert("campaign_acos".into(), FeatureValue::Number(acos));
    outcome.features.insert(
        "avg_campaign_spend".into(),
        FeatureValue::Number(total_spend / data.campaigns.len() as f64),
    );

    outcome
        .data
        .insert("campaign_count".into(), json!(data.campaigns.len()));
    outcome.data.insert("active_campaigns".into(), json!(active));
    outcome
        .data
        .insert("campaign_acos".into(), json!(format!("{acos:.2}")));
    outcome
        .data
        .insert("total_spend".into(), json!(format!("${total_spend:.2}")));

    Ok(outcome)
}

/// Zero-denominator ratios collapse to zero.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
