//! Inventory probe: stock depth and restock outlook.

use adscope_engine::ProbeOutcome;
use adscope_types::{FeatureValue, ProbeError, ProbeName};
use serde::Deserialize;
use serde_json::json;

use crate::store::FixtureStore;

const PROBE: ProbeName = ProbeName::Inventory;

#[derive(Debug, Deserialize)]
pub struct InventoryData {
    pub days_of_inventory: Option<f64>,
    #[serde(default)]
    pub restock_eta_days: f64,
    #[serde(default = "default_risk")]
    pub stockout_risk: String,
    #[serde(default)]
    pub units_available: u64,
    #[serde(default)]
    pub avg_daily_sales: f64,
}

fn default_risk() -> String {
    "low".into()
}

pub fn analyze(store: &FixtureStore, scenario: &str) -> Result<ProbeOutcome, ProbeError> {
    let data: InventoryData = store.load(PROBE, scenario, "inventory.json")?;
    inventory_outcome(&data)
}

fn inventory_outcome(data: &InventoryData) -> Result<ProbeOutcome, ProbeError> {
    let days_of_inventory = data
        .days_of_inventory
        .ok_or_else(|| ProbeError::DataMissing {
            probe: PROBE,
            field: "days_of_inventory".into(),
        })?;

    let health = inventory_health(days_of_inventory);
    let recommendation = ad_recommendation(days_of_inventory, data.restock_eta_days);

    let mut outcome = ProbeOutcome::default();
    outcome.features.insert(
        "days_of_inventory".into(),
        FeatureValue::Number(days_of_inventory),
    );
    outcome.features.insert(
        "stockout_risk".into(),
        FeatureValue::Text(data.stockout_risk.clone()),
    );
    outcome.features.insert(
        "restock_eta_days".into(),
        FeatureValue::Number(data.restock_eta_days),
    );
    outcome
        .features
        .insert("inventory_health".into(), FeatureValue::Text(health.into()));
    outcome.features.insert(
        "units_available".into(),
        FeatureValue::Number(data.units_available as f64),
    );
    outcome.features.insert(
        "avg_daily_sales".into(),
        FeatureValue::Number(data.avg_daily_sales),
    );

    outcome.data.insert(
        "days_of_inventory".into(),
        json!(format!("{days_of_inventory:.0} days")),
    );
    outcome
        .data
        .insert("units_available".into(), json!(data.units_available));
    outcome
        .data
        .insert("stockout_risk".into(), json!(data.stockout_risk));
    outcome.data.insert(
        "restock_eta".into(),
        json!(format!("in {:.0} days", data.restock_eta_days)),
    );
    outcome.data.insert("inventory_health".into(), json!(health));
    outcome
        .data
        .insert("ad_recommendation".into(), json!(recommendation));

    Ok(outcome)
}

fn inventory_health(days_left: f64) -> &'static str {
    if days_left >= 30.0 {
        "healthy"
    } else if days_left >= 14.0 {
        "watch"
    } else if days_left >= 7.0 {
        "warning"
    } else {
        "critical"
    }
}

fn ad_recommendation(days_left: f64, restock_days: f64) -> &'static str {
    if days_left < 7.0 {
        if restock_days > days_left {
            "cut ad spend immediately to avoid a stockout"
        } else {
            "hold ad spend; restock arrives in time"
        }
    } else if days_left < 14.0 {
        "moderate ad spend and watch inventory"
    } else if days_left < 30.0 {
        "advertise normally; track inventory burn"
    } else {
        "inventory supports aggressive advertising"
    }
}
