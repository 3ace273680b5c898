//! Command implementations.

pub mod battery;
pub mod diagnose;
pub mod doctor;

/// Scenarios shipped with the repository, in battery order.
pub const BUNDLED_SCENARIOS: [&str; 3] = [
    "low_impressions",
    "high_acos",
    "high_click_low_conversion",
];

/// Data files every scenario directory must provide.
pub const SCENARIO_FILES: [&str; 6] = [
    "scenario.json",
    "ads_keywords.json",
    "ads_campaign.json",
    "listing_audit.json",
    "competitor.json",
    "inventory.json",
];
