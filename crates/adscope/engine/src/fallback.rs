//! Fallback advisories surfaced when a probe fails.
//!
//! Reporting only: advisories never alter selection or belief state.

use adscope_types::ProbeName;

/// Operator guidance for a failed probe.
#[derive(Debug, Clone)]
pub struct FallbackAdvisory {
    /// Probes that can partially substitute for the failed one.
    pub alternatives: Vec<ProbeName>,
    pub message: String,
}

/// Static advisory table, keyed by the failed probe.
pub fn fallback_for(probe: ProbeName) -> FallbackAdvisory {
    match probe {
        ProbeName::AdsMetrics => FallbackAdvisory {
            alternatives: vec![ProbeName::Competitor, ProbeName::ListingAudit],
            message: "Ads metrics unavailable; competitor analysis and a listing audit \
                      can still bound the problem"
                .into(),
        },
        ProbeName::ListingAudit => FallbackAdvisory {
            alternatives: vec![ProbeName::AdsMetrics, ProbeName::Competitor],
            message: "Listing audit unavailable; ads metrics and competitor analysis \
                      can still gauge page competitiveness"
                .into(),
        },
        ProbeName::Competitor => FallbackAdvisory {
            alternatives: vec![ProbeName::ListingAudit],
            message: "Competitor analysis unavailable; audit the listing to gauge \
                      competitiveness instead"
                .into(),
        },
        ProbeName::Inventory => FallbackAdvisory {
            alternatives: vec![ProbeName::AdsMetrics],
            message: "Inventory check unavailable; ads metrics still show whether spend \
                      is being throttled"
                .into(),
        },
    }
}
