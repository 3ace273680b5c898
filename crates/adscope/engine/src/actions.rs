//! Static action templates and final strategy assembly.

use adscope_types::{Action, ActionStrategy, HypothesisId, RunContext};

/// A strategy never carries more than this many actions.
pub const MAX_ACTIONS: usize = 3;

/// Recommended actions for a hypothesis, strongest first.
///
/// Static template table; selected by hypothesis id, never computed.
pub fn actions_for(id: HypothesisId) -> Vec<Action> {
    match id {
        HypothesisId::BidTooLow => vec![
            Action::new(
                "Raise keyword bids by 15-25%",
                "More impressions and clicks on competitive placements",
                "Ad spend rises",
                "Impressions up 20-40%",
            ),
            Action::new(
                "Prioritize bid increases on high-converting keywords",
                "Better overall return on ad spend",
                "Individual keywords may become expensive",
                "ACOS down 5-15%",
            ),
        ],
        HypothesisId::KeywordShortage => vec![
            Action::new(
                "Expand the targeted keyword list",
                "Wider advertising coverage",
                "May attract less relevant traffic",
                "Keyword count grows to 15-20",
            ),
            Action::new(
                "Run automatic campaigns to mine new keywords",
                "Surfaces high-value keywords you are missing",
                "Some initial wasted spend",
                "5-10 new performing keywords",
            ),
        ],
        HypothesisId::CompetitorPressure => vec![
            Action::new(
                "Adjust pricing to improve competitiveness",
                "Stronger ad auction position",
                "Margin compression",
                "Ad placement rank improves",
            ),
            Action::new(
                "Shift budget toward long-tail keywords",
                "Less head-to-head competition",
                "Lower traffic volume",
                "Long-tail conversion rate rises",
            ),
        ],
        HypothesisId::ListingQuality => vec![
            Action::new(
                "Overhaul the main image and gallery",
                "Higher click-through and conversion rates",
                "Design time and cost",
                "Conversion rate up 10-30%",
            ),
            Action::new(
                "Rewrite the title and bullet points",
                "Better search relevance",
                "Existing ranking may shift",
                "Organic traffic grows",
            ),
            Action::new(
                "Build or refresh A+ content",
                "More persuasive product page",
                "Production lead time",
                "Time on page increases",
            ),
        ],
        HypothesisId::BroadMatchWaste => vec![
            Action::new(
                "Add negative keywords to filter irrelevant traffic",
                "Less wasted spend",
                "Over-filtering can cut useful traffic",
                "ACOS down 10-20%",
            ),
            Action::new(
                "Move broad-match keywords to phrase or exact match",
                "More precise targeting",
                "Total impressions drop",
                "Conversion rate up 15-25%",
            ),
        ],
        HypothesisId::InventoryRisk => vec![
            Action::new(
                "Expedite a restock order",
                "Avoids a stockout interrupting sales",
                "Higher carrying cost",
                "Days of inventory back above 30",
            ),
            Action::new(
                "Temporarily reduce ad spend to stretch inventory",
                "Stock lasts until replenishment",
                "Short-term sales dip",
                "Inventory turnover stabilizes",
            ),
        ],
    }
}

/// Assemble the final strategy from the run's end state.
///
/// Deterministic: top-belief hypothesis (ties resolve to registry
/// order), its action template capped at [`MAX_ACTIONS`], and a summary
/// of the probe executions that led here.
pub fn build_strategy(ctx: &RunContext) -> ActionStrategy {
    let Some(top) = ctx.top_hypothesis() else {
        return ActionStrategy {
            primary_hypothesis: "inconclusive".into(),
            confidence: 0.0,
            actions: Vec::new(),
            reasoning: "No hypotheses were registered for this run.".into(),
        };
    };

    let actions: Vec<Action> = actions_for(top.id).into_iter().take(MAX_ACTIONS).collect();

    let mut reasoning = format!(
        "Based on {} probe execution(s), the primary diagnosis is '{}' \
         (confidence {:.1}%).",
        ctx.probe_results.len(),
        top.name,
        top.belief * 100.0
    );
    for (i, result) in ctx.probe_results.iter().enumerate() {
        let status = if result.ok { "ok" } else { "failed" };
        reasoning.push_str(&format!("\n{}. {}: {}", i + 1, result.probe, status));
        if result.ok && !result.features.is_empty() {
            let keys: Vec<&str> = result.features.keys().take(3).map(String::as_str).collect();
            reasoning.push_str(&format!(" - key features: {}", keys.join(", ")));
        }
    }

    ActionStrategy {
        primary_hypothesis: top.name.clone(),
        confidence: top.belief,
        actions,
        reasoning,
    }
}
