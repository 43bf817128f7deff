//! When not to use a framework, and what to reach for instead.

use super::types::FrameworkAntiPattern;
use crate::taxonomy::Severity;
use std::collections::BTreeMap;

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn antipattern(
    framework_id: &str,
    conditions: &[&str],
    outcomes: &[&str],
    alternatives: &[&str],
    severity: Severity,
) -> FrameworkAntiPattern {
    FrameworkAntiPattern {
        framework_id: framework_id.to_string(),
        antipattern_conditions: strings(conditions),
        negative_outcomes: strings(outcomes),
        alternative_frameworks: strings(alternatives),
        severity,
    }
}

pub fn build_antipatterns() -> BTreeMap<String, FrameworkAntiPattern> {
    let entries = [
        antipattern(
            "bcg_matrix",
            &[
                "Single product company",
                "Pre-revenue startup",
                "Team size < 20",
                "No market share data",
            ],
            &[
                "Misleading analysis",
                "Wasted effort",
                "Wrong strategic decisions",
            ],
            &["lean_canvas", "unit_economics", "product_market_fit"],
            Severity::High,
        ),
        antipattern(
            "six_sigma",
            &[
                "Early stage startup",
                "Rapid iteration needed",
                "Small data sets",
                "Undefined processes",
            ],
            &[
                "Analysis paralysis",
                "Slowed innovation",
                "Over-optimization",
            ],
            &["lean_startup", "mvp_framework", "agile_methodology"],
            Severity::High,
        ),
        antipattern(
            "balanced_scorecard",
            &[
                "Team size < 50",
                "Strategy not yet defined",
                "No reliable KPI data",
            ],
            &[
                "Metric overload",
                "Bureaucratic reporting",
                "Scorecard detached from strategy",
            ],
            &["okr_framework", "aarrr_metrics"],
            Severity::Medium,
        ),
        antipattern(
            "stage_gate_process",
            &[
                "Fast-moving software market",
                "Single product team",
                "High uncertainty about the customer",
            ],
            &[
                "Slow time to market",
                "Gate theatre",
                "Killing promising ideas too early",
            ],
            &["lean_startup", "agile_methodology"],
            Severity::Medium,
        ),
        antipattern(
            "blue_ocean_strategy",
            &[
                "No validated core product",
                "Cash runway under 6 months",
            ],
            &[
                "Distraction from core business",
                "Unfunded strategic bets",
            ],
            &["competitive_positioning", "product_market_fit"],
            Severity::Medium,
        ),
        antipattern(
            "swot_analysis",
            &[
                "Used as the only strategic input",
                "Decision needs quantitative backing",
            ],
            &["Superficial conclusions", "List-making without prioritization"],
            &["porters_five_forces", "pestel_analysis"],
            Severity::Low,
        ),
        antipattern(
            "mckinsey_7s",
            &[
                "Team size < 20",
                "No organizational change underway",
            ],
            &["Over-engineered diagnosis", "Consulting overhead"],
            &["okr_framework"],
            Severity::Low,
        ),
        antipattern(
            "product_led_growth",
            &[
                "Complex enterprise sale with long procurement",
                "Product cannot deliver value without onboarding",
                "No self-serve motion",
            ],
            &[
                "Low activation",
                "Free users who never convert",
            ],
            &["customer_development", "aarrr_metrics"],
            Severity::Medium,
        ),
        antipattern(
            "lean_canvas",
            &[
                "Mature multi-product enterprise",
                "Portfolio-level decision",
            ],
            &["Oversimplified view of the business"],
            &["business_model_canvas", "bcg_matrix"],
            Severity::Low,
        ),
        antipattern(
            "scenario_planning",
            &[
                "Immediate operational crisis",
                "No leadership time for workshops",
            ],
            &["Planning that never reaches decisions"],
            &["burn_rate_runway", "swot_analysis"],
            Severity::Medium,
        ),
    ];

    let antipatterns: BTreeMap<String, FrameworkAntiPattern> = entries
        .into_iter()
        .map(|a| (a.framework_id.clone(), a))
        .collect();
    tracing::debug!(count = antipatterns.len(), "built framework antipatterns");
    antipatterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcg_antipattern_is_high_severity() {
        let antipatterns = build_antipatterns();
        let bcg = &antipatterns["bcg_matrix"];
        assert_eq!(bcg.severity, Severity::High);
        assert!(
            bcg.antipattern_conditions
                .contains(&"Single product company".to_string())
        );
        assert_eq!(
            bcg.alternative_frameworks,
            vec!["lean_canvas", "unit_economics", "product_market_fit"]
        );
    }

    #[test]
    fn test_every_antipattern_names_an_alternative() {
        for (id, a) in build_antipatterns() {
            assert!(!a.alternative_frameworks.is_empty(), "{id}");
            assert!(!a.antipattern_conditions.is_empty(), "{id}");
        }
    }
}
