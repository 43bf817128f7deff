//! Declared relationships between frameworks.

use super::types::FrameworkRelationship;
use crate::taxonomy::RelationshipType;
use std::collections::BTreeMap;

fn rel(
    framework_id: &str,
    relationship_type: RelationshipType,
    related: &[&str],
    relationship_strength: u8,
    notes: &str,
) -> FrameworkRelationship {
    FrameworkRelationship {
        framework_id: framework_id.to_string(),
        relationship_type,
        related_framework_ids: related.iter().map(|r| r.to_string()).collect(),
        relationship_strength,
        notes: notes.to_string(),
    }
}

pub fn build_relationships() -> BTreeMap<String, Vec<FrameworkRelationship>> {
    use RelationshipType::{Alternative, Complementary, Prerequisite, Progressive};

    let mut relationships = BTreeMap::new();

    relationships.insert(
        "lean_canvas".to_string(),
        vec![
            rel(
                "lean_canvas",
                Complementary,
                &["customer_development", "jobs_to_be_done"],
                90,
                "Both focus on early validation and customer understanding",
            ),
            rel(
                "lean_canvas",
                Progressive,
                &["business_model_canvas"],
                70,
                "Expand the one-page model once the core hypotheses hold",
            ),
        ],
    );

    relationships.insert(
        "bcg_matrix".to_string(),
        vec![
            rel(
                "bcg_matrix",
                Complementary,
                &["unit_economics", "ansoff_matrix"],
                80,
                "BCG helps portfolio decisions, unit economics helps individual product decisions",
            ),
            rel(
                "bcg_matrix",
                Alternative,
                &["ge_mckinsey_matrix", "three_horizons"],
                70,
                "Multi-factor portfolio views when share and growth alone mislead",
            ),
        ],
    );

    relationships.insert(
        "porters_five_forces".to_string(),
        vec![
            rel(
                "porters_five_forces",
                Prerequisite,
                &["competitive_positioning", "blue_ocean_strategy"],
                85,
                "Industry analysis should precede positioning decisions",
            ),
            rel(
                "porters_five_forces",
                Complementary,
                &["swot_analysis", "pestel_analysis"],
                82,
                "External analysis complements internal analysis",
            ),
        ],
    );

    relationships.insert(
        "growth_loops".to_string(),
        vec![rel(
            "growth_loops",
            Complementary,
            &["aarrr_metrics", "cohort_analysis"],
            87,
            "Growth loops provide the mechanism, AARRR provides the measurement",
        )],
    );

    relationships.insert(
        "aarrr_metrics".to_string(),
        vec![rel(
            "aarrr_metrics",
            Complementary,
            &["cohort_analysis", "viral_coefficient"],
            80,
            "Funnel stages read best alongside retention cohorts",
        )],
    );

    relationships.insert(
        "viral_coefficient".to_string(),
        vec![rel(
            "viral_coefficient",
            Complementary,
            &["network_effects"],
            85,
            "Both amplify growth through user connections",
        )],
    );

    relationships.insert(
        "blue_ocean_strategy".to_string(),
        vec![rel(
            "blue_ocean_strategy",
            Complementary,
            &["jobs_to_be_done", "value_proposition_canvas"],
            88,
            "Finding unmet jobs creates blue oceans",
        )],
    );

    relationships.insert(
        "jobs_to_be_done".to_string(),
        vec![
            rel(
                "jobs_to_be_done",
                Complementary,
                &["value_proposition_canvas", "customer_development"],
                85,
                "Natural pairing for customer-centric innovation",
            ),
            rel(
                "jobs_to_be_done",
                Prerequisite,
                &["kano_model", "mvp_framework"],
                75,
                "Understand the job before prioritizing features or scoping an MVP",
            ),
        ],
    );

    relationships.insert(
        "design_thinking".to_string(),
        vec![rel(
            "design_thinking",
            Complementary,
            &["lean_startup", "jobs_to_be_done"],
            90,
            "Human-centered design with rapid validation",
        )],
    );

    relationships.insert(
        "customer_development".to_string(),
        vec![rel(
            "customer_development",
            Prerequisite,
            &["product_market_fit"],
            85,
            "Discovery and validation come before measuring fit",
        )],
    );

    relationships.insert(
        "mvp_framework".to_string(),
        vec![rel(
            "mvp_framework",
            Progressive,
            &["product_market_fit"],
            80,
            "An MVP in market is the input to fit measurement",
        )],
    );

    relationships.insert(
        "product_market_fit".to_string(),
        vec![rel(
            "product_market_fit",
            Progressive,
            &["growth_loops", "unit_economics"],
            80,
            "Scale acquisition only after fit, and watch the unit economics as you do",
        )],
    );

    relationships.insert(
        "unit_economics".to_string(),
        vec![
            rel(
                "unit_economics",
                Complementary,
                &["ltv_cac_ratio", "cohort_analysis"],
                85,
                "LTV and CAC are the core unit economics inputs",
            ),
            rel(
                "unit_economics",
                Prerequisite,
                &["saas_metrics"],
                70,
                "Per-unit view first, company-level SaaS metrics second",
            ),
        ],
    );

    relationships.insert(
        "burn_rate_runway".to_string(),
        vec![rel(
            "burn_rate_runway",
            Complementary,
            &["break_even_analysis", "unit_economics"],
            75,
            "Runway sets the clock, break-even sets the target",
        )],
    );

    relationships.insert(
        "okr_framework".to_string(),
        vec![rel(
            "okr_framework",
            Complementary,
            &["balanced_scorecard"],
            85,
            "OKRs for focus, BSC for comprehensive tracking",
        )],
    );

    relationships.insert(
        "lean_methodology".to_string(),
        vec![rel(
            "lean_methodology",
            Complementary,
            &["six_sigma", "agile_methodology"],
            80,
            "Complementary approaches to operational excellence",
        )],
    );

    relationships.insert(
        "six_sigma".to_string(),
        vec![rel(
            "six_sigma",
            Alternative,
            &["lean_methodology"],
            65,
            "Lighter-weight process improvement for teams without statistical depth",
        )],
    );

    relationships.insert(
        "swot_analysis".to_string(),
        vec![rel(
            "swot_analysis",
            Progressive,
            &["porters_five_forces", "bcg_matrix"],
            65,
            "Move from a situation summary to structured industry and portfolio views",
        )],
    );

    relationships.insert(
        "tam_sam_som".to_string(),
        vec![rel(
            "tam_sam_som",
            Prerequisite,
            &["bcg_matrix", "ansoff_matrix"],
            70,
            "Market size and growth feed portfolio and growth-direction choices",
        )],
    );

    relationships.insert(
        "disruptive_innovation".to_string(),
        vec![rel(
            "disruptive_innovation",
            Complementary,
            &["three_horizons", "blue_ocean_strategy"],
            75,
            "Spot the threat, then fund the response across horizons",
        )],
    );

    tracing::debug!(count = relationships.len(), "built framework relationships");
    relationships
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_match_keys() {
        for (id, rels) in build_relationships() {
            assert!(!rels.is_empty(), "{id} has an empty relationship list");
            for r in rels {
                assert_eq!(r.framework_id, id);
            }
        }
    }

    #[test]
    fn test_bcg_references_external_matrix() {
        let rels = build_relationships();
        let alternatives: Vec<&str> = rels["bcg_matrix"]
            .iter()
            .filter(|r| r.relationship_type == RelationshipType::Alternative)
            .flat_map(|r| r.related_framework_ids.iter().map(String::as_str))
            .collect();
        assert!(alternatives.contains(&"ge_mckinsey_matrix"));
    }
}
