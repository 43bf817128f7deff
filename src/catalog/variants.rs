//! Industry variants generated from one template per family.
//!
//! A variant id is `<family>_<industry token>`, e.g.
//! `competitive_dynamics_aerospace`. Variants only ever carry tags; the
//! relationship, antipattern and effectiveness maps do not cover them.

use super::tags::{roles, words};
use super::types::FrameworkTags;
use crate::taxonomy::{
    ComplexityTier as C, DataRequirement as D, DecisionContext as Dc, IndustryContext as I,
    OutcomeType as O, ProblemArchetype as P, TemporalStage as S,
};
use std::collections::BTreeMap;

/// A family of generated frameworks sharing one tag template.
pub struct VariantFamily {
    pub prefix: &'static str,
    template: fn(&str, I) -> FrameworkTags,
}

impl VariantFamily {
    pub fn tags_for(&self, token: &str, industry: I) -> FrameworkTags {
        (self.template)(token, industry)
    }
}

pub const FAMILIES: &[VariantFamily] = &[
    VariantFamily {
        prefix: "competitive_dynamics",
        template: competitive_dynamics,
    },
    VariantFamily {
        prefix: "strategy_execution",
        template: strategy_execution,
    },
    VariantFamily {
        prefix: "market_entry",
        template: market_entry,
    },
];

/// Industry tokens and the vocabulary entry each one rolls up to.
/// Segment and market-shape tokens with no single industry map to universal.
pub const INDUSTRY_TOKENS: &[(&str, I)] = &[
    ("technology", I::EnterpriseSoftware),
    ("healthcare", I::Healthtech),
    ("finance", I::Fintech),
    ("retail", I::Retail),
    ("manufacturing", I::Manufacturing),
    ("education", I::Edtech),
    ("energy", I::Cleantech),
    ("transportation", I::Services),
    ("hospitality", I::Services),
    ("media", I::ConsumerGoods),
    ("telecommunications", I::EnterpriseSoftware),
    ("pharma", I::Biotech),
    ("automotive", I::Manufacturing),
    ("aerospace", I::Manufacturing),
    ("agriculture", I::ConsumerGoods),
    ("construction", I::Services),
    ("logistics", I::Services),
    ("ecommerce", I::Ecommerce),
    ("saas", I::B2bSaas),
    ("consulting", I::Services),
    ("insurance", I::Fintech),
    ("real_estate", I::Services),
    ("gaming", I::ConsumerGoods),
    ("sports", I::ConsumerGoods),
    ("entertainment", I::ConsumerGoods),
    ("startups", I::Universal),
    ("enterprises", I::Universal),
    ("smes", I::Universal),
    ("nonprofits", I::Services),
    ("government", I::Services),
    ("b2b", I::B2bSaas),
    ("b2c", I::ConsumerGoods),
    ("d2c", I::Ecommerce),
    ("marketplaces", I::Marketplace),
    ("platforms", I::Marketplace),
    ("digital", I::Universal),
    ("mobile", I::ConsumerGoods),
    ("cloud", I::EnterpriseSoftware),
    ("ai_ml", I::EnterpriseSoftware),
    ("blockchain", I::Fintech),
    ("remote", I::Universal),
    ("hybrid", I::Universal),
    ("global", I::Universal),
    ("local", I::Universal),
    ("emerging_markets", I::Universal),
];

pub fn build_variant_tags() -> BTreeMap<String, FrameworkTags> {
    let mut out = BTreeMap::new();
    for family in FAMILIES {
        for (token, industry) in INDUSTRY_TOKENS {
            out.insert(
                format!("{}_{}", family.prefix, token),
                family.tags_for(token, *industry),
            );
        }
    }
    out
}

/// Ids generated for `family`, in token order. Empty for an unknown family.
pub fn variant_ids(family: &str) -> Vec<String> {
    if !FAMILIES.iter().any(|f| f.prefix == family) {
        return Vec::new();
    }
    INDUSTRY_TOKENS
        .iter()
        .map(|(token, _)| format!("{family}_{token}"))
        .collect()
}

/// Family prefix when `id` is a generated variant id.
pub fn family_of(id: &str) -> Option<&'static str> {
    FAMILIES.iter().map(|f| f.prefix).find(|prefix| {
        id.strip_prefix(*prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|token| INDUSTRY_TOKENS.iter().any(|(t, _)| *t == token))
    })
}

pub fn is_variant_id(id: &str) -> bool {
    family_of(id).is_some()
}

fn industry_keywords(token: &str, industry: I) -> [String; 2] {
    [token.replace('_', " "), industry.as_str().replace('_', " ")]
}

fn competitive_dynamics(token: &str, industry: I) -> FrameworkTags {
    let mut keywords = words(&["competitive dynamics", "competition", "rivalry", "market moves"]);
    keywords.extend(industry_keywords(token, industry));
    FrameworkTags {
        temporal_stages: vec![S::Traction, S::Growth, S::Scale, S::Maturity],
        problem_archetypes: vec![P::CompetitiveStrategy, P::MarketAnalysis],
        decision_contexts: vec![Dc::Diagnostic, Dc::Predictive],
        data_requirements: vec![D::QualitativeOnly, D::MarketData],
        complexity_tier: C::Moderate,
        outcome_types: vec![O::CompetitiveAdvantage, O::StrategicClarity],
        industry_contexts: vec![industry],
        typical_users: roles(&["CEO", "Strategy Lead", "Competitive Intelligence Analyst"]),
        team_size_min: 5,
        team_size_max: 10000,
        time_to_value_days: 21,
        durability_months: 12,
        ease_of_use: 65,
        actionability: 70,
        accuracy: 70,
        strategic_impact: 80,
        requires_facilitator: false,
        requires_software: false,
        has_variants: true,
        keywords,
    }
}

fn strategy_execution(token: &str, industry: I) -> FrameworkTags {
    let mut keywords = words(&["strategy execution", "implementation", "alignment", "cadence"]);
    keywords.extend(industry_keywords(token, industry));
    FrameworkTags {
        temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
        problem_archetypes: vec![P::OperationalExcellence, P::OrganizationalDesign],
        decision_contexts: vec![Dc::Prescriptive, Dc::Evaluative],
        data_requirements: vec![D::BasicQuantitative],
        complexity_tier: C::Complex,
        outcome_types: vec![O::TacticalActions, O::OperationalImprovements],
        industry_contexts: vec![industry],
        typical_users: roles(&["COO", "Strategy Office", "Program Manager"]),
        team_size_min: 20,
        team_size_max: 10000,
        time_to_value_days: 30,
        durability_months: 18,
        ease_of_use: 60,
        actionability: 85,
        accuracy: 65,
        strategic_impact: 75,
        requires_facilitator: true,
        requires_software: false,
        has_variants: true,
        keywords,
    }
}

fn market_entry(token: &str, industry: I) -> FrameworkTags {
    let mut keywords = words(&["market entry", "expansion", "entry mode", "go to market"]);
    keywords.extend(industry_keywords(token, industry));
    FrameworkTags {
        temporal_stages: vec![S::Validation, S::Traction, S::Growth],
        problem_archetypes: vec![P::MarketAnalysis, P::GrowthMechanics, P::RiskManagement],
        decision_contexts: vec![Dc::Exploratory, Dc::Prescriptive],
        data_requirements: vec![D::MarketData, D::BasicQuantitative],
        complexity_tier: C::Moderate,
        outcome_types: vec![O::GrowthStrategy, O::RiskMitigation],
        industry_contexts: vec![industry],
        typical_users: roles(&["CEO", "Head of Expansion", "Strategy Lead"]),
        team_size_min: 5,
        team_size_max: 10000,
        time_to_value_days: 30,
        durability_months: 12,
        ease_of_use: 65,
        actionability: 75,
        accuracy: 60,
        strategic_impact: 80,
        requires_facilitator: false,
        requires_software: false,
        has_variants: true,
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_covers_every_token() {
        let tags = build_variant_tags();
        assert_eq!(tags.len(), FAMILIES.len() * INDUSTRY_TOKENS.len());
        let aero = &tags["competitive_dynamics_aerospace"];
        assert_eq!(aero.industry_contexts, vec![I::Manufacturing]);
        assert!(aero.has_variants);
        assert!(aero.keywords.contains("aerospace"));
    }

    #[test]
    fn test_variant_ids_and_family_lookup() {
        let ids = variant_ids("market_entry");
        assert_eq!(ids.len(), INDUSTRY_TOKENS.len());
        assert!(ids.contains(&"market_entry_healthcare".to_string()));
        assert!(variant_ids("not_a_family").is_empty());

        assert_eq!(
            family_of("strategy_execution_emerging_markets"),
            Some("strategy_execution")
        );
        assert_eq!(family_of("strategy_execution_moon_base"), None);
        assert!(!is_variant_id("bcg_matrix"));
    }

    #[test]
    fn test_segment_tokens_are_universal() {
        let tags = build_variant_tags();
        assert_eq!(
            tags["market_entry_startups"].industry_contexts,
            vec![I::Universal]
        );
        assert_eq!(
            tags["competitive_dynamics_telecommunications"].industry_contexts,
            vec![I::EnterpriseSoftware]
        );
        assert_eq!(
            tags["strategy_execution_finance"].industry_contexts,
            vec![I::Fintech]
        );
    }

    #[test]
    fn test_token_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for (token, _) in INDUSTRY_TOKENS {
            assert!(seen.insert(*token), "duplicate token {token}");
        }
    }
}
