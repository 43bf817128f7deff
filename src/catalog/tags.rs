//! Hand-tagged core frameworks.
//!
//! Industry variants are generated in `variants`; `build_tags_database`
//! merges both.

use super::types::FrameworkTags;
use super::variants;
use crate::taxonomy::{
    ComplexityTier as C, DataRequirement as D, DecisionContext as Dc, IndustryContext as I,
    OutcomeType as O, ProblemArchetype as P, TemporalStage as S,
};
use std::collections::{BTreeMap, BTreeSet};

pub(crate) fn words(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

pub(crate) fn roles(list: &[&str]) -> Vec<String> {
    list.iter().map(|r| r.to_string()).collect()
}

/// Full tags database: core frameworks plus every industry variant.
pub fn build_tags_database() -> BTreeMap<String, FrameworkTags> {
    let mut tags_db = core_tags();
    let core = tags_db.len();
    for (id, tags) in variants::build_variant_tags() {
        // Core entries win over generated ones with the same id
        tags_db.entry(id).or_insert(tags);
    }
    tracing::debug!(
        core,
        variants = tags_db.len() - core,
        "built framework tags database"
    );
    tags_db
}

pub(crate) fn core_tags() -> BTreeMap<String, FrameworkTags> {
    let mut tags_db = BTreeMap::new();

    // Portfolio & competitive strategy
    tags_db.insert(
        "bcg_matrix".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::PortfolioOptimization, P::CompetitiveStrategy],
            decision_contexts: vec![Dc::Diagnostic, Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative, D::MarketData],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::StrategicClarity, O::CompetitiveAdvantage],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Portfolio Manager", "Board Member"]),
            team_size_min: 20,
            team_size_max: 10000,
            time_to_value_days: 14,
            durability_months: 18,
            ease_of_use: 70,
            actionability: 75,
            accuracy: 65,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "portfolio",
                "market share",
                "growth rate",
                "cash cow",
                "star",
                "question mark",
                "dog",
                "resource allocation",
            ]),
        },
    );

    tags_db.insert(
        "porters_five_forces".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::CompetitiveStrategy, P::MarketAnalysis],
            decision_contexts: vec![Dc::Diagnostic, Dc::Exploratory],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::StrategicClarity, O::CompetitiveAdvantage],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Consultant", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 21,
            durability_months: 24,
            ease_of_use: 75,
            actionability: 65,
            accuracy: 75,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: false,
            has_variants: true,
            keywords: words(&[
                "industry structure",
                "rivalry",
                "supplier power",
                "buyer power",
                "substitutes",
                "barriers to entry",
                "competition",
            ]),
        },
    );

    tags_db.insert(
        "swot_analysis".to_string(),
        FrameworkTags {
            temporal_stages: vec![
                S::Formation,
                S::Validation,
                S::Traction,
                S::Growth,
                S::Scale,
                S::Maturity,
            ],
            problem_archetypes: vec![P::CompetitiveStrategy, P::MarketAnalysis, P::RiskManagement],
            decision_contexts: vec![Dc::Diagnostic, Dc::Exploratory],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::PlugAndPlay,
            outcome_types: vec![O::StrategicClarity, O::RiskMitigation],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Founder", "Strategy Lead", "Team Lead"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 1,
            durability_months: 12,
            ease_of_use: 95,
            actionability: 55,
            accuracy: 50,
            strategic_impact: 60,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["strengths", "weaknesses", "opportunities", "threats", "situation"]),
        },
    );

    tags_db.insert(
        "pestel_analysis".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::MarketAnalysis, P::RiskManagement],
            decision_contexts: vec![Dc::Exploratory, Dc::Diagnostic],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Simple,
            outcome_types: vec![O::StrategicClarity, O::RiskMitigation],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Strategy Lead", "Consultant", "Policy Analyst"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 5,
            durability_months: 12,
            ease_of_use: 85,
            actionability: 50,
            accuracy: 60,
            strategic_impact: 65,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "political",
                "economic",
                "social",
                "technological",
                "environmental",
                "legal",
                "macro environment",
            ]),
        },
    );

    tags_db.insert(
        "ansoff_matrix".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::GrowthMechanics, P::PortfolioOptimization],
            decision_contexts: vec![Dc::Exploratory, Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Simple,
            outcome_types: vec![O::GrowthStrategy, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Head of Growth"]),
            team_size_min: 5,
            team_size_max: 10000,
            time_to_value_days: 7,
            durability_months: 18,
            ease_of_use: 85,
            actionability: 70,
            accuracy: 60,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "market penetration",
                "market development",
                "product development",
                "diversification",
                "growth",
            ]),
        },
    );

    tags_db.insert(
        "blue_ocean_strategy".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Growth, S::Maturity],
            problem_archetypes: vec![
                P::CompetitiveStrategy,
                P::InnovationManagement,
                P::BusinessModelDesign,
            ],
            decision_contexts: vec![Dc::Exploratory, Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Complex,
            outcome_types: vec![O::CompetitiveAdvantage, O::InnovationPipeline],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Innovation Lead"]),
            team_size_min: 5,
            team_size_max: 10000,
            time_to_value_days: 45,
            durability_months: 36,
            ease_of_use: 55,
            actionability: 70,
            accuracy: 60,
            strategic_impact: 90,
            requires_facilitator: true,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "value innovation",
                "strategy canvas",
                "eliminate reduce raise create",
                "uncontested market",
                "differentiation",
            ]),
        },
    );

    tags_db.insert(
        "competitive_positioning".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::CompetitiveStrategy, P::MarketAnalysis],
            decision_contexts: vec![Dc::Diagnostic, Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Simple,
            outcome_types: vec![O::CompetitiveAdvantage, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Product Marketing Lead", "CEO", "Product Manager"]),
            team_size_min: 1,
            team_size_max: 5000,
            time_to_value_days: 10,
            durability_months: 12,
            ease_of_use: 80,
            actionability: 75,
            accuracy: 65,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["positioning", "perceptual map", "differentiation", "category"]),
        },
    );

    tags_db.insert(
        "value_chain_analysis".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::OperationalExcellence, P::CompetitiveStrategy],
            decision_contexts: vec![Dc::Diagnostic],
            data_requirements: vec![D::BasicQuantitative, D::QualitativeOnly],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::OperationalImprovements, O::CompetitiveAdvantage],
            industry_contexts: vec![I::Manufacturing, I::Retail, I::ConsumerGoods, I::Hardware],
            typical_users: roles(&["COO", "Strategy Lead", "Operations Manager"]),
            team_size_min: 20,
            team_size_max: 10000,
            time_to_value_days: 14,
            durability_months: 24,
            ease_of_use: 65,
            actionability: 70,
            accuracy: 70,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "primary activities",
                "support activities",
                "margin",
                "value creation",
                "operations",
            ]),
        },
    );

    // Organization & performance management
    tags_db.insert(
        "mckinsey_7s".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::OrganizationalDesign, P::DigitalTransformation],
            decision_contexts: vec![Dc::Diagnostic, Dc::Evaluative],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Complex,
            outcome_types: vec![O::OrganizationalDesign, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "CHRO", "Transformation Lead", "Consultant"]),
            team_size_min: 50,
            team_size_max: 10000,
            time_to_value_days: 21,
            durability_months: 18,
            ease_of_use: 60,
            actionability: 60,
            accuracy: 65,
            strategic_impact: 80,
            requires_facilitator: true,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "strategy",
                "structure",
                "systems",
                "shared values",
                "style",
                "staff",
                "skills",
                "alignment",
            ]),
        },
    );

    tags_db.insert(
        "balanced_scorecard".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Scale, S::Maturity],
            problem_archetypes: vec![P::OperationalExcellence, P::OrganizationalDesign],
            decision_contexts: vec![Dc::Evaluative, Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Enterprise,
            outcome_types: vec![O::OperationalImprovements, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "CFO", "Strategy Office", "Board Member"]),
            team_size_min: 100,
            team_size_max: 10000,
            time_to_value_days: 60,
            durability_months: 24,
            ease_of_use: 45,
            actionability: 70,
            accuracy: 75,
            strategic_impact: 80,
            requires_facilitator: true,
            requires_software: true,
            has_variants: false,
            keywords: words(&[
                "financial perspective",
                "customer perspective",
                "internal process",
                "learning and growth",
                "kpi",
                "strategy map",
            ]),
        },
    );

    tags_db.insert(
        "okr_framework".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::OrganizationalDesign, P::OperationalExcellence],
            decision_contexts: vec![Dc::Prescriptive, Dc::Evaluative],
            data_requirements: vec![D::BasicQuantitative],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::TacticalActions, O::OrganizationalDesign],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "COO", "Team Lead", "Product Manager"]),
            team_size_min: 10,
            team_size_max: 10000,
            time_to_value_days: 30,
            durability_months: 12,
            ease_of_use: 75,
            actionability: 85,
            accuracy: 65,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["objectives", "key results", "alignment", "goal setting", "cadence"]),
        },
    );

    // Customer & product discovery
    tags_db.insert(
        "jobs_to_be_done".to_string(),
        FrameworkTags {
            temporal_stages: vec![
                S::PreFormation,
                S::Formation,
                S::Validation,
                S::Traction,
                S::Growth,
            ],
            problem_archetypes: vec![
                P::CustomerDiscovery,
                P::ProductMarketFit,
                P::InnovationManagement,
            ],
            decision_contexts: vec![Dc::Exploratory, Dc::Diagnostic],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CustomerInsights, O::InnovationPipeline],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "UX Researcher"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 14,
            durability_months: 36,
            ease_of_use: 65,
            actionability: 80,
            accuracy: 80,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "customer jobs",
                "switch interview",
                "progress",
                "hiring",
                "struggling moment",
                "needs",
            ]),
        },
    );

    tags_db.insert(
        "lean_canvas".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation],
            problem_archetypes: vec![P::BusinessModelDesign, P::ProductMarketFit],
            decision_contexts: vec![Dc::Exploratory, Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::PlugAndPlay,
            outcome_types: vec![O::StrategicClarity, O::TacticalActions],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "CEO", "Product Manager"]),
            team_size_min: 1,
            team_size_max: 50,
            time_to_value_days: 1,
            durability_months: 6,
            ease_of_use: 90,
            actionability: 80,
            accuracy: 60,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "problem",
                "solution",
                "unique value proposition",
                "unfair advantage",
                "key metrics",
                "one page",
            ]),
        },
    );

    tags_db.insert(
        "business_model_canvas".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::BusinessModelDesign, P::InnovationManagement],
            decision_contexts: vec![Dc::Exploratory, Dc::Diagnostic],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Simple,
            outcome_types: vec![O::StrategicClarity, O::InnovationPipeline],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "CEO", "Strategy Lead", "Consultant"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 3,
            durability_months: 12,
            ease_of_use: 85,
            actionability: 70,
            accuracy: 60,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "value proposition",
                "customer segments",
                "channels",
                "revenue streams",
                "cost structure",
                "key partners",
            ]),
        },
    );

    tags_db.insert(
        "value_proposition_canvas".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation],
            problem_archetypes: vec![P::CustomerDiscovery, P::ProductMarketFit],
            decision_contexts: vec![Dc::Exploratory, Dc::Diagnostic],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Simple,
            outcome_types: vec![O::CustomerInsights, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "Designer"]),
            team_size_min: 1,
            team_size_max: 1000,
            time_to_value_days: 3,
            durability_months: 12,
            ease_of_use: 85,
            actionability: 75,
            accuracy: 65,
            strategic_impact: 65,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["pains", "gains", "customer jobs", "pain relievers", "gain creators"]),
        },
    );

    tags_db.insert(
        "customer_development".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation, S::Traction],
            problem_archetypes: vec![P::CustomerDiscovery, P::ProductMarketFit],
            decision_contexts: vec![Dc::Exploratory, Dc::Evaluative],
            data_requirements: vec![D::QualitativeOnly, D::BasicQuantitative],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CustomerInsights, O::TacticalActions],
            industry_contexts: vec![I::B2bSaas, I::Marketplace, I::Hardware, I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "Head of Sales"]),
            team_size_min: 1,
            team_size_max: 100,
            time_to_value_days: 30,
            durability_months: 12,
            ease_of_use: 70,
            actionability: 85,
            accuracy: 80,
            strategic_impact: 80,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "customer discovery",
                "customer validation",
                "interviews",
                "get out of the building",
                "pivot",
            ]),
        },
    );

    tags_db.insert(
        "design_thinking".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation, S::Maturity],
            problem_archetypes: vec![P::InnovationManagement, P::CustomerDiscovery],
            decision_contexts: vec![Dc::Exploratory],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CustomerInsights, O::InnovationPipeline],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Designer", "Product Manager", "Innovation Lead"]),
            team_size_min: 3,
            team_size_max: 10000,
            time_to_value_days: 21,
            durability_months: 12,
            ease_of_use: 70,
            actionability: 75,
            accuracy: 65,
            strategic_impact: 70,
            requires_facilitator: true,
            requires_software: false,
            has_variants: false,
            keywords: words(&["empathize", "define", "ideate", "prototype", "test", "human centered"]),
        },
    );

    tags_db.insert(
        "lean_startup".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation, S::Traction],
            problem_archetypes: vec![P::ProductMarketFit, P::InnovationManagement],
            decision_contexts: vec![Dc::Exploratory, Dc::Evaluative],
            data_requirements: vec![D::QualitativeOnly, D::BasicQuantitative],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::TacticalActions, O::CustomerInsights],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "Innovation Lead"]),
            team_size_min: 1,
            team_size_max: 500,
            time_to_value_days: 30,
            durability_months: 9,
            ease_of_use: 75,
            actionability: 85,
            accuracy: 70,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "build measure learn",
                "validated learning",
                "pivot",
                "experiment",
                "innovation accounting",
            ]),
        },
    );

    tags_db.insert(
        "mvp_framework".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation],
            problem_archetypes: vec![P::ProductMarketFit, P::CustomerDiscovery],
            decision_contexts: vec![Dc::Prescriptive, Dc::Evaluative],
            data_requirements: vec![D::QualitativeOnly, D::BasicQuantitative],
            complexity_tier: C::Simple,
            outcome_types: vec![O::TacticalActions, O::CustomerInsights],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "CTO"]),
            team_size_min: 1,
            team_size_max: 100,
            time_to_value_days: 21,
            durability_months: 6,
            ease_of_use: 80,
            actionability: 90,
            accuracy: 65,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["minimum viable product", "prototype", "scope", "mvp", "pilot"]),
        },
    );

    tags_db.insert(
        "product_market_fit".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction],
            problem_archetypes: vec![P::ProductMarketFit, P::GrowthMechanics],
            decision_contexts: vec![Dc::Evaluative, Dc::Diagnostic],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CustomerInsights, O::GrowthStrategy],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Product Manager", "Head of Growth"]),
            team_size_min: 1,
            team_size_max: 200,
            time_to_value_days: 60,
            durability_months: 12,
            ease_of_use: 70,
            actionability: 80,
            accuracy: 75,
            strategic_impact: 90,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "pmf",
                "sean ellis test",
                "retention curve",
                "traction",
                "validation",
            ]),
        },
    );

    tags_db.insert(
        "kano_model".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::CustomerDiscovery, P::ProductMarketFit],
            decision_contexts: vec![Dc::Diagnostic, Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly, D::BasicQuantitative],
            complexity_tier: C::Simple,
            outcome_types: vec![O::CustomerInsights, O::TacticalActions],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Product Manager", "UX Researcher", "Designer"]),
            team_size_min: 3,
            team_size_max: 10000,
            time_to_value_days: 14,
            durability_months: 18,
            ease_of_use: 75,
            actionability: 75,
            accuracy: 70,
            strategic_impact: 60,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "must be",
                "performance",
                "delighters",
                "feature prioritization",
                "customer satisfaction",
            ]),
        },
    );

    // Unit economics & finance
    tags_db.insert(
        "unit_economics".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::UnitEconomicsOptimization, P::FinancialPlanning],
            decision_contexts: vec![Dc::Diagnostic, Dc::Evaluative],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Simple,
            outcome_types: vec![O::FinancialProjections, O::TacticalActions],
            industry_contexts: vec![I::B2bSaas, I::Marketplace, I::Ecommerce, I::Universal],
            typical_users: roles(&["CFO", "Founder", "Head of Finance", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 7,
            durability_months: 6,
            ease_of_use: 75,
            actionability: 85,
            accuracy: 80,
            strategic_impact: 80,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["ltv", "cac", "contribution margin", "payback", "margins"]),
        },
    );

    tags_db.insert(
        "ltv_cac_ratio".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::UnitEconomicsOptimization, P::GrowthMechanics],
            decision_contexts: vec![Dc::Evaluative, Dc::Diagnostic],
            data_requirements: vec![D::AdvancedMetrics],
            complexity_tier: C::Simple,
            outcome_types: vec![O::FinancialProjections, O::GrowthStrategy],
            industry_contexts: vec![I::B2bSaas, I::Ecommerce, I::Marketplace],
            typical_users: roles(&["CFO", "Head of Growth", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 3,
            durability_months: 6,
            ease_of_use: 80,
            actionability: 80,
            accuracy: 75,
            strategic_impact: 75,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["lifetime value", "acquisition cost", "ltv", "cac", "ratio"]),
        },
    );

    tags_db.insert(
        "burn_rate_runway".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::FinancialPlanning, P::RiskManagement],
            decision_contexts: vec![Dc::Evaluative, Dc::Predictive],
            data_requirements: vec![D::BasicQuantitative],
            complexity_tier: C::PlugAndPlay,
            outcome_types: vec![O::FinancialProjections, O::RiskMitigation],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "CFO", "Investor"]),
            team_size_min: 1,
            team_size_max: 500,
            time_to_value_days: 1,
            durability_months: 3,
            ease_of_use: 95,
            actionability: 85,
            accuracy: 85,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["burn rate", "runway", "cash flow", "months of cash"]),
        },
    );

    tags_db.insert(
        "saas_metrics".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::UnitEconomicsOptimization, P::GrowthMechanics],
            decision_contexts: vec![Dc::Evaluative, Dc::Diagnostic],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Simple,
            outcome_types: vec![O::FinancialProjections, O::GrowthStrategy],
            industry_contexts: vec![I::B2bSaas, I::EnterpriseSoftware],
            typical_users: roles(&["CFO", "Head of Revenue", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 7,
            durability_months: 6,
            ease_of_use: 75,
            actionability: 75,
            accuracy: 85,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: true,
            has_variants: false,
            keywords: words(&["mrr", "arr", "churn", "net revenue retention", "magic number"]),
        },
    );

    tags_db.insert(
        "break_even_analysis".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::FinancialPlanning, P::UnitEconomicsOptimization],
            decision_contexts: vec![Dc::Predictive, Dc::Evaluative],
            data_requirements: vec![D::BasicQuantitative],
            complexity_tier: C::PlugAndPlay,
            outcome_types: vec![O::FinancialProjections],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "CFO", "Finance Analyst"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 3,
            durability_months: 12,
            ease_of_use: 90,
            actionability: 75,
            accuracy: 80,
            strategic_impact: 55,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["fixed costs", "variable costs", "break even point", "profitability"]),
        },
    );

    // Growth
    tags_db.insert(
        "aarrr_metrics".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::GrowthMechanics, P::ProductMarketFit],
            decision_contexts: vec![Dc::Diagnostic, Dc::Evaluative],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Simple,
            outcome_types: vec![O::GrowthStrategy, O::CustomerInsights],
            industry_contexts: vec![I::B2bSaas, I::Marketplace, I::Ecommerce, I::Universal],
            typical_users: roles(&["Head of Growth", "Product Manager", "Marketing Lead"]),
            team_size_min: 1,
            team_size_max: 1000,
            time_to_value_days: 7,
            durability_months: 6,
            ease_of_use: 85,
            actionability: 80,
            accuracy: 75,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: true,
            has_variants: false,
            keywords: words(&[
                "acquisition",
                "activation",
                "retention",
                "referral",
                "revenue",
                "pirate metrics",
                "funnel",
            ]),
        },
    );

    tags_db.insert(
        "growth_loops".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::GrowthMechanics],
            decision_contexts: vec![Dc::Diagnostic, Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::GrowthStrategy],
            industry_contexts: vec![I::B2bSaas, I::Marketplace, I::Universal],
            typical_users: roles(&["Head of Growth", "Product Manager", "CEO"]),
            team_size_min: 5,
            team_size_max: 5000,
            time_to_value_days: 14,
            durability_months: 12,
            ease_of_use: 65,
            actionability: 80,
            accuracy: 70,
            strategic_impact: 80,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["compounding", "flywheel", "acquisition loop", "content loop", "growth"]),
        },
    );

    tags_db.insert(
        "product_led_growth".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::GrowthMechanics, P::BusinessModelDesign],
            decision_contexts: vec![Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative, D::AdvancedMetrics],
            complexity_tier: C::Complex,
            outcome_types: vec![O::GrowthStrategy, O::TacticalActions],
            industry_contexts: vec![I::B2bSaas, I::EnterpriseSoftware],
            typical_users: roles(&["CEO", "Head of Product", "Head of Growth"]),
            team_size_min: 10,
            team_size_max: 5000,
            time_to_value_days: 30,
            durability_months: 18,
            ease_of_use: 55,
            actionability: 75,
            accuracy: 70,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: true,
            has_variants: false,
            keywords: words(&["freemium", "self serve", "activation", "product qualified lead", "plg"]),
        },
    );

    tags_db.insert(
        "viral_coefficient".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth],
            problem_archetypes: vec![P::GrowthMechanics],
            decision_contexts: vec![Dc::Evaluative, Dc::Predictive],
            data_requirements: vec![D::AdvancedMetrics],
            complexity_tier: C::Simple,
            outcome_types: vec![O::GrowthStrategy],
            industry_contexts: vec![I::Marketplace, I::ConsumerGoods, I::Ecommerce],
            typical_users: roles(&["Head of Growth", "Data Analyst"]),
            team_size_min: 1,
            team_size_max: 1000,
            time_to_value_days: 7,
            durability_months: 9,
            ease_of_use: 75,
            actionability: 65,
            accuracy: 70,
            strategic_impact: 60,
            requires_facilitator: false,
            requires_software: true,
            has_variants: false,
            keywords: words(&["k factor", "referral", "invites", "viral loop", "cycle time"]),
        },
    );

    tags_db.insert(
        "network_effects".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Validation, S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::GrowthMechanics, P::CompetitiveStrategy],
            decision_contexts: vec![Dc::Diagnostic, Dc::Predictive],
            data_requirements: vec![D::QualitativeOnly, D::AdvancedMetrics],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CompetitiveAdvantage, O::GrowthStrategy],
            industry_contexts: vec![I::Marketplace, I::B2bSaas, I::Fintech],
            typical_users: roles(&["CEO", "Strategy Lead", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 30,
            durability_months: 36,
            ease_of_use: 60,
            actionability: 60,
            accuracy: 65,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["two sided", "liquidity", "defensibility", "critical mass", "platform"]),
        },
    );

    // Market sizing & analytics
    tags_db.insert(
        "tam_sam_som".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::PreFormation, S::Formation, S::Validation, S::Growth],
            problem_archetypes: vec![P::MarketAnalysis, P::FinancialPlanning],
            decision_contexts: vec![Dc::Exploratory, Dc::Predictive],
            data_requirements: vec![D::MarketData, D::BasicQuantitative],
            complexity_tier: C::Simple,
            outcome_types: vec![O::FinancialProjections, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["Founder", "Investor", "Strategy Lead"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 3,
            durability_months: 12,
            ease_of_use: 80,
            actionability: 55,
            accuracy: 55,
            strategic_impact: 65,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&[
                "total addressable market",
                "serviceable market",
                "market size",
                "tam",
                "bottom up sizing",
            ]),
        },
    );

    tags_db.insert(
        "cohort_analysis".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::GrowthMechanics, P::UnitEconomicsOptimization],
            decision_contexts: vec![Dc::Diagnostic, Dc::Evaluative],
            data_requirements: vec![D::AdvancedMetrics],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::CustomerInsights, O::FinancialProjections],
            industry_contexts: vec![I::B2bSaas, I::Ecommerce, I::Marketplace, I::Fintech],
            typical_users: roles(&["Data Analyst", "Head of Growth", "CFO"]),
            team_size_min: 5,
            team_size_max: 10000,
            time_to_value_days: 7,
            durability_months: 6,
            ease_of_use: 60,
            actionability: 75,
            accuracy: 85,
            strategic_impact: 70,
            requires_facilitator: false,
            requires_software: true,
            has_variants: false,
            keywords: words(&["cohort", "retention", "churn", "vintage", "retention curve"]),
        },
    );

    // Innovation & operations
    tags_db.insert(
        "stage_gate_process".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Scale, S::Maturity],
            problem_archetypes: vec![P::InnovationManagement, P::RiskManagement],
            decision_contexts: vec![Dc::Evaluative, Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative, D::MarketData],
            complexity_tier: C::Enterprise,
            outcome_types: vec![O::InnovationPipeline, O::RiskMitigation],
            industry_contexts: vec![I::Manufacturing, I::ConsumerGoods, I::Biotech, I::Hardware],
            typical_users: roles(&["R&D Director", "Portfolio Manager", "Innovation Lead"]),
            team_size_min: 100,
            team_size_max: 10000,
            time_to_value_days: 60,
            durability_months: 24,
            ease_of_use: 50,
            actionability: 70,
            accuracy: 70,
            strategic_impact: 70,
            requires_facilitator: true,
            requires_software: true,
            has_variants: false,
            keywords: words(&["gates", "new product development", "go kill", "pipeline", "r&d"]),
        },
    );

    tags_db.insert(
        "lean_methodology".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::OperationalExcellence],
            decision_contexts: vec![Dc::Diagnostic, Dc::Prescriptive],
            data_requirements: vec![D::BasicQuantitative],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::OperationalImprovements],
            industry_contexts: vec![I::Manufacturing, I::Services, I::Retail, I::Universal],
            typical_users: roles(&["COO", "Operations Manager", "Process Engineer"]),
            team_size_min: 10,
            team_size_max: 10000,
            time_to_value_days: 30,
            durability_months: 36,
            ease_of_use: 65,
            actionability: 80,
            accuracy: 70,
            strategic_impact: 65,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["waste", "kaizen", "value stream", "continuous improvement", "lean"]),
        },
    );

    tags_db.insert(
        "agile_methodology".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Traction, S::Growth, S::Scale],
            problem_archetypes: vec![P::OperationalExcellence, P::OrganizationalDesign],
            decision_contexts: vec![Dc::Prescriptive],
            data_requirements: vec![D::QualitativeOnly],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::OperationalImprovements, O::TacticalActions],
            industry_contexts: vec![I::B2bSaas, I::EnterpriseSoftware, I::Fintech, I::Universal],
            typical_users: roles(&["CTO", "Engineering Manager", "Product Manager"]),
            team_size_min: 3,
            team_size_max: 10000,
            time_to_value_days: 14,
            durability_months: 24,
            ease_of_use: 70,
            actionability: 85,
            accuracy: 65,
            strategic_impact: 60,
            requires_facilitator: false,
            requires_software: true,
            has_variants: true,
            keywords: words(&["sprints", "scrum", "kanban", "iteration", "backlog"]),
        },
    );

    tags_db.insert(
        "six_sigma".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Scale, S::Maturity],
            problem_archetypes: vec![P::OperationalExcellence, P::RiskManagement],
            decision_contexts: vec![Dc::Diagnostic, Dc::Evaluative],
            data_requirements: vec![D::AdvancedMetrics, D::BasicQuantitative],
            complexity_tier: C::Enterprise,
            outcome_types: vec![O::OperationalImprovements, O::RiskMitigation],
            industry_contexts: vec![I::Manufacturing, I::Healthtech, I::Services],
            typical_users: roles(&["Quality Director", "COO", "Black Belt"]),
            team_size_min: 100,
            team_size_max: 10000,
            time_to_value_days: 90,
            durability_months: 48,
            ease_of_use: 35,
            actionability: 75,
            accuracy: 90,
            strategic_impact: 65,
            requires_facilitator: true,
            requires_software: true,
            has_variants: false,
            keywords: words(&["dmaic", "defects", "variation", "quality", "statistical process control"]),
        },
    );

    // Foresight
    tags_db.insert(
        "scenario_planning".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::RiskManagement, P::MarketAnalysis],
            decision_contexts: vec![Dc::Predictive, Dc::Exploratory],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Complex,
            outcome_types: vec![O::RiskMitigation, O::StrategicClarity],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Board Member"]),
            team_size_min: 20,
            team_size_max: 10000,
            time_to_value_days: 30,
            durability_months: 24,
            ease_of_use: 55,
            actionability: 55,
            accuracy: 60,
            strategic_impact: 80,
            requires_facilitator: true,
            requires_software: false,
            has_variants: false,
            keywords: words(&["uncertainty", "driving forces", "futures", "scenarios", "forecast"]),
        },
    );

    tags_db.insert(
        "disruptive_innovation".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Formation, S::Validation, S::Maturity],
            problem_archetypes: vec![P::InnovationManagement, P::CompetitiveStrategy],
            decision_contexts: vec![Dc::Diagnostic, Dc::Predictive],
            data_requirements: vec![D::QualitativeOnly, D::MarketData],
            complexity_tier: C::Moderate,
            outcome_types: vec![O::InnovationPipeline, O::CompetitiveAdvantage],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Innovation Lead", "Investor"]),
            team_size_min: 1,
            team_size_max: 10000,
            time_to_value_days: 30,
            durability_months: 36,
            ease_of_use: 60,
            actionability: 55,
            accuracy: 65,
            strategic_impact: 85,
            requires_facilitator: false,
            requires_software: false,
            has_variants: false,
            keywords: words(&["low end", "new market", "incumbent", "overshoot", "disruption"]),
        },
    );

    tags_db.insert(
        "three_horizons".to_string(),
        FrameworkTags {
            temporal_stages: vec![S::Growth, S::Scale, S::Maturity],
            problem_archetypes: vec![P::InnovationManagement, P::PortfolioOptimization],
            decision_contexts: vec![Dc::Prescriptive, Dc::Exploratory],
            data_requirements: vec![D::QualitativeOnly, D::BasicQuantitative],
            complexity_tier: C::Complex,
            outcome_types: vec![O::InnovationPipeline, O::GrowthStrategy],
            industry_contexts: vec![I::Universal],
            typical_users: roles(&["CEO", "Strategy Lead", "Portfolio Manager"]),
            team_size_min: 50,
            team_size_max: 10000,
            time_to_value_days: 45,
            durability_months: 36,
            ease_of_use: 60,
            actionability: 60,
            accuracy: 60,
            strategic_impact: 85,
            requires_facilitator: true,
            requires_software: false,
            has_variants: false,
            keywords: words(&["core business", "emerging business", "options", "horizon", "portfolio"]),
        },
    );

    tags_db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcg_matrix_tags() {
        let db = core_tags();
        let bcg = &db["bcg_matrix"];
        assert_eq!(bcg.team_size_min, 20);
        assert_eq!(bcg.team_size_max, 10000);
        assert_eq!(bcg.ease_of_use, 70);
        assert_eq!(bcg.strategic_impact, 85);
        assert!(!bcg.requires_facilitator);
        assert_eq!(bcg.complexity_tier, C::Moderate);
    }

    #[test]
    fn test_core_entries_survive_variant_merge() {
        let full = build_tags_database();
        for (id, tags) in core_tags() {
            assert_eq!(full.get(&id), Some(&tags), "core entry {id} changed");
        }
        assert!(full.len() > core_tags().len());
    }

    #[test]
    fn test_every_core_entry_has_keywords_and_users() {
        for (id, tags) in core_tags() {
            assert!(!tags.keywords.is_empty(), "{id} has no keywords");
            assert!(!tags.typical_users.is_empty(), "{id} has no typical users");
        }
    }
}
