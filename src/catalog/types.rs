//! Record types held by the catalog.

use crate::taxonomy::{
    ComplexityTier, DataRequirement, DecisionContext, IndustryContext, OutcomeType,
    ProblemArchetype, RelationshipType, Severity, TeamSizeBucket, TemporalStage,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Descriptive and scoring attributes of one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkTags {
    pub temporal_stages: Vec<TemporalStage>,
    pub problem_archetypes: Vec<ProblemArchetype>,
    pub decision_contexts: Vec<DecisionContext>,
    pub data_requirements: Vec<DataRequirement>,
    pub complexity_tier: ComplexityTier,
    pub outcome_types: Vec<OutcomeType>,
    pub industry_contexts: Vec<IndustryContext>,
    /// Role names, e.g. "CEO", "Strategy Lead"
    pub typical_users: Vec<String>,
    pub team_size_min: u32,
    pub team_size_max: u32,
    pub time_to_value_days: u32,
    pub durability_months: u32,
    // Suitability scores, 0-100
    pub ease_of_use: u8,
    pub actionability: u8,
    pub accuracy: u8,
    pub strategic_impact: u8,
    pub requires_facilitator: bool,
    pub requires_software: bool,
    pub has_variants: bool,
    pub keywords: BTreeSet<String>,
}

impl FrameworkTags {
    pub fn applies_to_stage(&self, stage: TemporalStage) -> bool {
        self.temporal_stages.contains(&stage)
    }

    /// True when the framework lists the industry or is tagged universal.
    pub fn applies_to_industry(&self, industry: IndustryContext) -> bool {
        self.industry_contexts
            .iter()
            .any(|i| *i == industry || *i == IndustryContext::Universal)
    }

    pub fn fits_team_size(&self, team_size: u32) -> bool {
        (self.team_size_min..=self.team_size_max).contains(&team_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkRelationship {
    pub framework_id: String,
    pub relationship_type: RelationshipType,
    pub related_framework_ids: Vec<String>,
    /// 0-100
    pub relationship_strength: u8,
    pub notes: String,
}

/// Conditions under which a framework should not be applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkAntiPattern {
    pub framework_id: String,
    pub antipattern_conditions: Vec<String>,
    pub negative_outcomes: Vec<String>,
    pub alternative_frameworks: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkEffectiveness {
    pub framework_id: String,
    /// 0.0-1.0
    pub success_rate: f64,
    pub time_to_impact_days: u32,
    pub effort_return_ratio: f64,
    pub durability_months: u32,
    pub effectiveness_by_stage: BTreeMap<TemporalStage, f64>,
    pub effectiveness_by_industry: BTreeMap<IndustryContext, f64>,
    pub effectiveness_by_team_size: BTreeMap<TeamSizeBucket, f64>,
    pub success_factors: Vec<String>,
    pub failure_factors: Vec<String>,
    /// Number of observations behind the figures
    pub data_points: u32,
    /// 0.0-1.0
    pub confidence_level: f64,
}

impl FrameworkEffectiveness {
    /// Every breakdown fraction with a label naming where it came from.
    pub fn fractions(&self) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        for (stage, v) in &self.effectiveness_by_stage {
            out.push((format!("stage:{stage}"), *v));
        }
        for (industry, v) in &self.effectiveness_by_industry {
            out.push((format!("industry:{industry}"), *v));
        }
        for (bucket, v) in &self.effectiveness_by_team_size {
            out.push((format!("team_size:{bucket}"), *v));
        }
        out
    }
}

/// Everything the catalog knows about one framework id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameworkProfile<'a> {
    pub framework_id: &'a str,
    pub tags: Option<&'a FrameworkTags>,
    pub relationships: &'a [FrameworkRelationship],
    pub antipattern: Option<&'a FrameworkAntiPattern>,
    pub effectiveness: Option<&'a FrameworkEffectiveness>,
}
