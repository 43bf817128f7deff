//! Integrity checks and coverage statistics over a built catalog.

use crate::catalog::FrameworkCatalog;
use crate::catalog::types::{
    FrameworkAntiPattern, FrameworkEffectiveness, FrameworkRelationship, FrameworkTags,
};
use crate::config::ValidationConfig;
use crate::error::{CatalogError, Result};
use crate::taxonomy::{ComplexityTier, IndustryContext, ProblemArchetype, TemporalStage};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyField,
    TeamSizeRange,
    ScoreOutOfRange,
    NonPositiveDuration,
    KeyMismatch,
    UnknownReference,
    MissingConditions,
    FractionOutOfRange,
    NegativeRatio,
    Orphan,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueKind::EmptyField => "empty field",
            IssueKind::TeamSizeRange => "team size range",
            IssueKind::ScoreOutOfRange => "score out of range",
            IssueKind::NonPositiveDuration => "non-positive duration",
            IssueKind::KeyMismatch => "key mismatch",
            IssueKind::UnknownReference => "unknown reference",
            IssueKind::MissingConditions => "missing conditions",
            IssueKind::FractionOutOfRange => "fraction out of range",
            IssueKind::NegativeRatio => "negative ratio",
            IssueKind::Orphan => "orphan entry",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub framework_id: String,
    pub kind: IssueKind,
    pub message: String,
}

/// Counts gathered while walking the tags map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageStats {
    pub total_tags: usize,
    pub stage_coverage: BTreeMap<TemporalStage, usize>,
    pub problem_coverage: BTreeMap<ProblemArchetype, usize>,
    pub industry_coverage: BTreeMap<IndustryContext, usize>,
    pub complexity_distribution: BTreeMap<ComplexityTier, usize>,
    pub with_relationships: usize,
    pub with_antipattern: usize,
    pub with_effectiveness: usize,
    pub team_size_issues: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub coverage: CoverageStats,
    /// Tolerated ids referenced without a tags entry, with the frameworks
    /// that reference them
    pub external_references: BTreeMap<String, BTreeSet<String>>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for(&self, framework_id: &str) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.framework_id == framework_id)
            .collect()
    }

    pub fn frameworks_with_issues(&self) -> BTreeSet<&str> {
        self.issues.iter().map(|i| i.framework_id.as_str()).collect()
    }

    /// Err with a summary of the first issues when `strict` and not clean.
    pub fn enforce(&self, strict: bool) -> Result<()> {
        if !strict || self.is_clean() {
            return Ok(());
        }
        let sample: Vec<String> = self
            .issues
            .iter()
            .take(5)
            .map(|i| format!("{}: {}", i.framework_id, i.message))
            .collect();
        Err(CatalogError::Validation {
            message: format!(
                "{} issue(s) across {} framework(s): {}",
                self.issues.len(),
                self.frameworks_with_issues().len(),
                sample.join("; ")
            ),
        })
    }
}

struct Checker<'a> {
    catalog: &'a FrameworkCatalog,
    tolerated: BTreeSet<&'a str>,
    report: ValidationReport,
}

impl<'a> Checker<'a> {
    fn issue(&mut self, framework_id: &str, kind: IssueKind, message: String) {
        tracing::debug!(framework = framework_id, %kind, "{}", message);
        self.report.issues.push(ValidationIssue {
            framework_id: framework_id.to_string(),
            kind,
            message,
        });
    }

    fn check_reference(&mut self, owner: &str, referenced: &str, role: &str) {
        if self.catalog.contains(referenced) {
            return;
        }
        if self.tolerated.contains(referenced) {
            self.report
                .external_references
                .entry(referenced.to_string())
                .or_default()
                .insert(owner.to_string());
            return;
        }
        self.issue(
            owner,
            IssueKind::UnknownReference,
            format!("{role} '{referenced}' has no tags entry"),
        );
    }

    fn check_key(&mut self, key: &str, record_id: &str, map: &str) {
        if key != record_id {
            self.issue(
                key,
                IssueKind::KeyMismatch,
                format!("{map} record under '{key}' is for '{record_id}'"),
            );
        }
    }

    fn check_tags(&mut self, id: &str, tags: &FrameworkTags) {
        let empties = [
            ("temporal_stages", tags.temporal_stages.is_empty()),
            ("problem_archetypes", tags.problem_archetypes.is_empty()),
            ("decision_contexts", tags.decision_contexts.is_empty()),
            ("data_requirements", tags.data_requirements.is_empty()),
            ("outcome_types", tags.outcome_types.is_empty()),
            ("industry_contexts", tags.industry_contexts.is_empty()),
        ];
        for (field, empty) in empties {
            if empty {
                self.issue(id, IssueKind::EmptyField, format!("no {field} defined"));
            }
        }

        let coverage = &mut self.report.coverage;
        for stage in &tags.temporal_stages {
            *coverage.stage_coverage.entry(*stage).or_default() += 1;
        }
        for problem in &tags.problem_archetypes {
            *coverage.problem_coverage.entry(*problem).or_default() += 1;
        }
        for industry in &tags.industry_contexts {
            *coverage.industry_coverage.entry(*industry).or_default() += 1;
        }
        *coverage
            .complexity_distribution
            .entry(tags.complexity_tier)
            .or_default() += 1;

        if tags.team_size_min > tags.team_size_max {
            self.report.coverage.team_size_issues += 1;
            self.issue(
                id,
                IssueKind::TeamSizeRange,
                format!(
                    "team size min ({}) > max ({})",
                    tags.team_size_min, tags.team_size_max
                ),
            );
        }

        let scores = [
            ("ease_of_use", tags.ease_of_use),
            ("actionability", tags.actionability),
            ("accuracy", tags.accuracy),
            ("strategic_impact", tags.strategic_impact),
        ];
        for (field, score) in scores {
            if score > 100 {
                self.issue(
                    id,
                    IssueKind::ScoreOutOfRange,
                    format!("invalid {field}: {score}"),
                );
            }
        }

        if tags.time_to_value_days == 0 {
            self.issue(
                id,
                IssueKind::NonPositiveDuration,
                "time_to_value_days must be positive".to_string(),
            );
        }
        if tags.durability_months == 0 {
            self.issue(
                id,
                IssueKind::NonPositiveDuration,
                "durability_months must be positive".to_string(),
            );
        }
    }

    fn check_relationships(&mut self, key: &str, rels: &[FrameworkRelationship]) {
        for rel in rels {
            self.check_key(key, &rel.framework_id, "relationship");
            if rel.relationship_strength > 100 {
                self.issue(
                    key,
                    IssueKind::ScoreOutOfRange,
                    format!("invalid relationship_strength: {}", rel.relationship_strength),
                );
            }
            for related in &rel.related_framework_ids {
                let role = format!("{} target", rel.relationship_type);
                self.check_reference(key, related, &role);
            }
        }
    }

    fn check_antipattern(&mut self, key: &str, anti: &FrameworkAntiPattern) {
        self.check_key(key, &anti.framework_id, "antipattern");
        if anti.antipattern_conditions.is_empty() {
            self.issue(
                key,
                IssueKind::MissingConditions,
                "antipattern lists no conditions".to_string(),
            );
        }
        for alt in &anti.alternative_frameworks {
            self.check_reference(key, alt, "alternative");
        }
    }

    fn check_effectiveness(&mut self, key: &str, eff: &FrameworkEffectiveness) {
        self.check_key(key, &eff.framework_id, "effectiveness");
        let mut fractions = vec![
            ("success_rate".to_string(), eff.success_rate),
            ("confidence_level".to_string(), eff.confidence_level),
        ];
        fractions.extend(eff.fractions());
        for (label, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                self.issue(
                    key,
                    IssueKind::FractionOutOfRange,
                    format!("{label} = {value} outside 0-1"),
                );
            }
        }
        if eff.effort_return_ratio.is_nan() || eff.effort_return_ratio < 0.0 {
            self.issue(
                key,
                IssueKind::NegativeRatio,
                format!("effort_return_ratio = {}", eff.effort_return_ratio),
            );
        }
    }

    fn check_orphan(&mut self, key: &str, map: &str) {
        if !self.catalog.contains(key) {
            self.issue(
                key,
                IssueKind::Orphan,
                format!("{map} entry has no tags entry"),
            );
        }
    }
}

/// Walk every map of `catalog` and collect issues and coverage.
pub fn validate(catalog: &FrameworkCatalog, config: &ValidationConfig) -> ValidationReport {
    let mut checker = Checker {
        catalog,
        tolerated: config
            .tolerated_external_refs
            .iter()
            .map(String::as_str)
            .collect(),
        report: ValidationReport::default(),
    };

    checker.report.coverage.total_tags = catalog.len();
    for (id, tags) in catalog.tags_db() {
        checker.check_tags(id, tags);
        if catalog.relationships(id).is_some() {
            checker.report.coverage.with_relationships += 1;
        }
        if catalog.antipattern(id).is_some() {
            checker.report.coverage.with_antipattern += 1;
        }
        if catalog.effectiveness(id).is_some() {
            checker.report.coverage.with_effectiveness += 1;
        }
    }

    for (key, rels) in catalog.relationships_db() {
        checker.check_orphan(key, "relationship");
        checker.check_relationships(key, rels);
    }
    for (key, anti) in catalog.antipatterns_db() {
        checker.check_orphan(key, "antipattern");
        checker.check_antipattern(key, anti);
    }
    for (key, eff) in catalog.effectiveness_db() {
        checker.check_orphan(key, "effectiveness");
        checker.check_effectiveness(key, eff);
    }

    let report = checker.report;
    if report.is_clean() {
        tracing::info!(
            frameworks = report.coverage.total_tags,
            external_refs = report.external_references.len(),
            "catalog validation passed"
        );
    } else {
        tracing::warn!(
            issues = report.issues.len(),
            frameworks = report.frameworks_with_issues().len(),
            "catalog validation found issues"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_antipatterns, build_tags_database, catalog};
    use crate::taxonomy::{RelationshipType, Severity};

    fn broken_catalog() -> FrameworkCatalog {
        let all_tags = build_tags_database();
        let mut tags = BTreeMap::new();
        let mut swot = all_tags["swot_analysis"].clone();
        swot.team_size_min = 500;
        swot.team_size_max = 10;
        swot.ease_of_use = 140;
        swot.outcome_types.clear();
        tags.insert("swot_analysis".to_string(), swot);
        tags.insert("bcg_matrix".to_string(), all_tags["bcg_matrix"].clone());

        let mut relationships = BTreeMap::new();
        relationships.insert(
            "swot_analysis".to_string(),
            vec![FrameworkRelationship {
                framework_id: "swot_analysis".to_string(),
                relationship_type: RelationshipType::Complementary,
                related_framework_ids: vec![
                    "bcg_matrix".to_string(),
                    "made_up_framework".to_string(),
                    "ge_mckinsey_matrix".to_string(),
                ],
                relationship_strength: 120,
                notes: String::new(),
            }],
        );

        let mut antipatterns = BTreeMap::new();
        antipatterns.insert(
            "ghost".to_string(),
            FrameworkAntiPattern {
                framework_id: "ghost".to_string(),
                antipattern_conditions: vec![],
                negative_outcomes: vec![],
                alternative_frameworks: vec!["bcg_matrix".to_string()],
                severity: Severity::Low,
            },
        );
        let mut bcg_anti = build_antipatterns()["bcg_matrix"].clone();
        bcg_anti.framework_id = "not_bcg".to_string();
        antipatterns.insert("bcg_matrix".to_string(), bcg_anti);

        let mut effectiveness = BTreeMap::new();
        let mut eff = catalog().effectiveness("bcg_matrix").cloned().unwrap();
        eff.success_rate = 1.4;
        eff.effort_return_ratio = -1.0;
        eff.effectiveness_by_stage
            .insert(TemporalStage::Growth, -0.2);
        effectiveness.insert("bcg_matrix".to_string(), eff);

        FrameworkCatalog::from_parts(tags, relationships, antipatterns, effectiveness)
    }

    fn kinds(report: &ValidationReport, id: &str) -> Vec<IssueKind> {
        report.issues_for(id).iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_real_catalog_is_clean() {
        let report = validate(catalog(), &ValidationConfig::default());
        assert!(report.is_clean(), "{:?}", report.issues);
        assert!(report.external_references.contains_key("ge_mckinsey_matrix"));
        assert_eq!(report.coverage.total_tags, catalog().len());
        assert_eq!(report.coverage.team_size_issues, 0);
        assert!(report.enforce(true).is_ok());
    }

    #[test]
    fn test_external_refs_need_tolerance() {
        let config = ValidationConfig {
            tolerated_external_refs: vec![],
            strict: true,
        };
        let report = validate(catalog(), &config);
        assert!(report.external_references.is_empty());
        assert!(kinds(&report, "bcg_matrix").contains(&IssueKind::UnknownReference));
        assert!(matches!(
            report.enforce(config.strict),
            Err(CatalogError::Validation { .. })
        ));
    }

    #[test]
    fn test_broken_catalog_reports_each_problem() {
        let report = validate(&broken_catalog(), &ValidationConfig::default());

        let swot = kinds(&report, "swot_analysis");
        assert!(swot.contains(&IssueKind::TeamSizeRange));
        assert!(swot.contains(&IssueKind::ScoreOutOfRange));
        assert!(swot.contains(&IssueKind::EmptyField));
        assert!(swot.contains(&IssueKind::UnknownReference));
        assert_eq!(report.coverage.team_size_issues, 1);
        assert_eq!(
            report.external_references["ge_mckinsey_matrix"],
            BTreeSet::from(["swot_analysis".to_string()])
        );

        let ghost = kinds(&report, "ghost");
        assert!(ghost.contains(&IssueKind::Orphan));
        assert!(ghost.contains(&IssueKind::MissingConditions));

        let bcg = kinds(&report, "bcg_matrix");
        assert!(bcg.contains(&IssueKind::KeyMismatch));
        assert!(bcg.contains(&IssueKind::FractionOutOfRange));
        assert!(bcg.contains(&IssueKind::NegativeRatio));
        // alternatives of the real bcg antipattern are missing from this catalog
        assert!(bcg.contains(&IssueKind::UnknownReference));
    }

    #[test]
    fn test_enforce_only_fails_when_strict() {
        let report = validate(&broken_catalog(), &ValidationConfig::default());
        assert!(report.enforce(false).is_ok());
        let err = report.enforce(true).unwrap_err();
        assert!(err.to_string().contains("issue(s)"));
    }

    #[test]
    fn test_coverage_counts() {
        let report = validate(catalog(), &ValidationConfig::default());
        let coverage = &report.coverage;
        assert!(coverage.stage_coverage[&TemporalStage::PreFormation] > 0);
        assert_eq!(
            coverage.complexity_distribution.values().sum::<usize>(),
            coverage.total_tags
        );
        assert_eq!(coverage.with_antipattern, catalog().antipatterns_db().len());
        assert!(coverage.with_relationships > 0);
        assert!(coverage.with_effectiveness > 0);
    }
}
