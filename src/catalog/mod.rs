//! Catalog module: the four framework maps and read-only access to them.
//! Built once, never mutated.

pub mod antipatterns;
pub mod effectiveness;
pub mod graph;
pub mod relationships;
pub mod tags;
pub mod types;
pub mod variants;

pub use antipatterns::build_antipatterns;
pub use effectiveness::build_effectiveness;
pub use relationships::build_relationships;
pub use tags::build_tags_database;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::taxonomy::{IndustryContext, TemporalStage};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use types::{
    FrameworkAntiPattern, FrameworkEffectiveness, FrameworkProfile, FrameworkRelationship,
    FrameworkTags,
};

/// Minimum Jaro-Winkler similarity for an id to be offered as a suggestion
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// The tags, relationship, antipattern and effectiveness maps, keyed by
/// framework id. Coverage differs between maps; a missing key means no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkCatalog {
    tags: BTreeMap<String, FrameworkTags>,
    relationships: BTreeMap<String, Vec<FrameworkRelationship>>,
    antipatterns: BTreeMap<String, FrameworkAntiPattern>,
    effectiveness: BTreeMap<String, FrameworkEffectiveness>,
}

static CATALOG: Lazy<FrameworkCatalog> = Lazy::new(|| {
    let catalog = FrameworkCatalog::build();
    tracing::info!(
        frameworks = catalog.tags.len(),
        relationships = catalog.relationships.len(),
        antipatterns = catalog.antipatterns.len(),
        effectiveness = catalog.effectiveness.len(),
        "framework catalog loaded"
    );
    catalog
});

/// Shared catalog, built on first access.
pub fn catalog() -> &'static FrameworkCatalog {
    &CATALOG
}

/// "competitive_dynamics_aerospace" -> "Competitive Dynamics Aerospace"
pub fn display_name(framework_id: &str) -> String {
    framework_id
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl FrameworkCatalog {
    /// Full catalog, variants included.
    pub fn build() -> Self {
        Self::from_parts(
            build_tags_database(),
            build_relationships(),
            build_antipatterns(),
            build_effectiveness(),
        )
    }

    pub fn with_options(options: &CatalogConfig) -> Self {
        if options.include_variants {
            return Self::build();
        }
        Self::from_parts(
            tags::core_tags(),
            build_relationships(),
            build_antipatterns(),
            build_effectiveness(),
        )
    }

    /// Assemble a catalog from pre-built maps. No cross-reference checks are
    /// made here; see `validation::validate`.
    pub fn from_parts(
        tags: BTreeMap<String, FrameworkTags>,
        relationships: BTreeMap<String, Vec<FrameworkRelationship>>,
        antipatterns: BTreeMap<String, FrameworkAntiPattern>,
        effectiveness: BTreeMap<String, FrameworkEffectiveness>,
    ) -> Self {
        Self {
            tags,
            relationships,
            antipatterns,
            effectiveness,
        }
    }

    pub fn tags(&self, id: &str) -> Option<&FrameworkTags> {
        self.tags.get(id)
    }

    pub fn relationships(&self, id: &str) -> Option<&[FrameworkRelationship]> {
        self.relationships.get(id).map(Vec::as_slice)
    }

    pub fn antipattern(&self, id: &str) -> Option<&FrameworkAntiPattern> {
        self.antipatterns.get(id)
    }

    pub fn effectiveness(&self, id: &str) -> Option<&FrameworkEffectiveness> {
        self.effectiveness.get(id)
    }

    /// Joined view of one id; `None` when no map knows it.
    pub fn profile<'a>(&'a self, id: &'a str) -> Option<FrameworkProfile<'a>> {
        let profile = FrameworkProfile {
            framework_id: id,
            tags: self.tags(id),
            relationships: self.relationships(id).unwrap_or(&[]),
            antipattern: self.antipattern(id),
            effectiveness: self.effectiveness(id),
        };
        let known = profile.tags.is_some()
            || !profile.relationships.is_empty()
            || profile.antipattern.is_some()
            || profile.effectiveness.is_some();
        known.then_some(profile)
    }

    /// Like `tags`, but an unknown id is an error carrying the closest match.
    pub fn require_tags(&self, id: &str) -> Result<&FrameworkTags> {
        self.tags(id).ok_or_else(|| CatalogError::UnknownFramework {
            id: id.to_string(),
            suggestion: self.closest_id(id),
        })
    }

    pub fn closest_id(&self, id: &str) -> Option<String> {
        self.tags
            .keys()
            .map(|known| (known, strsim::jaro_winkler(id, known)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(known, _)| known.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    /// Framework ids with a tags entry, in id order
    pub fn framework_ids(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags_db(&self) -> &BTreeMap<String, FrameworkTags> {
        &self.tags
    }

    pub fn relationships_db(&self) -> &BTreeMap<String, Vec<FrameworkRelationship>> {
        &self.relationships
    }

    pub fn antipatterns_db(&self) -> &BTreeMap<String, FrameworkAntiPattern> {
        &self.antipatterns
    }

    pub fn effectiveness_db(&self) -> &BTreeMap<String, FrameworkEffectiveness> {
        &self.effectiveness
    }

    pub fn ids_for_stage(&self, stage: TemporalStage) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|(_, t)| t.applies_to_stage(stage))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Ids tagged with `industry` or universal
    pub fn ids_for_industry(&self, industry: IndustryContext) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|(_, t)| t.applies_to_industry(industry))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Exact, case-insensitive keyword match.
    pub fn ids_with_keyword(&self, keyword: &str) -> Vec<&str> {
        let needle = keyword.trim().to_lowercase();
        self.tags
            .iter()
            .filter(|(_, t)| t.keywords.iter().any(|k| k.to_lowercase() == needle))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name("competitive_dynamics_aerospace"),
            "Competitive Dynamics Aerospace"
        );
        assert_eq!(display_name("bcg_matrix"), "Bcg Matrix");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_profile_joins_all_maps() {
        let catalog = catalog();
        let bcg = catalog.profile("bcg_matrix").unwrap();
        assert!(bcg.tags.is_some());
        assert!(!bcg.relationships.is_empty());
        assert!(bcg.antipattern.is_some());
        assert!(bcg.effectiveness.is_some());

        let variant = catalog.profile("market_entry_healthcare").unwrap();
        assert!(variant.tags.is_some());
        assert!(variant.relationships.is_empty());
        assert!(variant.antipattern.is_none());
        assert!(variant.effectiveness.is_none());

        assert!(catalog.profile("no_such_framework").is_none());
    }

    #[test]
    fn test_require_tags_suggests_closest_id() {
        let err = catalog().require_tags("bcg_matrx").unwrap_err();
        match err {
            CatalogError::UnknownFramework { id, suggestion } => {
                assert_eq!(id, "bcg_matrx");
                assert_eq!(suggestion.as_deref(), Some("bcg_matrix"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(catalog().require_tags("swot_analysis").is_ok());
    }

    #[test]
    fn test_without_variants() {
        let options = CatalogConfig {
            include_variants: false,
        };
        let core = FrameworkCatalog::with_options(&options);
        assert!(core.contains("bcg_matrix"));
        assert!(!core.contains("competitive_dynamics_aerospace"));
        assert!(core.len() < catalog().len());
    }

    #[test]
    fn test_field_indexes() {
        let catalog = catalog();
        assert!(catalog.ids_with_keyword("Cash Cow").contains(&"bcg_matrix"));
        assert!(
            catalog
                .ids_for_stage(TemporalStage::PreFormation)
                .contains(&"lean_canvas")
        );
        let fintech = catalog.ids_for_industry(IndustryContext::Fintech);
        assert!(fintech.contains(&"competitive_dynamics_finance"));
        // universal frameworks apply everywhere
        assert!(fintech.contains(&"swot_analysis"));
        assert!(!fintech.contains(&"competitive_dynamics_aerospace"));
    }

    #[test]
    fn test_to_json_uses_vocabulary_tokens() {
        let json = catalog().to_json().unwrap();
        assert!(json.contains("\"bcg_matrix\""));
        assert!(json.contains("\"pre_formation\""));
    }
}
