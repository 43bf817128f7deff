//! Lookup and graph queries a caller would make against the catalog.

use strategy_frameworks::catalog::{FrameworkCatalog, display_name};
use strategy_frameworks::config::Config;
use strategy_frameworks::taxonomy::{ComplexityTier, IndustryContext, RelationshipType, TemporalStage};
use strategy_frameworks::{CatalogError, catalog, load_catalog};

#[test]
fn early_stage_team_lookup() {
    let catalog = catalog();
    let team_size = 5;
    let capacity = ComplexityTier::capacity_for_team_size(team_size);

    let fits: Vec<&str> = catalog
        .ids_for_stage(TemporalStage::Validation)
        .into_iter()
        .filter(|id| {
            catalog.tags(id).is_some_and(|t| {
                t.fits_team_size(team_size) && t.complexity_tier.level() <= capacity.level()
            })
        })
        .collect();

    assert!(fits.contains(&"lean_canvas"));
    assert!(!fits.contains(&"bcg_matrix"));
}

#[test]
fn unknown_ids_are_absent_not_errors() {
    let catalog = catalog();
    assert!(catalog.tags("not_a_framework").is_none());
    assert!(catalog.relationships("not_a_framework").is_none());
    assert!(catalog.antipattern("not_a_framework").is_none());
    assert!(catalog.effectiveness("not_a_framework").is_none());
    assert!(catalog.profile("not_a_framework").is_none());
}

#[test]
fn require_tags_offers_a_suggestion() {
    let err = catalog().require_tags("porters_five_force").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownFramework { .. }));
    assert_eq!(err.hint(), "did you mean 'porters_five_forces'?");

    let err = catalog().require_tags("zzzz").unwrap_err();
    assert_eq!(err.hint(), "");
}

#[test]
fn bcg_replacements_for_small_teams() {
    let catalog = catalog();
    let bcg = catalog.tags("bcg_matrix").expect("bcg");
    assert!(!bcg.fits_team_size(8));

    let alternatives = catalog.alternatives_for("bcg_matrix");
    for alt in ["lean_canvas", "unit_economics", "product_market_fit"] {
        assert!(alternatives.contains(&alt), "{alt}");
    }
    assert_eq!(
        catalog.related("bcg_matrix", RelationshipType::Complementary),
        vec!["unit_economics", "ansoff_matrix"]
    );
}

#[test]
fn industry_variants_resolve_by_industry() {
    let catalog = catalog();
    let healthtech = catalog.ids_for_industry(IndustryContext::Healthtech);
    assert!(healthtech.contains(&"market_entry_healthcare"));
    assert_eq!(
        display_name("market_entry_healthcare"),
        "Market Entry Healthcare"
    );
}

#[test]
fn prerequisite_chains_end_with_the_target() {
    for chain in catalog().prerequisite_chains() {
        assert!(chain.len() >= 2);
        let target = chain.last().expect("non-empty chain");
        for before in &chain[..chain.len() - 1] {
            assert!(catalog().prerequisites_of(target).contains(&before.as_str()));
        }
    }
}

#[test]
fn load_catalog_honours_config() {
    let config = Config::from_toml_str(
        r#"
        [catalog]
        include_variants = false

        [validation]
        strict = true
        "#,
    )
    .expect("config");
    let (core, report) = load_catalog(&config).expect("clean catalog");
    assert!(report.is_clean());
    assert!(!core.contains("strategy_execution_finance"));
    assert_eq!(core, FrameworkCatalog::with_options(&config.catalog));

    let strict_no_externals = Config::from_toml_str(
        r#"
        [validation]
        tolerated_external_refs = []
        strict = true
        "#,
    )
    .expect("config");
    assert!(matches!(
        load_catalog(&strict_no_externals),
        Err(CatalogError::Validation { .. })
    ));
}
