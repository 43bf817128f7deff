pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod taxonomy;
pub mod validation;

pub use catalog::types::{
    FrameworkAntiPattern, FrameworkEffectiveness, FrameworkProfile, FrameworkRelationship,
    FrameworkTags,
};
pub use catalog::{
    FrameworkCatalog, build_antipatterns, build_effectiveness, build_relationships,
    build_tags_database, catalog,
};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use logging::init_tracing;
pub use validation::{ValidationReport, validate};

/// Load `.env` from the working directory when present; a missing file is not an error.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Build and validate the catalog described by `config`.
/// Fails only when strict validation finds issues.
pub fn load_catalog(config: &Config) -> Result<(FrameworkCatalog, ValidationReport)> {
    let catalog = FrameworkCatalog::with_options(&config.catalog);
    let report = validate(&catalog, &config.validation);
    report.enforce(config.validation.strict)?;
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_env_without_dotenv_file() {
        load_env();
        load_env();
    }

    #[test]
    fn test_load_catalog_with_defaults_matches_shared_catalog() {
        let (built, report) = load_catalog(&Config::default()).unwrap();
        assert_eq!(&built, catalog());
        assert!(report.is_clean());
    }
}
