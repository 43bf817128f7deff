use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure loaded from strategy_catalog.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Which parts of the catalog get built
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Include generated industry variants (competitive_dynamics_*, ...)
    #[serde(default = "default_true")]
    pub include_variants: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_variants: true,
        }
    }
}

/// Integrity checking of the catalog
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Referenced ids allowed to have no tags entry. They are still reported.
    #[serde(default = "default_tolerated_refs")]
    pub tolerated_external_refs: Vec<String>,
    /// Fail instead of warn when the report has issues
    #[serde(default)]
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerated_external_refs: default_tolerated_refs(),
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tolerated_refs() -> Vec<String> {
    vec!["ge_mckinsey_matrix".to_string()]
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub log_ansi: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "strategy_frameworks=info".to_string(),
            log_ansi: true,
        }
    }
}

impl RuntimeConfig {
    pub fn load_from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Same as `load_from_env`, reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            if !level.trim().is_empty() {
                cfg.log_level = level;
            }
        }
        if let Some(ansi) = lookup_flag("CATALOG_LOG_ANSI", &lookup) {
            cfg.log_ansi = ansi;
        }
        cfg
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// "true"/"1" and "false"/"0", case-insensitive
pub fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn lookup_flag(name: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<bool> {
    let value = lookup(name)?;
    let parsed = parse_flag(&value);
    if parsed.is_none() {
        tracing::warn!("Ignoring {}={}: expected true/false/1/0", name, value);
    }
    parsed
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses STRATEGY_CATALOG_CONFIG environment variable or defaults to "strategy_catalog.toml"
    pub fn load() -> anyhow::Result<Self> {
        // CATALOG_ENV_FILE if set, else ./.env; missing files are fine
        if let Ok(env_path) = std::env::var("CATALOG_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path = std::env::var("STRATEGY_CATALOG_CONFIG")
            .unwrap_or_else(|_| "strategy_catalog.toml".to_string());
        Self::load_from(Path::new(&config_path), env_lookup)
    }

    /// Read `path` (defaults when missing), then apply overrides and runtime
    /// settings read through `lookup`.
    pub fn load_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = if let Ok(content) = std::fs::read_to_string(path) {
            Self::from_toml_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(&lookup);
        config.runtime = RuntimeConfig::from_lookup(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// Apply CATALOG_STRICT_VALIDATION and CATALOG_INCLUDE_VARIANTS.
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(strict) = lookup_flag("CATALOG_STRICT_VALIDATION", &lookup) {
            self.validation.strict = strict;
            tracing::debug!("CATALOG_STRICT_VALIDATION env override applied");
        }
        if let Some(include) = lookup_flag("CATALOG_INCLUDE_VARIANTS", &lookup) {
            self.catalog.include_variants = include;
            tracing::debug!("CATALOG_INCLUDE_VARIANTS env override applied");
        }
    }

    /// Parse a TOML document without consulting the environment
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for id in &self.validation.tolerated_external_refs {
            if id.trim().is_empty() {
                anyhow::bail!("validation.tolerated_external_refs must not contain empty ids");
            }
            if id.chars().any(|c| c.is_whitespace() || c.is_ascii_uppercase()) {
                anyhow::bail!(
                    "validation.tolerated_external_refs entry '{}' is not a framework id",
                    id
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.catalog.include_variants);
        assert!(!config.validation.strict);
        assert_eq!(
            config.validation.tolerated_external_refs,
            vec!["ge_mckinsey_matrix"]
        );
        assert_eq!(config.runtime.log_level, "strategy_frameworks=info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [validation]
            strict = true
            "#,
        )
        .unwrap();
        assert!(config.validation.strict);
        assert!(config.catalog.include_variants);
        assert_eq!(config.validation.tolerated_external_refs.len(), 1);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            r#"
            [catalog]
            include_variants = false

            [validation]
            tolerated_external_refs = ["ge_mckinsey_matrix", "real_options"]
            "#,
        )
        .unwrap();
        assert!(!config.catalog.include_variants);
        assert_eq!(
            config.validation.tolerated_external_refs,
            vec!["ge_mckinsey_matrix", "real_options"]
        );
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "strategy_catalog_{}_{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let path = temp_config(
            "overrides",
            r#"
            [catalog]
            include_variants = true
            "#,
        );
        let config = Config::load_from(
            &path,
            vars(&[
                ("CATALOG_STRICT_VALIDATION", "TRUE"),
                ("CATALOG_INCLUDE_VARIANTS", "0"),
            ]),
        )
        .unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(config.validation.strict);
        assert!(!config.catalog.include_variants);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("CATALOG_STRICT_VALIDATION", "maybe"),
            ("CATALOG_INCLUDE_VARIANTS", "yes"),
        ]));
        assert!(!config.validation.strict);
        assert!(config.catalog.include_variants);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("strategy_catalog_does_not_exist.toml");
        let config = Config::load_from(
            &path,
            vars(&[("CATALOG_STRICT_VALIDATION", "maybe")]),
        )
        .unwrap();
        assert!(!config.validation.strict);
        assert!(config.catalog.include_variants);
        assert_eq!(
            config.validation.tolerated_external_refs,
            vec!["ge_mckinsey_matrix"]
        );
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_config("invalid", "[validation]\nstrict = \"sometimes\"\n");
        let result = Config::load_from(&path, vars(&[]));
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_runtime_from_lookup() {
        let runtime = RuntimeConfig::from_lookup(vars(&[
            ("CATALOG_LOG_LEVEL", "strategy_frameworks=debug"),
            ("CATALOG_LOG_ANSI", "false"),
        ]));
        assert_eq!(runtime.log_level, "strategy_frameworks=debug");
        assert!(!runtime.log_ansi);

        // blank level and unparseable ansi keep defaults
        let runtime = RuntimeConfig::from_lookup(vars(&[
            ("CATALOG_LOG_LEVEL", "  "),
            ("CATALOG_LOG_ANSI", "maybe"),
        ]));
        assert_eq!(runtime.log_level, "strategy_frameworks=info");
        assert!(runtime.log_ansi);
    }

    #[test]
    fn test_rejects_bad_tolerated_ids() {
        let result = Config::from_toml_str(
            r#"
            [validation]
            tolerated_external_refs = ["GE McKinsey"]
            "#,
        );
        assert!(result.is_err());
    }
}
