//! Domain-specific error types for strategy-frameworks

use thiserror::Error;

/// Main error type for the framework catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown framework: {id}")]
    UnknownFramework {
        id: String,
        /// Closest known framework id, when one is reasonably close
        suggestion: Option<String>,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CatalogError {
    /// Human-facing hint for `UnknownFramework`, empty for other variants
    pub fn hint(&self) -> String {
        match self {
            CatalogError::UnknownFramework {
                suggestion: Some(s),
                ..
            } => format!("did you mean '{s}'?"),
            _ => String::new(),
        }
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        CatalogError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_framework_hint() {
        let err = CatalogError::UnknownFramework {
            id: "bcg_matrx".into(),
            suggestion: Some("bcg_matrix".into()),
        };
        assert_eq!(err.to_string(), "Unknown framework: bcg_matrx");
        assert_eq!(err.hint(), "did you mean 'bcg_matrix'?");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: CatalogError = toml::from_str::<toml::Value>("not = [valid")
            .unwrap_err()
            .into();
        assert!(matches!(err, CatalogError::Config { .. }));
    }
}
