use thiserror::Error;

/// Reasons a recommendation query cannot be resolved to a catalog item.
///
/// These are expected user-input outcomes and are kept distinct from an
/// empty recommendation list so callers can word them differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing was selected
    #[error("Please select a movie first.")]
    NoSelection,

    /// The selected key does not exist in the catalog
    #[error("Error: Selected movie not found in database.")]
    NotFound { key: String },
}

/// Failures while turning serialized data into a `Catalog`
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR decode error: {0}")]
    Cbor(#[from] serde_cbor::Error),

    #[error("Duplicate vocabulary label: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate item key: {0}")]
    DuplicateKey(String),

    #[error("Vocabulary is empty")]
    EmptyVocabulary,
}

/// Failures while reading `RecommendConfig` from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid min_score {0}: must be finite and not negative")]
    InvalidMinScore(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_messages_are_distinct() {
        let none = QueryError::NoSelection;
        let missing = QueryError::NotFound { key: "42".to_string() };
        assert_ne!(none.to_string(), missing.to_string());
        assert_eq!(none.to_string(), "Please select a movie first.");
    }

    #[test]
    fn catalog_error_wraps_json() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CatalogError = err.into();
        assert!(err.to_string().starts_with("JSON decode error"));
    }
}
