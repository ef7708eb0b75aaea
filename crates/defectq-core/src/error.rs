//! Query-engine error taxonomy.
//!
//! All variants are terminal for the current command: nothing here is
//! retried internally, and none may be downgraded to an empty success.

use defectq_registry::RegistryError;
use thiserror::Error;

/// Errors produced while resolving and rendering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed filter syntax, reported before the registry is consulted.
    #[error("invalid run-name pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Filter resolution yielded zero runs. The display text is the fixed
    /// diagnostic the process boundary must emit verbatim.
    #[error("No runs were found!")]
    NoRunsFound,

    /// The registry provider could not deliver a usable snapshot.
    #[error("results server unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for query-engine operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_runs_found_fixed_message() {
        assert_eq!(QueryError::NoRunsFound.to_string(), "No runs were found!");
    }

    #[test]
    fn test_invalid_pattern_names_the_pattern() {
        let err = QueryError::InvalidPattern {
            pattern: "foo\\".to_string(),
            reason: "trailing backslash".to_string(),
        };
        assert!(err.to_string().contains("foo\\"));
        assert!(err.to_string().contains("trailing backslash"));
    }

    #[test]
    fn test_registry_error_stays_distinct_from_no_runs() {
        let err = QueryError::from(RegistryError::Connection {
            url: "http://localhost:8001/v1/runs".to_string(),
            reason: "connection refused".to_string(),
        });
        assert!(err.to_string().contains("results server unavailable"));
        assert!(!err.to_string().contains("No runs were found!"));
    }
}
