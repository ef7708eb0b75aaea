//! Error types for the run registry port.

use thiserror::Error;

use crate::models::RunId;

/// Errors produced by a registry provider.
///
/// `Connection` and `MalformedResponse` both mean the provider could not
/// deliver a usable snapshot; they are kept separate from any "no matching
/// runs" condition, which is a query-layer concern, not a provider one.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The server could not be reached at all.
    #[error("cannot reach results server at {url}: {reason}")]
    Connection { url: String, reason: String },

    /// The server answered, but with something undecodable or unexpected.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    /// A report lookup referenced a run the registry does not know.
    #[error("run not found: {run_id}")]
    RunNotFound { run_id: RunId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::Connection {
            url: "http://localhost:8001/v1/runs".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("cannot reach results server"));
        assert!(err.to_string().contains("connection refused"));

        let err = RegistryError::RunNotFound { run_id: RunId(42) };
        assert!(err.to_string().contains("run not found: 42"));
    }
}
