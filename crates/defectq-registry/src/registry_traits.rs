//! Registry port definition.
//!
//! The registry is the authoritative set of stored runs. Query code only
//! ever reads it through this trait, so the engine can be exercised with
//! the in-memory fake from the `fakes` module while production wires in
//! the HTTP-backed provider.

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::models::{ReportRecord, RunId, RunRecord};

/// Result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Read-only view of the stored runs.
///
/// Guarantees:
/// - `list_runs` returns a consistent snapshot in creation order
///   (ascending id); no partially-initialized run may appear.
/// - Calls are independent: each returns its own snapshot, so a provider
///   shared between concurrent queries needs no external locking.
#[async_trait]
pub trait RunRegistry: Send + Sync {
    /// Snapshot of every stored run, in creation order.
    async fn list_runs(&self) -> RegistryResult<Vec<RunRecord>>;

    /// All reports recorded for one run.
    ///
    /// Fails with `RegistryError::RunNotFound` for an unknown id.
    async fn run_reports(&self, run: &RunId) -> RegistryResult<Vec<ReportRecord>>;
}
