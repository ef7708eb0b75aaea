//! In-memory fake for the registry port (testing only)
//!
//! Provides `MemoryRunRegistry`, which satisfies the `RunRegistry` contract
//! without any network dependency. Query-engine and CLI tests seed it with
//! whatever runs a scenario needs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::models::{ReportRecord, RunId, RunRecord};
use crate::registry_traits::{RegistryResult, RunRegistry};

#[derive(Debug, Default)]
struct Inner {
    runs: Vec<RunRecord>,
    reports: HashMap<u64, Vec<ReportRecord>>,
}

/// In-memory run registry backed by a seeded run list.
///
/// `list_runs` sorts by id, so seeding order never leaks into snapshot
/// order — the contract is creation order (ascending id).
#[derive(Debug, Default)]
pub struct MemoryRunRegistry {
    inner: Mutex<Inner>,
}

impl MemoryRunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a run record.
    pub fn seed_run(&self, run: RunRecord) {
        let mut inner = self.inner.lock().unwrap();
        inner.runs.push(run);
    }

    /// Seed the report list of one run.
    pub fn seed_reports(&self, run: &RunId, reports: Vec<ReportRecord>) {
        let mut inner = self.inner.lock().unwrap();
        inner.reports.insert(run.0, reports);
    }

    /// Convenience: build a registry pre-seeded with the given runs.
    pub fn with_runs(runs: Vec<RunRecord>) -> Self {
        let registry = Self::new();
        for run in runs {
            registry.seed_run(run);
        }
        registry
    }
}

#[async_trait]
impl RunRegistry for MemoryRunRegistry {
    async fn list_runs(&self) -> RegistryResult<Vec<RunRecord>> {
        let inner = self.inner.lock().unwrap();
        let mut snapshot = inner.runs.clone();
        snapshot.sort_by_key(|run| run.id);
        Ok(snapshot)
    }

    async fn run_reports(&self, run: &RunId) -> RegistryResult<Vec<ReportRecord>> {
        let inner = self.inner.lock().unwrap();
        if !inner.runs.iter().any(|r| r.id == *run) {
            return Err(RegistryError::RunNotFound { run_id: *run });
        }
        Ok(inner.reports.get(&run.0).cloned().unwrap_or_default())
    }
}
