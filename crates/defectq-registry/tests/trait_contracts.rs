//! Trait contract tests for RunRegistry.
//!
//! These tests verify the behavioral contract of the registry port using
//! the in-memory fake. Any conforming provider must pass these.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use defectq_registry::fakes::MemoryRunRegistry;
use defectq_registry::{RegistryError, ReportRecord, RunId, RunRecord, RunRegistry, Severity};

fn sample_run(id: u64, name: &str) -> RunRecord {
    let mut counts = BTreeMap::new();
    counts.insert(Severity::High, 1);
    counts.insert(Severity::Low, 2);
    RunRecord::new(
        RunId(id),
        name,
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        counts,
    )
}

fn sample_report(id: u64, run_id: u64, checker: &str) -> ReportRecord {
    ReportRecord {
        id,
        run_id: RunId(run_id),
        checker: checker.to_string(),
        severity: Severity::High,
        file: "src/lib.c".to_string(),
        line: 10,
        message: format!("{} fired", checker),
    }
}

// ===========================================================================
// list_runs contract
// ===========================================================================

#[tokio::test]
async fn list_runs_empty_registry() {
    let registry = MemoryRunRegistry::new();
    let runs = registry.list_runs().await.unwrap();
    assert!(runs.is_empty());
}

#[tokio::test]
async fn list_runs_returns_all_seeded() {
    let registry = MemoryRunRegistry::new();
    registry.seed_run(sample_run(1, "alpha"));
    registry.seed_run(sample_run(2, "beta"));

    let runs = registry.list_runs().await.unwrap();
    assert_eq!(runs.len(), 2);
}

#[tokio::test]
async fn list_runs_snapshot_is_in_creation_order() {
    let registry = MemoryRunRegistry::new();
    // Seed out of order; the snapshot must still come back ascending by id.
    registry.seed_run(sample_run(3, "gamma"));
    registry.seed_run(sample_run(1, "alpha"));
    registry.seed_run(sample_run(2, "beta"));

    let runs = registry.list_runs().await.unwrap();
    let ids: Vec<u64> = runs.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_runs_snapshots_are_independent() {
    let registry = MemoryRunRegistry::new();
    registry.seed_run(sample_run(1, "alpha"));

    let first = registry.list_runs().await.unwrap();
    registry.seed_run(sample_run(2, "beta"));
    let second = registry.list_runs().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
}

// ===========================================================================
// run_reports contract
// ===========================================================================

#[tokio::test]
async fn run_reports_returns_seeded_reports() {
    let registry = MemoryRunRegistry::new();
    registry.seed_run(sample_run(1, "alpha"));
    registry.seed_reports(
        &RunId(1),
        vec![
            sample_report(10, 1, "core.NullDereference"),
            sample_report(11, 1, "deadcode.DeadStores"),
        ],
    );

    let reports = registry.run_reports(&RunId(1)).await.unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].checker, "core.NullDereference");
}

#[tokio::test]
async fn run_reports_empty_for_run_without_reports() {
    let registry = MemoryRunRegistry::new();
    registry.seed_run(sample_run(1, "alpha"));

    let reports = registry.run_reports(&RunId(1)).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn run_reports_unknown_run_is_not_found() {
    let registry = MemoryRunRegistry::new();
    registry.seed_run(sample_run(1, "alpha"));

    let err = registry.run_reports(&RunId(99)).await.unwrap_err();
    assert!(matches!(err, RegistryError::RunNotFound { .. }));
}

// ===========================================================================
// Record serialization (wire shape used by the HTTP provider)
// ===========================================================================

#[test]
fn run_record_round_trips_through_json() {
    let run = sample_run(7, "test_files1_a");
    let json = serde_json::to_string(&run).unwrap();
    let back: RunRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, run);
}

#[test]
fn report_record_round_trips_through_json() {
    let report = sample_report(42, 7, "core.DivideZero");
    let json = serde_json::to_string(&report).unwrap();
    let back: ReportRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
