//! Command orchestration shared by the CLI binary and integration tests.
//!
//! Each function runs one query end to end — resolve, optionally fetch or
//! aggregate, render — and returns the payload destined for stdout. The
//! process-boundary concerns (exit code, stream routing) live in
//! [`crate::outcome`].

use defectq_registry::{ReportRecord, RunRegistry};
use tracing::debug;

use crate::aggregate::summarize;
use crate::error::QueryError;
use crate::format::{render_reports, render_runs, render_summary, OutputFormat};
use crate::resolve::resolve_runs;

/// List stored runs, optionally filtered by name patterns.
pub async fn runs_command(
    registry: &dyn RunRegistry,
    patterns: &[String],
    format: OutputFormat,
) -> Result<String, QueryError> {
    let resolved = resolve_runs(registry, patterns).await?;
    render_runs(&resolved, format)
}

/// List every report of every matched run.
///
/// Reports are fetched per run, in resolved (registry) order, and
/// concatenated in that same order.
pub async fn results_command(
    registry: &dyn RunRegistry,
    patterns: &[String],
    format: OutputFormat,
) -> Result<String, QueryError> {
    let resolved = resolve_runs(registry, patterns).await?;

    let mut reports: Vec<ReportRecord> = Vec::new();
    for run in &resolved {
        let mut run_reports = registry.run_reports(&run.id).await?;
        debug!(run_id = %run.id, reports = run_reports.len(), "fetched run reports");
        reports.append(&mut run_reports);
    }

    render_reports(&reports, format)
}

/// Aggregate report counts across all matched runs.
pub async fn sum_command(
    registry: &dyn RunRegistry,
    patterns: &[String],
    format: OutputFormat,
) -> Result<String, QueryError> {
    let resolved = resolve_runs(registry, patterns).await?;
    let summary = summarize(&resolved);
    render_summary(&summary, format)
}
