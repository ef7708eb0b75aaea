//! Filter resolution against a registry snapshot.
//!
//! Multiple filters combine as a *union*, de-duplicated by run identity,
//! and the output keeps registry order, never pattern order. Filtering the
//! snapshot in place gives all three at once: each run is visited exactly
//! once, in snapshot order, and admitted if any pattern matches it.

use defectq_registry::{RunRecord, RunRegistry};
use tracing::debug;

use crate::error::QueryError;
use crate::pattern::NamePattern;

/// Resolve name filters to the set of matching runs.
///
/// An empty `patterns` slice means "no filter": the whole snapshot is the
/// result. An empty *result* is the distinguished `NoRunsFound` failure —
/// it must never be rendered as an empty listing.
pub async fn resolve_runs(
    registry: &dyn RunRegistry,
    patterns: &[String],
) -> Result<Vec<RunRecord>, QueryError> {
    // Compile filters first: malformed syntax aborts before the server is
    // consulted at all.
    let matchers = patterns
        .iter()
        .map(|p| NamePattern::compile(p))
        .collect::<Result<Vec<_>, _>>()?;

    let snapshot = registry.list_runs().await?;

    let resolved: Vec<RunRecord> = if matchers.is_empty() {
        snapshot
    } else {
        snapshot
            .into_iter()
            .filter(|run| matchers.iter().any(|m| m.matches(&run.name)))
            .collect()
    };

    if resolved.is_empty() {
        return Err(QueryError::NoRunsFound);
    }

    debug!(
        resolved = resolved.len(),
        filters = patterns.len(),
        "resolved run set"
    );
    Ok(resolved)
}
