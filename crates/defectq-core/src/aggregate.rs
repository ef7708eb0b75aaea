//! Summary aggregation over a resolved run set.

use std::collections::BTreeMap;

use defectq_registry::{RunRecord, Severity};
use serde::{Deserialize, Serialize};

/// Aggregate report counts across a resolved run set.
///
/// Derived per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// How many runs contributed.
    pub run_count: usize,
    /// Report counts keyed by severity, summed across runs.
    pub severity_counts: BTreeMap<Severity, u64>,
    /// Total reports across all contributing runs.
    pub total: u64,
}

/// Sum per-run counts into a [`Summary`].
///
/// Works purely on the records handed in — no registry access. Addition
/// over the counted quantities commutes, so traversal order cannot change
/// the outcome. Callers fail with `NoRunsFound` before ever reaching an
/// empty input.
pub fn summarize(runs: &[RunRecord]) -> Summary {
    let mut severity_counts: BTreeMap<Severity, u64> = BTreeMap::new();
    let mut total = 0u64;

    for run in runs {
        total += run.result_count;
        for (severity, count) in &run.severity_counts {
            *severity_counts.entry(*severity).or_insert(0) += count;
        }
    }

    Summary {
        run_count: runs.len(),
        severity_counts,
        total,
    }
}
