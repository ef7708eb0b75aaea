//! Domain records served by the run registry.
//!
//! A *run* is a named collection of analysis results ("reports") stored on
//! the results server after an analysis invocation. Records are immutable
//! once fetched: a query works against a snapshot, never live state.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned unique identifier of a stored run.
///
/// Identity lives here, not in the run name — names are free-form labels
/// and may repeat across runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity bucket of a single analysis report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Style,
    Unspecified,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Style => "style",
            Severity::Unspecified => "unspecified",
        };
        write!(f, "{}", name)
    }
}

/// A stored run record.
///
/// Carries its own per-severity counts so that summaries can be computed
/// from a resolved set alone, without a second round-trip to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Server-assigned identity.
    pub id: RunId,
    /// Run name supplied at analysis time. Not unique.
    pub name: String,
    /// When the run was stored.
    pub created_at: DateTime<Utc>,
    /// Total reports in the run.
    pub result_count: u64,
    /// Report counts keyed by severity.
    pub severity_counts: BTreeMap<Severity, u64>,
}

impl RunRecord {
    /// Build a record from per-severity counts; `result_count` is their sum.
    pub fn new(
        id: RunId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        severity_counts: BTreeMap<Severity, u64>,
    ) -> Self {
        let result_count = severity_counts.values().sum();
        RunRecord {
            id,
            name: name.into(),
            created_at,
            result_count,
            severity_counts,
        }
    }
}

/// A single analysis result inside a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Server-assigned report identity.
    pub id: u64,
    /// The run this report belongs to.
    pub run_id: RunId,
    /// Checker that produced the report (e.g. `core.NullDereference`).
    pub checker: String,
    /// Severity bucket.
    pub severity: Severity,
    /// Source file the report points at.
    pub file: String,
    /// 1-based line number.
    pub line: u64,
    /// Checker message.
    pub message: String,
}
