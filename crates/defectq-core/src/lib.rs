//! defectq Core Library
//!
//! Re-exports the query engine: pattern compilation, filter resolution,
//! aggregation, rendering, and process-boundary outcome mapping.

pub mod aggregate;
pub mod commands;
pub mod error;
pub mod format;
pub mod outcome;
pub mod pattern;
pub mod resolve;
pub mod telemetry;

pub use aggregate::{summarize, Summary};
pub use commands::{results_command, runs_command, sum_command};
pub use error::{QueryError, Result};
pub use format::{render_reports, render_runs, render_summary, OutputFormat};
pub use outcome::{diagnostics_to_stderr, report_outcome, CommandOutcome};
pub use pattern::NamePattern;
pub use resolve::resolve_runs;
pub use telemetry::init_tracing;

pub use defectq_registry::{
    ReportRecord, RunId, RunRecord, RunRegistry, Severity,
};

/// defectq version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
