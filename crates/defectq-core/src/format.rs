//! Result rendering.
//!
//! Two encodings: `Table` for humans, `Json` for scripts. Rendering is a
//! pure presentation transform — it never filters, reorders or augments
//! the data it is given. The JSON shape is field-complete: parsing it back
//! reconstructs the same logical records (see the round-trip tests).

use defectq_registry::{ReportRecord, RunRecord};

use crate::aggregate::Summary;
use crate::error::QueryError;

/// Requested output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width human-readable rows.
    #[default]
    Table,
    /// Lossless machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// `true` for the human-oriented table encoding.
    ///
    /// Non-table output keeps stdout reserved for the payload, so callers
    /// use this to route incidental log text to stderr instead.
    pub fn is_table(self) -> bool {
        matches!(self, OutputFormat::Table)
    }
}

/// Render a resolved run set.
pub fn render_runs(runs: &[RunRecord], format: OutputFormat) -> Result<String, QueryError> {
    match format {
        OutputFormat::Table => Ok(runs_table(runs)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(runs)?),
    }
}

/// Render a report listing.
pub fn render_reports(reports: &[ReportRecord], format: OutputFormat) -> Result<String, QueryError> {
    match format {
        OutputFormat::Table => Ok(reports_table(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// Render an aggregate summary.
pub fn render_summary(summary: &Summary, format: OutputFormat) -> Result<String, QueryError> {
    match format {
        OutputFormat::Table => Ok(summary_table(summary)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

fn runs_table(runs: &[RunRecord]) -> String {
    let name_width = runs
        .iter()
        .map(|run| run.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:<name_width$}  {:<19}  {:>8}\n",
        "ID", "NAME", "CREATED", "RESULTS",
    ));
    for run in runs {
        out.push_str(&format!(
            "{:>6}  {:<name_width$}  {:<19}  {:>8}\n",
            run.id,
            run.name,
            run.created_at.format("%Y-%m-%d %H:%M:%S"),
            run.result_count,
        ));
    }
    out.trim_end().to_string()
}

fn reports_table(reports: &[ReportRecord]) -> String {
    let checker_width = reports
        .iter()
        .map(|r| r.checker.len())
        .max()
        .unwrap_or(0)
        .max("CHECKER".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>8}  {:>6}  {:<checker_width$}  {:<11}  {}\n",
        "ID", "RUN", "CHECKER", "SEVERITY", "LOCATION",
    ));
    for report in reports {
        out.push_str(&format!(
            "{:>8}  {:>6}  {:<checker_width$}  {:<11}  {}:{}  {}\n",
            report.id,
            report.run_id,
            report.checker,
            report.severity,
            report.file,
            report.line,
            report.message,
        ));
    }
    out.trim_end().to_string()
}

fn summary_table(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12}  {:>8}\n", "SEVERITY", "REPORTS"));
    for (severity, count) in &summary.severity_counts {
        out.push_str(&format!("{:<12}  {:>8}\n", severity.to_string(), count));
    }
    out.push_str(&format!("{:<12}  {:>8}\n", "total", summary.total));
    out.push_str(&format!("across {} run(s)", summary.run_count));
    out
}
