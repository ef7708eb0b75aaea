//! Process-boundary outcome mapping.
//!
//! The engine hands the binary a [`CommandOutcome`] instead of printing
//! directly, so the exit-code and stream contract stays testable without
//! spawning a process.

use crate::error::QueryError;
use crate::format::OutputFormat;

/// What a finished command contributes to the process boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `0` on success, `1` on any terminal query error.
    pub exit_code: i32,
    /// The payload. Empty on failure, so structured-format consumers can
    /// rely on "failure means no payload".
    pub stdout: String,
    /// Diagnostic text. Empty on success.
    pub stderr: String,
}

/// Map a command result onto exit code and output streams.
///
/// Success puts the newline-terminated payload on stdout and nothing on
/// stderr. Failure leaves stdout empty and puts the error's display text
/// on stderr — for `NoRunsFound` that is the fixed `No runs were found!`
/// diagnostic.
pub fn report_outcome(result: Result<String, QueryError>) -> CommandOutcome {
    match result {
        Ok(payload) => {
            let mut stdout = payload;
            if !stdout.ends_with('\n') {
                stdout.push('\n');
            }
            CommandOutcome {
                exit_code: 0,
                stdout,
                stderr: String::new(),
            }
        }
        Err(err) => CommandOutcome {
            exit_code: 1,
            stdout: String::new(),
            stderr: format!("{}\n", err),
        },
    }
}

/// Stream-routing rule for incidental log text.
///
/// With a non-table format, stdout must stay a clean, parseable payload,
/// so the logger is pointed at stderr before any command runs.
pub fn diagnostics_to_stderr(format: OutputFormat) -> bool {
    !format.is_table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome() {
        let outcome = report_outcome(Ok("payload".to_string()));
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout, "payload\n");
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_success_does_not_double_terminate() {
        let outcome = report_outcome(Ok("payload\n".to_string()));
        assert_eq!(outcome.stdout, "payload\n");
    }

    #[test]
    fn test_no_runs_found_outcome() {
        let outcome = report_outcome(Err(QueryError::NoRunsFound));
        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.contains("No runs were found!"));
    }

    #[test]
    fn test_routing_rule() {
        assert!(!diagnostics_to_stderr(OutputFormat::Table));
        assert!(diagnostics_to_stderr(OutputFormat::Json));
    }
}
