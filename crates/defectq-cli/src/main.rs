//! defectq - query client for a static-analysis results server
//!
//! The `defectq` command resolves run-name filters against the server's
//! stored runs and renders listings and summaries.
//!
//! ## Commands
//!
//! - `runs`: list stored runs, optionally filtered by name patterns
//! - `results`: list the reports of every matched run
//! - `sum`: aggregate report counts across matched runs

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use defectq_core::{
    diagnostics_to_stderr, report_outcome, results_command, runs_command, sum_command,
    CommandOutcome, OutputFormat,
};
use defectq_registry::{HttpRunRegistry, ServerConfig, DEFAULT_SERVER_URL};

#[derive(Parser)]
#[command(name = "defectq")]
#[command(author = "defectq contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query client for a static-analysis results server", long_about = None)]
struct Cli {
    /// Results server URL
    #[arg(long, global = true, env = "DEFECTQ_URL", default_value = DEFAULT_SERVER_URL)]
    url: String,

    /// Output encoding
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputArg::Table
    )]
    output: OutputArg,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI-facing spelling of the output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Table,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List stored runs
    Runs {
        /// Run-name filter (glob-style, may repeat)
        #[arg(short = 'n', long = "name")]
        names: Vec<String>,
    },

    /// List the reports of every matched run
    Results {
        /// Run-name filters (glob-style)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Aggregate report counts across matched runs
    Sum {
        /// Summarize every stored run
        #[arg(short, long, conflicts_with = "names")]
        all: bool,

        /// Run-name filter (glob-style, may repeat)
        #[arg(short = 'n', long = "name", required_unless_present = "all")]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging. With a structured output format the logger writes to
    // stderr so stdout stays a clean, parseable payload.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let format = OutputFormat::from(cli.output);
    defectq_core::init_tracing(cli.json_logs, level, diagnostics_to_stderr(format));

    let registry = HttpRunRegistry::new(ServerConfig::new(&cli.url));

    let result = match &cli.command {
        Commands::Runs { names } => runs_command(&registry, names, format).await,
        Commands::Results { names } => results_command(&registry, names, format).await,
        Commands::Sum { all, names } => {
            let filters = if *all { Vec::new() } else { names.clone() };
            sum_command(&registry, &filters, format).await
        }
    };

    let outcome = report_outcome(result);
    write_streams(&outcome).context("failed to write command output")?;

    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}

fn write_streams(outcome: &CommandOutcome) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(outcome.stdout.as_bytes())?;
    stdout.flush()?;

    let mut stderr = std::io::stderr();
    stderr.write_all(outcome.stderr.as_bytes())?;
    stderr.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_accepts_repeated_name_filters() {
        let cli = Cli::try_parse_from([
            "defectq", "runs", "-n", "test_files1*", "-n", "test_files2*",
        ])
        .unwrap();

        match cli.command {
            Commands::Runs { names } => {
                assert_eq!(names, vec!["test_files1*", "test_files2*"]);
            }
            _ => panic!("expected runs subcommand"),
        }
    }

    #[test]
    fn test_runs_without_filters_is_valid() {
        let cli = Cli::try_parse_from(["defectq", "runs"]).unwrap();
        match cli.command {
            Commands::Runs { names } => assert!(names.is_empty()),
            _ => panic!("expected runs subcommand"),
        }
    }

    #[test]
    fn test_results_requires_at_least_one_pattern() {
        assert!(Cli::try_parse_from(["defectq", "results"]).is_err());
        assert!(Cli::try_parse_from(["defectq", "results", "test_files1*"]).is_ok());
    }

    #[test]
    fn test_results_accepts_repeated_patterns() {
        let cli =
            Cli::try_parse_from(["defectq", "results", "test_files1*", "test_files1*"]).unwrap();
        match cli.command {
            Commands::Results { names } => assert_eq!(names.len(), 2),
            _ => panic!("expected results subcommand"),
        }
    }

    #[test]
    fn test_sum_requires_all_or_names() {
        assert!(Cli::try_parse_from(["defectq", "sum"]).is_err());
        assert!(Cli::try_parse_from(["defectq", "sum", "-a"]).is_ok());
        assert!(Cli::try_parse_from(["defectq", "sum", "-n", "nightly*"]).is_ok());
    }

    #[test]
    fn test_sum_all_conflicts_with_names() {
        assert!(Cli::try_parse_from(["defectq", "sum", "-a", "-n", "nightly*"]).is_err());
    }

    #[test]
    fn test_output_arg_parses_and_converts() {
        let cli = Cli::try_parse_from(["defectq", "runs", "-o", "json"]).unwrap();
        assert_eq!(cli.output, OutputArg::Json);
        assert_eq!(OutputFormat::from(cli.output), OutputFormat::Json);

        let cli = Cli::try_parse_from(["defectq", "runs"]).unwrap();
        assert_eq!(OutputFormat::from(cli.output), OutputFormat::Table);
    }

    #[test]
    fn test_url_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "defectq",
            "runs",
            "--url",
            "http://reports.internal:8001",
        ])
        .unwrap();
        assert_eq!(cli.url, "http://reports.internal:8001");
    }
}
