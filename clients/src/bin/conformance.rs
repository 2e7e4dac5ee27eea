//! `vocab-conformance`: validates the vocabulary schema and everything
//! generated from it.
//!
//! Runs the complete conformance suite across:
//! - the YAML schema of every epoch (inventory, identifiers, isolation,
//!   descriptors, coverage, upstream spellings)
//! - the compiled `hiveot-vocab` tables
//! - the generated Go, JavaScript, Python and Rust sources
//!
//! **Usage:**
//! ```text
//! vocab-conformance [--workspace <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hiveot_vocab_conformance::{run_all, Severity, WorkspacePaths};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Run the HiveOT vocabulary conformance suite.
#[derive(Parser)]
#[command(
    name = "vocab-conformance",
    about = "Validate the HiveOT vocabulary schema and generated sources"
)]
struct Args {
    /// Path to the workspace root (default: current directory).
    #[arg(long, default_value = ".")]
    workspace: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let report = run_all(&WorkspacePaths {
        workspace: args.workspace,
    })?;

    println!("HiveOT Vocabulary Conformance Report");
    println!("====================================");
    println!();

    for result in &report.results {
        println!("[{}] {} - {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn logs_default_to_info() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert_eq!(DEFAULT_LOG_FILTER, "info");
    }
}
