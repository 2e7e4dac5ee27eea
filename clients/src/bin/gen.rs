//! `vocab-gen`: generates the vocabulary sources from the YAML schema.
//!
//! Loads `<schema>/<ns>/` for each epoch and writes, per target:
//! - `api/go/vocab/<ns>/<ns>-vocab.go`
//! - `api/js/vocab/<ns>-vocab.js`
//! - `api/py/vocab/<ns>-vocab.py`
//! - `vocab/src/epochs/<ns>.rs`
//!
//! **Usage:**
//! ```text
//! vocab-gen [--schema <dir>] [--out <dir>] [--target go|js|python|rust|all] [--epoch <ns>] [--check]
//! ```
//!
//! With `--check` nothing is written; exits non-zero if any output is
//! missing or stale.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hiveot_vocab_codegen::{check, generate, Target};
use hiveot_vocab_spec::{epochs, load_dir};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetArg {
    Go,
    Js,
    Python,
    Rust,
    All,
}

impl TargetArg {
    fn targets(self) -> Vec<Target> {
        match self {
            TargetArg::Go => vec![Target::Go],
            TargetArg::Js => vec![Target::JavaScript],
            TargetArg::Python => vec![Target::Python],
            TargetArg::Rust => vec![Target::Rust],
            TargetArg::All => Target::ALL.to_vec(),
        }
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Generate the HiveOT vocabulary sources.
#[derive(Parser)]
#[command(name = "vocab-gen", about = "Generate HiveOT vocabulary sources from the YAML schema")]
struct Args {
    /// Directory holding one schema directory per epoch.
    #[arg(long, default_value = "spec/vocab")]
    schema: PathBuf,

    /// Output root; target paths are relative to it.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Target language.
    #[arg(long, value_enum, default_value_t = TargetArg::All)]
    target: TargetArg,

    /// Epoch to generate (repeatable). Defaults to every epoch.
    #[arg(long = "epoch", value_parser = clap::builder::PossibleValuesParser::new(epochs::NAMESPACES))]
    epochs: Vec<String>,

    /// Compare with the files on disk instead of writing.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let namespaces: Vec<String> = if args.epochs.is_empty() {
        epochs::NAMESPACES.iter().map(|ns| ns.to_string()).collect()
    } else {
        args.epochs
    };

    let schemas = namespaces
        .iter()
        .map(|ns| {
            let dir = args.schema.join(ns);
            load_dir(ns, &dir).with_context(|| format!("Failed to load schema {}", dir.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    let targets = args.target.targets();

    if args.check {
        let drifts = check(&schemas, &targets, &args.out)?;
        if drifts.is_empty() {
            println!("Generated vocabulary is up to date.");
            return Ok(());
        }
        for drift in &drifts {
            println!("[DRIFT] {drift}");
        }
        eprintln!("{} generated file(s) out of date; rerun vocab-gen.", drifts.len());
        process::exit(1);
    }

    let report = generate(&schemas, &targets, &args.out)?;
    println!(
        "Generated {} files: {} constants, {} classes",
        report.files.len(),
        report.constant_count,
        report.class_count
    );
    for file in &report.files {
        println!("  {}", file.display());
    }
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
