//! `vocab-lookup`: queries the compiled vocabulary of one epoch.
//!
//! **Usage:**
//! ```text
//! vocab-lookup [--epoch ht|hiveot] get <name>
//! vocab-lookup [--epoch ht|hiveot] describe <family> <identifier>
//! vocab-lookup [--epoch ht|hiveot] list [--family <family>]
//! vocab-lookup [--epoch ht|hiveot] dump
//! ```
//!
//! The epoch defaults to `$HIVEOT_VOCAB_EPOCH`, then `hiveot`. A key that is
//! not defined in the epoch exits with status 2.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hiveot_vocab::{ClassFamily, Epoch, LookupError, Vocabulary};
use hiveot_vocab_spec::{epochs, serializer::json};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Look up HiveOT vocabulary identifiers and descriptors.
#[derive(Parser)]
#[command(name = "vocab-lookup", about = "Look up HiveOT vocabulary identifiers")]
struct Args {
    /// Namespace epoch to search.
    #[arg(long, env = "HIVEOT_VOCAB_EPOCH", default_value = "hiveot")]
    epoch: Epoch,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the identifier bound to a symbolic name.
    Get {
        /// Symbolic name, e.g. `UnitWatt`.
        name: String,
    },
    /// Print the descriptor of a class identifier as JSON.
    Describe {
        /// Class family: action, property, thing or unit.
        family: ClassFamily,
        /// Class identifier, e.g. `hiveot:unit:watt`.
        identifier: String,
    },
    /// List class identifiers, one per line.
    List {
        /// Restrict to one class family.
        #[arg(long)]
        family: Option<ClassFamily>,
    },
    /// Print the JSON catalog of the epoch.
    Dump,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let vocab = Vocabulary::get(args.epoch);
    debug!(epoch = %args.epoch, digest = vocab.digest(), "vocabulary loaded");

    match run(vocab, args.command) {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<LookupError>() {
            Some(lookup) if lookup.is_not_found() => {
                eprintln!("error: {lookup}");
                process::exit(2);
            }
            _ => Err(e),
        },
    }
}

fn run(vocab: &Vocabulary, command: Command) -> Result<()> {
    match command {
        Command::Get { name } => {
            println!("{}", vocab.get_identifier(&name)?);
        }
        Command::Describe { family, identifier } => {
            let descriptor = vocab.describe(family, &identifier)?;
            println!("{}", serde_json::to_string_pretty(descriptor)?);
        }
        Command::List { family } => {
            let ids = match family {
                Some(family) => vocab.list_family(family),
                None => vocab.list_namespace(),
            };
            for id in ids {
                println!("{id}");
            }
        }
        Command::Dump => {
            let namespace = vocab.epoch().namespace();
            let schema = epochs::by_namespace(namespace)?
                .with_context(|| format!("no embedded schema for `{namespace}`"))?;
            println!("{}", serde_json::to_string_pretty(&json::to_json(&schema))?);
        }
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

    #[test]
    fn epoch_defaults_to_hiveot() {
        let args = Args::try_parse_from(["vocab-lookup", "get", "UnitWatt"]).expect("parse");
        if std::env::var_os("HIVEOT_VOCAB_EPOCH").is_none() {
            assert_eq!(args.epoch, Epoch::Hiveot);
        }
    }
}
