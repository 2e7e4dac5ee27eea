//! Schema loading errors.
//!
//! Every variant is a generation-time failure: a malformed schema must stop
//! the generator, never produce a partially valid table.

use std::path::PathBuf;

/// Errors raised while reading or assembling a vocabulary schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A source file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Walking the schema directory failed.
    #[error("failed to list schema directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A source file is not valid YAML or does not match the schema shape.
    /// Duplicate keys within one mapping are reported here.
    #[error("failed to parse {file}: {source}")]
    Parse {
        /// File name of the offending source.
        file: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The same group name is declared by two sources of one epoch.
    #[error("group `{group}` is declared in both {first} and {second}")]
    DuplicateGroup {
        /// The group name.
        group: String,
        /// File holding the first declaration.
        first: String,
        /// File holding the second declaration.
        second: String,
    },

    /// The same symbolic name is bound by two groups of one epoch.
    #[error("symbolic name `{name}` is bound in both {first} and {second}")]
    DuplicateSymbol {
        /// The symbolic name.
        name: String,
        /// Group holding the first binding.
        first: String,
        /// Group holding the second binding.
        second: String,
    },

    /// A symbolic name is not `[A-Za-z][A-Za-z0-9_]*`.
    #[error("symbolic name `{name}` in {group} is not a valid identifier")]
    InvalidSymbol {
        /// The offending name.
        name: String,
        /// Group holding the binding.
        group: String,
    },

    /// A symbolic name clashes with an item the generator declares itself.
    #[error("symbolic name `{name}` in {group} is reserved by the generated module")]
    ReservedSymbol {
        /// The offending name.
        name: String,
        /// Group holding the binding.
        group: String,
    },

    /// The same class identifier appears twice in one epoch.
    #[error("class identifier `{identifier}` is declared by both {first} and {second}")]
    DuplicateIdentifier {
        /// The identifier.
        identifier: String,
        /// Symbolic name of the first declaration.
        first: String,
        /// Symbolic name of the second declaration.
        second: String,
    },

    /// A class file declares a group that is not one of the four families.
    #[error("{file}: `{group}` is not a class family group")]
    UnknownClassGroup {
        /// File name of the offending source.
        file: String,
        /// The unrecognised group name.
        group: String,
    },
}
