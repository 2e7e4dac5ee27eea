//! Embedded namespace epochs.
//!
//! Each sub-module compiles the canonical YAML sources of one epoch into the
//! crate with `include_str!`, so the generator and the conformance suite can
//! work without a checkout of `spec/vocab/`.

use crate::error::SchemaError;
use crate::model::Schema;

pub mod hiveot;
pub mod ht;

/// Namespace prefixes of all embedded epochs, oldest first.
pub const NAMESPACES: [&str; 2] = [ht::NAMESPACE, hiveot::NAMESPACE];

/// Loads every embedded epoch, oldest first.
///
/// # Errors
///
/// Returns [`SchemaError`] if an embedded source fails to load.
pub fn all() -> Result<Vec<Schema>, SchemaError> {
    Ok(vec![ht::schema()?, hiveot::schema()?])
}

/// Loads an embedded epoch by namespace prefix. Returns `Ok(None)` for an
/// unknown namespace.
///
/// # Errors
///
/// Returns [`SchemaError`] if the embedded sources fail to load.
pub fn by_namespace(namespace: &str) -> Result<Option<Schema>, SchemaError> {
    match namespace {
        ht::NAMESPACE => ht::schema().map(Some),
        hiveot::NAMESPACE => hiveot::schema().map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_namespace_is_none() {
        assert!(by_namespace("wot").expect("load").is_none());
    }

    #[test]
    fn epochs_load_in_declared_order() {
        let schemas = all().expect("load");
        let namespaces: Vec<_> = schemas.iter().map(|s| s.namespace.as_str()).collect();
        assert_eq!(namespaces, NAMESPACES);
    }
}
