//! `ht` epoch: the legacy namespace, with separate switch on/off actions.

use crate::error::SchemaError;
use crate::loader::load_sources;
use crate::model::Schema;

/// Namespace prefix of this epoch.
pub const NAMESPACE: &str = "ht";

/// The canonical sources of this epoch as `(file_name, contents)` pairs.
pub const SOURCES: &[(&str, &str)] = &[
    ("ht-action-classes.yaml", include_str!("../../vocab/ht/ht-action-classes.yaml")),
    ("ht-constants.yaml", include_str!("../../vocab/ht/ht-constants.yaml")),
    ("ht-property-classes.yaml", include_str!("../../vocab/ht/ht-property-classes.yaml")),
    ("ht-thing-classes.yaml", include_str!("../../vocab/ht/ht-thing-classes.yaml")),
    ("ht-unit-classes.yaml", include_str!("../../vocab/ht/ht-unit-classes.yaml")),
    ("wot-vocab.yaml", include_str!("../../vocab/ht/wot-vocab.yaml")),
];

/// Loads this epoch from the embedded sources.
///
/// # Errors
///
/// Returns [`SchemaError`] if a source fails to parse or the sources collide.
pub fn schema() -> Result<Schema, SchemaError> {
    load_sources(NAMESPACE, SOURCES)
}
