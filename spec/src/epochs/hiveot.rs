//! `hiveot` epoch: the current namespace, with WoT operation names and request status constants.

use crate::error::SchemaError;
use crate::loader::load_sources;
use crate::model::Schema;

/// Namespace prefix of this epoch.
pub const NAMESPACE: &str = "hiveot";

/// The canonical sources of this epoch as `(file_name, contents)` pairs.
pub const SOURCES: &[(&str, &str)] = &[
    ("ht-action-classes.yaml", include_str!("../../vocab/hiveot/ht-action-classes.yaml")),
    ("ht-constants.yaml", include_str!("../../vocab/hiveot/ht-constants.yaml")),
    ("ht-property-classes.yaml", include_str!("../../vocab/hiveot/ht-property-classes.yaml")),
    ("ht-thing-classes.yaml", include_str!("../../vocab/hiveot/ht-thing-classes.yaml")),
    ("ht-unit-classes.yaml", include_str!("../../vocab/hiveot/ht-unit-classes.yaml")),
    ("wot-vocab.yaml", include_str!("../../vocab/hiveot/wot-vocab.yaml")),
];

/// Loads this epoch from the embedded sources.
///
/// # Errors
///
/// Returns [`SchemaError`] if a source fails to parse or the sources collide.
pub fn schema() -> Result<Schema, SchemaError> {
    load_sources(NAMESPACE, SOURCES)
}
