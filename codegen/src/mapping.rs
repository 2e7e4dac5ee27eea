//! Schema → output mapping tables.
//!
//! Deterministic mappings from epochs and groups to output paths and
//! generated identifiers.

use std::path::PathBuf;

use hiveot_vocab_spec::ClassFamily;

use crate::Target;

/// Returns the output path of `target` for epoch `namespace`, relative to
/// the workspace root.
#[must_use]
pub fn output_path(target: Target, namespace: &str) -> PathBuf {
    match target {
        Target::Go => PathBuf::from(format!("api/go/vocab/{namespace}/{namespace}-vocab.go")),
        Target::JavaScript => PathBuf::from(format!("api/js/vocab/{namespace}-vocab.js")),
        Target::Python => PathBuf::from(format!("api/py/vocab/{namespace}-vocab.py")),
        Target::Rust => PathBuf::from(format!("vocab/src/epochs/{namespace}.rs")),
    }
}

/// Name of the descriptor map emitted after a class group, e.g.
/// `"UnitClassesMap"`.
#[must_use]
pub fn descriptor_map_name(group: &str) -> String {
    format!("{group}Map")
}

/// Rust path of a family variant in the generated tables.
#[must_use]
pub fn family_path(family: ClassFamily) -> String {
    format!("ClassFamily::{}", family.variant_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_outputs_get_one_package_per_epoch() {
        assert_eq!(
            output_path(Target::Go, "hiveot"),
            PathBuf::from("api/go/vocab/hiveot/hiveot-vocab.go")
        );
        assert_eq!(output_path(Target::Rust, "ht"), PathBuf::from("vocab/src/epochs/ht.rs"));
    }

    #[test]
    fn names() {
        assert_eq!(descriptor_map_name("ThingClasses"), "ThingClassesMap");
        assert_eq!(family_path(ClassFamily::Property), "ClassFamily::Property");
    }
}
