//! HiveOT vocabulary schema.
//!
//! The `hiveot-vocab-spec` crate holds the canonical YAML sources of every
//! namespace epoch (`ht`, `hiveot`) and loads them into typed data: constant
//! groups (message types, WoT terms, request status) and the four class
//! families (action, property, thing, unit) with their descriptors.
//!
//! The generated vocabulary sources in every target language are derived
//! from this crate; they are regenerated, never hand-edited.
//!
//! # Entry Point
//!
//! ```
//! let schema = hiveot_vocab_spec::epochs::hiveot::schema()?;
//! assert_eq!(schema.namespace, "hiveot");
//! assert_eq!(schema.find_symbol("UnitWatt"), Some("hiveot:unit:watt"));
//! # Ok::<(), hiveot_vocab_spec::SchemaError>(())
//! ```
//!
//! # Loading from disk
//!
//! ```no_run
//! use std::path::Path;
//!
//! let schema = hiveot_vocab_spec::load_dir("ht", Path::new("spec/vocab/ht"))?;
//! println!("{} classes, digest {}", schema.class_count(), schema.digest);
//! # Ok::<(), hiveot_vocab_spec::SchemaError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod digest;
pub mod epochs;
pub mod error;
pub mod loader;
pub mod model;
pub mod ordered;
pub mod serializer;

pub use digest::schema_digest;
pub use error::SchemaError;
pub use loader::{load_dir, load_sources};
pub use model::{
    ClassFamily, ClassGroup, ConstantGroup, FileGroups, Schema, SchemaFile, VocabClass,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn family_count(schema: &Schema, family: ClassFamily) -> usize {
        schema.class_group(family).map_or(0, |g| g.vocab.len())
    }

    #[test]
    fn ht_inventory() {
        let schema = epochs::ht::schema().expect("load ht");
        assert_eq!(family_count(&schema, ClassFamily::Action), 25);
        assert_eq!(family_count(&schema, ClassFamily::Property), 80);
        assert_eq!(family_count(&schema, ClassFamily::Thing), 109);
        assert_eq!(family_count(&schema, ClassFamily::Unit), 31);
        assert_eq!(schema.class_count(), 245);
    }

    #[test]
    fn hiveot_inventory() {
        let schema = epochs::hiveot::schema().expect("load hiveot");
        assert_eq!(family_count(&schema, ClassFamily::Action), 23);
        assert_eq!(family_count(&schema, ClassFamily::Property), 80);
        assert_eq!(family_count(&schema, ClassFamily::Thing), 96);
        assert_eq!(family_count(&schema, ClassFamily::Unit), 31);
        assert_eq!(schema.class_count(), 230);
    }

    #[test]
    fn all_class_identifiers_carry_the_epoch_prefix() {
        for schema in epochs::all().expect("load") {
            let prefix = format!("{}:", schema.namespace);
            for group in schema.class_groups() {
                assert_eq!(group.namespace, schema.namespace, "{}", group.name);
                for (name, class) in &group.vocab {
                    assert!(
                        class.class_name.starts_with(&prefix),
                        "{name} = {} outside {}",
                        class.class_name,
                        schema.namespace
                    );
                }
            }
        }
    }

    #[test]
    fn switch_on_off_only_in_ht() {
        let ht = epochs::ht::schema().expect("load ht");
        let hiveot = epochs::hiveot::schema().expect("load hiveot");
        assert_eq!(ht.find_symbol("ActionSwitchOn"), Some("ht:action:switch:on"));
        assert_eq!(ht.find_symbol("ActionSwitchOff"), Some("ht:action:switch:off"));
        assert_eq!(hiveot.find_symbol("ActionSwitchOn"), None);
        assert_eq!(
            hiveot.find_symbol("ActionSwitchOnOff"),
            Some("hiveot:action:switch:onoff")
        );
    }

    #[test]
    fn upstream_spellings_are_verbatim() {
        let hiveot = epochs::hiveot::schema().expect("load hiveot");
        let (family, power) = hiveot
            .find_class("hiveot:prop:electric:poer")
            .expect("misspelled power key");
        assert_eq!(family, ClassFamily::Property);
        assert_eq!(power.title, "Power");
        assert_eq!(hiveot.find_symbol("OpUnobserveProperty"), Some("unobserveroperty"));

        let ht = epochs::ht::schema().expect("load ht");
        assert_eq!(ht.find_symbol("WoTOpUnobserveProperty"), Some("unobserveroperty"));
    }

    #[test]
    fn embedded_digest_is_stable() {
        let a = epochs::ht::schema().expect("load");
        let b = epochs::ht::schema().expect("load");
        assert_eq!(a.digest, b.digest);
        assert_ne!(a.digest, epochs::hiveot::schema().expect("load").digest);
    }
}
