//! HiveOT vocabulary.
//!
//! Compile-time constants and descriptor tables for the HiveOT vocabulary:
//! the identifiers used as `@type`, property, event and action keys in
//! Thing Descriptions, the WoT terms and the message constants. Two
//! namespace epochs ship side by side, `ht` and `hiveot`, and neither ever
//! answers for the other.
//!
//! The constants live in [`epochs::ht`] and [`epochs::hiveot`]. For lookups
//! by name use [`Vocabulary`]:
//!
//! ```
//! use hiveot_vocab::{ClassFamily, Epoch, Vocabulary};
//!
//! let vocab = Vocabulary::get(Epoch::Hiveot);
//! let watt = vocab.get_identifier("UnitWatt")?;
//! assert_eq!(watt, "hiveot:unit:watt");
//! assert_eq!(vocab.describe(ClassFamily::Unit, watt)?.symbol, "W");
//! # Ok::<(), hiveot_vocab::LookupError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` for [`ClassDescriptor`], [`ClassFamily`] and [`Epoch`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod epoch;
pub mod epochs;
pub mod error;
pub mod model;
pub mod vocabulary;

pub use epoch::Epoch;
pub use error::LookupError;
pub use model::{ClassDescriptor, ClassEntry, ClassFamily, ClassTable, ConstantGroup, Term};
pub use vocabulary::Vocabulary;

/// Resolves a symbolic name within `epoch`.
///
/// # Errors
///
/// Returns [`LookupError::SymbolNotFound`] if the epoch does not define `name`.
pub fn get_identifier(epoch: Epoch, name: &str) -> Result<&'static str, LookupError> {
    Vocabulary::get(epoch).get_identifier(name)
}

/// Returns the descriptor of a class identifier within `epoch`.
///
/// # Errors
///
/// Returns [`LookupError::DescriptorNotFound`] if the family table of the
/// epoch has no such identifier.
pub fn describe(
    epoch: Epoch,
    family: ClassFamily,
    identifier: &str,
) -> Result<&'static ClassDescriptor, LookupError> {
    Vocabulary::get(epoch).describe(family, identifier)
}

/// All class identifiers of `epoch`.
#[must_use]
pub fn list_namespace(epoch: Epoch) -> &'static [&'static str] {
    Vocabulary::get(epoch).list_namespace()
}

/// All class identifiers of the epoch named `namespace`.
///
/// # Errors
///
/// Returns [`LookupError::UnknownEpoch`] if `namespace` is not `ht` or `hiveot`.
pub fn list_namespace_str(namespace: &str) -> Result<&'static [&'static str], LookupError> {
    Ok(list_namespace(namespace.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_are_epoch_scoped() {
        assert_eq!(get_identifier(Epoch::Ht, "ActionSwitchOff"), Ok("ht:action:switch:off"));
        assert!(get_identifier(Epoch::Hiveot, "ActionSwitchOff")
            .is_err_and(|e| e.is_not_found()));
        assert_eq!(
            describe(Epoch::Ht, ClassFamily::Property, "ht:prop:electric:poer").map(|d| d.title),
            Ok("Power")
        );
    }

    #[test]
    fn list_namespace_by_name() {
        assert_eq!(list_namespace_str("ht").map(<[_]>::len), Ok(245));
        assert_eq!(
            list_namespace_str("wot"),
            Err(LookupError::UnknownEpoch("wot".into()))
        );
    }

    #[test]
    fn generated_constants_match_lookup() {
        assert_eq!(get_identifier(Epoch::Hiveot, "UnitWatt"), Ok(epochs::hiveot::UnitWatt));
        assert_eq!(epochs::ht::NAMESPACE, Epoch::Ht.namespace());
        assert_eq!(epochs::hiveot::SCHEMA_DIGEST.len(), 64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn descriptor_serializes_with_field_names() {
        let d = describe(Epoch::Hiveot, ClassFamily::Unit, "hiveot:unit:watt").expect("watt");
        let v = serde_json::to_value(d).expect("json");
        assert_eq!(v["symbol"], "W");
        assert_eq!(serde_json::to_value(ClassFamily::Property).expect("json"), "property");
        assert_eq!(serde_json::to_value(Epoch::Ht).expect("json"), "ht");
    }
}
