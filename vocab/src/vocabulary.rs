//! Epoch-scoped lookup over the generated tables.
//!
//! Each epoch's indexes are built once, on first use, behind a
//! [`OnceLock`]. After that every lookup is a lock-free read of immutable
//! data, so a `&'static Vocabulary` can be shared freely across threads.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::epoch::Epoch;
use crate::epochs;
use crate::error::LookupError;
use crate::model::{ClassDescriptor, ClassFamily, ClassTable, ConstantGroup};

static HT: OnceLock<Vocabulary> = OnceLock::new();
static HIVEOT: OnceLock<Vocabulary> = OnceLock::new();

/// Indexed view of one epoch's generated tables.
#[derive(Debug)]
pub struct Vocabulary {
    epoch: Epoch,
    digest: &'static str,
    constant_groups: &'static [ConstantGroup],
    class_tables: &'static [ClassTable],
    /// Every symbolic name, class or plain constant, to its value.
    symbols: HashMap<&'static str, &'static str>,
    /// Per family: identifier to descriptor.
    descriptors: [HashMap<&'static str, &'static ClassDescriptor>; 4],
    families: HashMap<&'static str, ClassFamily>,
    namespace: Vec<&'static str>,
    by_family: [Vec<&'static str>; 4],
}

impl Vocabulary {
    /// Returns the vocabulary of `epoch`, building its indexes on first use.
    pub fn get(epoch: Epoch) -> &'static Vocabulary {
        match epoch {
            Epoch::Ht => HT.get_or_init(|| {
                Vocabulary::build(
                    Epoch::Ht,
                    epochs::ht::SCHEMA_DIGEST,
                    epochs::ht::CONSTANT_GROUPS,
                    epochs::ht::CLASS_TABLES,
                )
            }),
            Epoch::Hiveot => HIVEOT.get_or_init(|| {
                Vocabulary::build(
                    Epoch::Hiveot,
                    epochs::hiveot::SCHEMA_DIGEST,
                    epochs::hiveot::CONSTANT_GROUPS,
                    epochs::hiveot::CLASS_TABLES,
                )
            }),
        }
    }

    fn build(
        epoch: Epoch,
        digest: &'static str,
        constant_groups: &'static [ConstantGroup],
        class_tables: &'static [ClassTable],
    ) -> Vocabulary {
        let mut symbols = HashMap::new();
        for term in constant_groups.iter().flat_map(|g| g.terms) {
            symbols.insert(term.name, term.value);
        }

        let mut descriptors: [HashMap<_, _>; 4] = Default::default();
        let mut by_family: [Vec<_>; 4] = Default::default();
        let mut families = HashMap::new();
        let mut namespace = Vec::new();
        for table in class_tables {
            let slot = table.family.index();
            for entry in table.entries {
                symbols.insert(entry.name, entry.id);
                descriptors[slot].insert(entry.id, &entry.descriptor);
                by_family[slot].push(entry.id);
                families.insert(entry.id, table.family);
                namespace.push(entry.id);
            }
        }

        Vocabulary {
            epoch,
            digest,
            constant_groups,
            class_tables,
            symbols,
            descriptors,
            families,
            namespace,
            by_family,
        }
    }

    /// The epoch this vocabulary belongs to.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Digest of the schema the tables were generated from.
    #[must_use]
    pub fn digest(&self) -> &'static str {
        self.digest
    }

    /// Plain constant groups (WoT terms, message types, status values).
    #[must_use]
    pub fn constant_groups(&self) -> &'static [ConstantGroup] {
        self.constant_groups
    }

    /// Class tables in source order.
    #[must_use]
    pub fn class_tables(&self) -> &'static [ClassTable] {
        self.class_tables
    }

    /// Resolves a symbolic name to its string value.
    ///
    /// Covers class identifiers as well as WoT and message constants.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SymbolNotFound`] if the epoch does not define
    /// `name`. Other epochs are never consulted.
    pub fn get_identifier(&self, name: &str) -> Result<&'static str, LookupError> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::SymbolNotFound {
                epoch: self.epoch.namespace(),
                name: name.to_string(),
            })
    }

    /// Returns the descriptor of `identifier` in the `family` table.
    ///
    /// Matching is exact; there is no prefix or parent fallback.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::DescriptorNotFound`] if the table has no such key.
    pub fn describe(
        &self,
        family: ClassFamily,
        identifier: &str,
    ) -> Result<&'static ClassDescriptor, LookupError> {
        self.descriptors[family.index()]
            .get(identifier)
            .copied()
            .ok_or_else(|| LookupError::DescriptorNotFound {
                epoch: self.epoch.namespace(),
                family,
                identifier: identifier.to_string(),
            })
    }

    /// All class identifiers of the epoch: actions, properties, things, units.
    #[must_use]
    pub fn list_namespace(&self) -> &[&'static str] {
        &self.namespace
    }

    /// Class identifiers of one family, in source order.
    #[must_use]
    pub fn list_family(&self, family: ClassFamily) -> &[&'static str] {
        &self.by_family[family.index()]
    }

    /// The family whose table holds `identifier`.
    #[must_use]
    pub fn identifier_family(&self, identifier: &str) -> Option<ClassFamily> {
        self.families.get(identifier).copied()
    }

    /// Display title for a Thing `@type`, or `at_type` itself if the epoch
    /// has no titled thing class for it.
    #[must_use]
    pub fn thing_title<'a>(&self, at_type: &'a str) -> &'a str {
        match self.descriptors[ClassFamily::Thing.index()].get(at_type) {
            Some(d) if !d.title.is_empty() => d.title,
            _ => at_type,
        }
    }

    /// Display symbol for a unit identifier, or `unit` itself if the epoch
    /// has no symbol for it.
    #[must_use]
    pub fn unit_symbol<'a>(&self, unit: &'a str) -> &'a str {
        match self.descriptors[ClassFamily::Unit.index()].get(unit) {
            Some(d) if !d.symbol.is_empty() => d.symbol,
            _ => unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn describe_watt() {
        let d = Vocabulary::get(Epoch::Hiveot)
            .describe(ClassFamily::Unit, "hiveot:unit:watt")
            .expect("watt");
        assert_eq!(d.symbol, "W");
        assert_eq!(d.title, "Watt");
        assert!(d.description.starts_with("SI unit of power"));
    }

    #[test]
    fn describe_keeps_misspelled_power_key() {
        let vocab = Vocabulary::get(Epoch::Hiveot);
        let d = vocab
            .describe(ClassFamily::Property, "hiveot:prop:electric:poer")
            .expect("poer");
        assert_eq!(d.title, "Power");
        assert_eq!(vocab.get_identifier("PropElectricPower"), Ok("hiveot:prop:electric:poer"));
        assert!(vocab
            .describe(ClassFamily::Property, "hiveot:prop:electric:power")
            .is_err());
    }

    #[test]
    fn ht_namespace_lists_every_class_identifier() {
        let vocab = Vocabulary::get(Epoch::Ht);
        let listed = vocab.list_namespace();
        assert_eq!(listed.len(), 25 + 80 + 109 + 31);
        assert!(listed.iter().all(|id| id.starts_with("ht:")));
        assert_eq!(vocab.list_family(ClassFamily::Action).len(), 25);
        assert_eq!(vocab.list_family(ClassFamily::Thing).len(), 109);
        assert_eq!(Vocabulary::get(Epoch::Hiveot).list_namespace().len(), 23 + 80 + 96 + 31);
    }

    #[test]
    fn switch_on_is_not_borrowed_from_older_epoch() {
        assert_eq!(
            Vocabulary::get(Epoch::Ht).get_identifier("ActionSwitchOn"),
            Ok("ht:action:switch:on")
        );
        let err = Vocabulary::get(Epoch::Hiveot)
            .get_identifier("ActionSwitchOn")
            .expect_err("absent in hiveot");
        assert!(err.is_not_found());
        assert_eq!(
            Vocabulary::get(Epoch::Hiveot).get_identifier("ActionSwitchOnOff"),
            Ok("hiveot:action:switch:onoff")
        );
    }

    #[test]
    fn battery_identifiers_differ_across_epochs() {
        let ht = Vocabulary::get(Epoch::Ht).get_identifier("PropDeviceBattery");
        let hiveot = Vocabulary::get(Epoch::Hiveot).get_identifier("PropDeviceBattery");
        assert_eq!(ht, Ok("ht:prop:device:battery"));
        assert_eq!(hiveot, Ok("hiveot:prop:device:battery"));
        assert_ne!(ht, hiveot);
    }

    #[test]
    fn family_tables_have_unique_keys() {
        for epoch in Epoch::ALL {
            let vocab = Vocabulary::get(epoch);
            for family in ClassFamily::ALL {
                let keys = vocab.list_family(family);
                let unique: HashSet<_> = keys.iter().collect();
                assert_eq!(unique.len(), keys.len(), "{epoch} {family}");
            }
        }
    }

    #[test]
    fn class_constants_map_into_matching_family() {
        for epoch in Epoch::ALL {
            let vocab = Vocabulary::get(epoch);
            for table in vocab.class_tables() {
                for entry in table.entries {
                    let kind = entry.id.split(':').nth(1);
                    assert_eq!(kind, Some(table.family.kind()), "{}", entry.id);
                    assert!(vocab.describe(table.family, entry.id).is_ok());
                }
            }
        }
    }

    #[test]
    fn epochs_are_isolated() {
        let ht = Vocabulary::get(Epoch::Ht);
        let hiveot = Vocabulary::get(Epoch::Hiveot);
        for id in ht.list_namespace() {
            assert_eq!(hiveot.identifier_family(id), None, "{id}");
        }
        for id in hiveot.list_namespace() {
            assert_eq!(ht.identifier_family(id), None, "{id}");
        }
        let err = hiveot
            .describe(ClassFamily::Unit, "ht:unit:watt")
            .expect_err("cross-epoch key");
        assert!(err.is_not_found());
    }

    #[test]
    fn titles_present_except_electric_meter() {
        for epoch in Epoch::ALL {
            let vocab = Vocabulary::get(epoch);
            let untitled: Vec<_> = vocab
                .class_tables()
                .iter()
                .flat_map(|t| t.entries)
                .filter(|e| e.descriptor.title.is_empty())
                .map(|e| e.id)
                .collect();
            let expected = format!("{}:thing:meter:electric", epoch.namespace());
            assert_eq!(untitled, [expected.as_str()]);
        }
    }

    #[test]
    fn label_helpers_fall_back_to_raw_input() {
        let vocab = Vocabulary::get(Epoch::Hiveot);
        assert_eq!(vocab.thing_title("hiveot:thing:sensor"), "Sensor");
        assert_eq!(vocab.thing_title("hiveot:thing:meter:electric"), "hiveot:thing:meter:electric");
        assert_eq!(vocab.thing_title("acme:gadget"), "acme:gadget");
        assert_eq!(vocab.unit_symbol("hiveot:unit:watt"), "W");
        assert_eq!(vocab.unit_symbol("hiveot:unit:celcius"), "°C");
        assert_eq!(Vocabulary::get(Epoch::Ht).unit_symbol("ht:unit:celcius"), "C");
        assert_eq!(vocab.unit_symbol("furlong"), "furlong");
    }

    #[test]
    fn identifier_family_resolves_kind() {
        let vocab = Vocabulary::get(Epoch::Ht);
        assert_eq!(vocab.identifier_family("ht:unit:watt"), Some(ClassFamily::Unit));
        assert_eq!(vocab.identifier_family("ht:prop:device:battery"), Some(ClassFamily::Property));
        assert_eq!(vocab.identifier_family("ht:nothing"), None);
    }

    #[test]
    fn wot_terms_are_looked_up_verbatim() {
        assert_eq!(
            Vocabulary::get(Epoch::Hiveot).get_identifier("OpUnobserveProperty"),
            Ok("unobserveroperty")
        );
        assert_eq!(
            Vocabulary::get(Epoch::Ht).get_identifier("WoTOpUnobserveProperty"),
            Ok("unobserveroperty")
        );
    }

    #[test]
    fn concurrent_first_use_builds_one_index() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Vocabulary::get(Epoch::Ht) as *const Vocabulary as usize))
            .collect();
        let addrs: HashSet<usize> = handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .collect();
        assert_eq!(addrs.len(), 1);
    }
}
