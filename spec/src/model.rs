//! Core schema model types.
//!
//! These types mirror the YAML vocabulary sources one-to-one. A [`Schema`] is
//! one namespace epoch: every source file of that epoch, parsed, in file-name
//! order, with its groups and entries kept in source order.

use serde::Deserialize;

use crate::ordered::OrderedMap;

/// The four class families that carry descriptor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassFamily {
    /// Action classes (`<ns>:action:...`).
    Action,
    /// Property classes (`<ns>:prop:...`).
    Property,
    /// Thing classes (`<ns>:thing:...`).
    Thing,
    /// Unit classes (`<ns>:unit:...`).
    Unit,
}

impl ClassFamily {
    /// All families in table emission order.
    pub const ALL: [ClassFamily; 4] = [
        ClassFamily::Action,
        ClassFamily::Property,
        ClassFamily::Thing,
        ClassFamily::Unit,
    ];

    /// Returns the identifier segment that follows the namespace, e.g. `"prop"`.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            ClassFamily::Action => "action",
            ClassFamily::Property => "prop",
            ClassFamily::Thing => "thing",
            ClassFamily::Unit => "unit",
        }
    }

    /// Returns the schema group name for this family, e.g. `"PropertyClasses"`.
    #[must_use]
    pub fn group_name(self) -> &'static str {
        match self {
            ClassFamily::Action => "ActionClasses",
            ClassFamily::Property => "PropertyClasses",
            ClassFamily::Thing => "ThingClasses",
            ClassFamily::Unit => "UnitClasses",
        }
    }

    /// Returns the Rust variant name used by generated code.
    #[must_use]
    pub fn variant_name(self) -> &'static str {
        match self {
            ClassFamily::Action => "Action",
            ClassFamily::Property => "Property",
            ClassFamily::Thing => "Thing",
            ClassFamily::Unit => "Unit",
        }
    }

    /// Resolves a schema group name to its family.
    #[must_use]
    pub fn from_group_name(name: &str) -> Option<ClassFamily> {
        ClassFamily::ALL
            .into_iter()
            .find(|family| family.group_name() == name)
    }
}

/// A single class entry: identifier plus its descriptor fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabClass {
    /// The class identifier, e.g. `"hiveot:unit:watt"`.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Human-readable short name.
    #[serde(default)]
    pub title: String,
    /// Human-readable explanation. May be empty.
    #[serde(default)]
    pub description: String,
    /// Short notation, mostly for units. May be empty.
    #[serde(default)]
    pub symbol: String,
}

/// A group of class entries, e.g. `ActionClasses`.
#[derive(Debug, Clone)]
pub struct ClassGroup {
    /// Group name as it appears at the top level of the source file.
    pub name: String,
    /// The family this group belongs to.
    pub family: ClassFamily,
    /// Schema version string.
    pub version: String,
    /// Link to the upstream source of the group.
    pub link: String,
    /// Namespace declared by the group.
    pub namespace: String,
    /// Group description. May be empty.
    pub description: String,
    /// Entries keyed by symbolic name, in source order.
    pub vocab: Vec<(String, VocabClass)>,
}

/// A group of plain string constants, e.g. `WoTVocab`.
#[derive(Debug, Clone)]
pub struct ConstantGroup {
    /// Group name as it appears at the top level of the source file.
    pub name: String,
    /// Schema version string.
    pub version: String,
    /// Link to the upstream source of the group.
    pub link: String,
    /// Group description. May be empty.
    pub description: String,
    /// Values keyed by symbolic name, in source order.
    pub vocab: Vec<(String, String)>,
}

/// The groups found in one source file.
#[derive(Debug, Clone)]
pub enum FileGroups {
    /// A `*classes.yaml` file.
    Classes(Vec<ClassGroup>),
    /// Any other `*.yaml` file.
    Constants(Vec<ConstantGroup>),
}

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    /// Bare file name, e.g. `"ht-unit-classes.yaml"`.
    pub file_name: String,
    /// The groups declared in the file.
    pub groups: FileGroups,
}

impl SchemaFile {
    /// Returns the constant groups of this file; empty for a class file.
    #[must_use]
    pub fn constant_groups(&self) -> &[ConstantGroup] {
        match &self.groups {
            FileGroups::Constants(groups) => groups,
            FileGroups::Classes(_) => &[],
        }
    }

    /// Returns the class groups of this file; empty for a constants file.
    #[must_use]
    pub fn class_groups(&self) -> &[ClassGroup] {
        match &self.groups {
            FileGroups::Classes(groups) => groups,
            FileGroups::Constants(_) => &[],
        }
    }
}

/// A complete namespace epoch.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Namespace prefix of the epoch, e.g. `"hiveot"`.
    pub namespace: String,
    /// Source files in file-name order.
    pub files: Vec<SchemaFile>,
    /// Lowercase hex SHA-256 of the raw sources, see [`crate::digest`].
    pub digest: String,
}

impl Schema {
    /// Iterates all constant groups in source order.
    pub fn constant_groups(&self) -> impl Iterator<Item = &ConstantGroup> {
        self.files.iter().flat_map(SchemaFile::constant_groups)
    }

    /// Iterates all class groups in source order.
    pub fn class_groups(&self) -> impl Iterator<Item = &ClassGroup> {
        self.files.iter().flat_map(SchemaFile::class_groups)
    }

    /// Returns the class group of a family, if the epoch defines one.
    #[must_use]
    pub fn class_group(&self, family: ClassFamily) -> Option<&ClassGroup> {
        self.class_groups().find(|g| g.family == family)
    }

    /// Total number of plain constants across all constant groups.
    #[must_use]
    pub fn constant_count(&self) -> usize {
        self.constant_groups().map(|g| g.vocab.len()).sum()
    }

    /// Total number of class entries across all class groups.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.class_groups().map(|g| g.vocab.len()).sum()
    }

    /// Looks up the value bound to a symbolic name, in any group.
    #[must_use]
    pub fn find_symbol(&self, name: &str) -> Option<&str> {
        let constant = self
            .constant_groups()
            .flat_map(|g| g.vocab.iter())
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str());
        constant.or_else(|| {
            self.class_groups()
                .flat_map(|g| g.vocab.iter())
                .find(|(n, _)| n == name)
                .map(|(_, c)| c.class_name.as_str())
        })
    }

    /// Looks up a class entry by identifier, returning its family as well.
    #[must_use]
    pub fn find_class(&self, identifier: &str) -> Option<(ClassFamily, &VocabClass)> {
        self.class_groups().find_map(|g| {
            g.vocab
                .iter()
                .find(|(_, c)| c.class_name == identifier)
                .map(|(_, c)| (g.family, c))
        })
    }
}

/// Raw YAML shape of a class group.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClassGroup {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub description: String,
    pub vocab: OrderedMap<VocabClass>,
}

/// Raw YAML shape of a constant group.
#[derive(Debug, Deserialize)]
pub(crate) struct RawConstantGroup {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    pub vocab: OrderedMap<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_group_names_round_trip() {
        for family in ClassFamily::ALL {
            assert_eq!(ClassFamily::from_group_name(family.group_name()), Some(family));
        }
        assert_eq!(ClassFamily::from_group_name("WoTVocab"), None);
    }

    #[test]
    fn family_kinds_match_identifier_segments() {
        assert_eq!(ClassFamily::Property.kind(), "prop");
        assert_eq!(ClassFamily::Unit.kind(), "unit");
    }
}
