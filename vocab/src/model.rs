//! Table types shared by the generated epoch modules.
//!
//! Every value is `'static`: the generated modules build these as `static`
//! slices, so nothing here allocates.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// The four class families that carry descriptor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClassFamily {
    /// Actions a Thing can perform.
    Action,
    /// Properties and event payloads.
    Property,
    /// Device and service types.
    Thing,
    /// Units of measurement.
    Unit,
}

impl ClassFamily {
    /// All families, in table order.
    pub const ALL: [ClassFamily; 4] = [
        ClassFamily::Action,
        ClassFamily::Property,
        ClassFamily::Thing,
        ClassFamily::Unit,
    ];

    /// The identifier segment that follows the namespace prefix.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            ClassFamily::Action => "action",
            ClassFamily::Property => "prop",
            ClassFamily::Thing => "thing",
            ClassFamily::Unit => "unit",
        }
    }

    /// Lowercase display name, e.g. `"property"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClassFamily::Action => "action",
            ClassFamily::Property => "property",
            ClassFamily::Thing => "thing",
            ClassFamily::Unit => "unit",
        }
    }

    /// Index into per-family arrays.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ClassFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassFamily {
    type Err = LookupError;

    /// Accepts `action`, `property`, `prop`, `thing` and `unit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(ClassFamily::Action),
            "property" | "prop" => Ok(ClassFamily::Property),
            "thing" => Ok(ClassFamily::Thing),
            "unit" => Ok(ClassFamily::Unit),
            other => Err(LookupError::UnknownFamily(other.to_string())),
        }
    }
}

/// Human-readable information attached to a class identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassDescriptor {
    /// Short notation, mostly for units (`"°C"`, `"W"`). Often empty.
    pub symbol: &'static str,
    /// Short human-readable name. May be empty.
    pub title: &'static str,
    /// Longer explanation. May be empty.
    pub description: &'static str,
}

/// A symbolic name bound to a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Symbolic name, e.g. `"WoTTitle"`.
    pub name: &'static str,
    /// Value, e.g. `"title"`.
    pub value: &'static str,
}

/// A group of plain constants, e.g. `WoTVocab`.
#[derive(Debug, Clone, Copy)]
pub struct ConstantGroup {
    /// Group name.
    pub name: &'static str,
    /// Schema version of the group.
    pub version: &'static str,
    /// Upstream source link.
    pub source: &'static str,
    /// Description. May be empty.
    pub description: &'static str,
    /// Terms in source order.
    pub terms: &'static [Term],
}

/// One row of a class table.
#[derive(Debug, Clone, Copy)]
pub struct ClassEntry {
    /// Symbolic name, e.g. `"UnitWatt"`.
    pub name: &'static str,
    /// Class identifier, e.g. `"hiveot:unit:watt"`.
    pub id: &'static str,
    /// Descriptor of the class.
    pub descriptor: ClassDescriptor,
}

/// All classes of one family in one epoch.
#[derive(Debug, Clone, Copy)]
pub struct ClassTable {
    /// Family of every entry.
    pub family: ClassFamily,
    /// Group name, e.g. `"UnitClasses"`.
    pub name: &'static str,
    /// Schema version of the group.
    pub version: &'static str,
    /// Upstream source link.
    pub source: &'static str,
    /// Namespace declared by the group.
    pub namespace: &'static str,
    /// Entries in source order.
    pub entries: &'static [ClassEntry],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_both_property_spellings() {
        assert_eq!("prop".parse::<ClassFamily>(), Ok(ClassFamily::Property));
        assert_eq!("property".parse::<ClassFamily>(), Ok(ClassFamily::Property));
        assert_eq!(
            "event".parse::<ClassFamily>(),
            Err(LookupError::UnknownFamily("event".into()))
        );
    }

    #[test]
    fn family_index_follows_declaration_order() {
        for (i, family) in ClassFamily::ALL.into_iter().enumerate() {
            assert_eq!(family.index(), i);
        }
    }
}
