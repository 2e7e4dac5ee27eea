//! Namespace epochs.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// A namespace epoch. Each epoch is an independent, frozen snapshot of the
/// vocabulary; identifiers never cross epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Epoch {
    /// The earlier `ht` namespace.
    Ht,
    /// The current `hiveot` namespace.
    Hiveot,
}

impl Epoch {
    /// All epochs, oldest first.
    pub const ALL: [Epoch; 2] = [Epoch::Ht, Epoch::Hiveot];

    /// The namespace prefix, e.g. `"hiveot"`.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Epoch::Ht => "ht",
            Epoch::Hiveot => "hiveot",
        }
    }

    /// Returns the epoch whose prefix an identifier carries, if any.
    ///
    /// ```
    /// use hiveot_vocab::Epoch;
    ///
    /// assert_eq!(Epoch::of_identifier("ht:unit:watt"), Some(Epoch::Ht));
    /// assert_eq!(Epoch::of_identifier("watt"), None);
    /// ```
    #[must_use]
    pub fn of_identifier(identifier: &str) -> Option<Epoch> {
        let (prefix, _) = identifier.split_once(':')?;
        Epoch::ALL.into_iter().find(|e| e.namespace() == prefix)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

impl FromStr for Epoch {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Epoch::ALL
            .into_iter()
            .find(|e| e.namespace() == s)
            .ok_or_else(|| LookupError::UnknownEpoch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaces() {
        assert_eq!("ht".parse::<Epoch>(), Ok(Epoch::Ht));
        assert_eq!("hiveot".parse::<Epoch>(), Ok(Epoch::Hiveot));
        assert!(matches!("HT".parse::<Epoch>(), Err(LookupError::UnknownEpoch(_))));
    }

    #[test]
    fn prefix_must_be_a_whole_segment() {
        assert_eq!(Epoch::of_identifier("hiveot:thing:sensor"), Some(Epoch::Hiveot));
        assert_eq!(Epoch::of_identifier("hiveotx:thing:sensor"), None);
        assert_eq!(Epoch::of_identifier("htx:thing"), None);
    }
}
