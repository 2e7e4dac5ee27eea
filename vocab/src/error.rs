//! Lookup errors.

use thiserror::Error;

use crate::model::ClassFamily;

/// Error returned by vocabulary lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No symbolic constant with this name exists in the epoch.
    #[error("vocabulary key not found: `{name}` is not defined in epoch `{epoch}`")]
    SymbolNotFound {
        /// Namespace prefix of the epoch searched.
        epoch: &'static str,
        /// The requested symbolic name.
        name: String,
    },
    /// The identifier has no descriptor in the family table.
    #[error("vocabulary key not found: `{identifier}` has no {family} descriptor in epoch `{epoch}`")]
    DescriptorNotFound {
        /// Namespace prefix of the epoch searched.
        epoch: &'static str,
        /// The family table searched.
        family: ClassFamily,
        /// The requested identifier.
        identifier: String,
    },
    /// The namespace is not a known epoch.
    #[error("unknown vocabulary epoch `{0}` (expected `ht` or `hiveot`)")]
    UnknownEpoch(String),
    /// The name is not a class family.
    #[error("unknown class family `{0}` (expected action, property, thing or unit)")]
    UnknownFamily(String),
}

impl LookupError {
    /// True when a well-formed key was simply absent from the epoch.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::SymbolNotFound { .. } | LookupError::DescriptorNotFound { .. }
        )
    }
}
