//! Schema validators (inventory, identifiers, isolation, descriptors,
//! coverage, verbatim spellings).

pub mod coverage;
pub mod descriptors;
pub mod identifiers;
pub mod inventory;
pub mod isolation;
pub mod verbatim;
