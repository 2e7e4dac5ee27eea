//! Serializers for vocabulary schemas.
//!
//! - **JSON** ([`json`]): the catalog document printed by `vocab-lookup dump`
//!   and consumed by tooling that cannot link the generated sources.

pub mod json;
