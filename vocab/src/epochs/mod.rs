//! Generated epoch tables.
//!
//! Both modules are written by `vocab-gen` from `spec/vocab/<ns>/` and carry
//! the digest of the schema they came from. Regenerate them with
//! `cargo run --bin vocab-gen -- --target rust`.

pub mod hiveot;
pub mod ht;
