//! Generated artifact validators.

pub mod sources;
pub mod tables;
