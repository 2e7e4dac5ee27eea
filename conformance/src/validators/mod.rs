//! Conformance validators.
//!
//! - [`schema`]: the YAML vocabulary sources of every epoch.
//! - [`generated`]: the compiled `hiveot-vocab` tables and the generated
//!   source files on disk.

pub mod generated;
pub mod schema;
