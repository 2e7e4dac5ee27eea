//! HiveOT vocabulary conformance suite.
//!
//! Validates the canonical YAML schema of every namespace epoch and the
//! artifacts derived from it.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Schema | Literal per-family inventory, identifier format, epoch isolation |
//! | Descriptors | Unique keys, titles present (gaps reported as warnings) |
//! | Upstream spellings | Preserved byte-for-byte |
//! | `hiveot-vocab` tables | Equal to the schema, same digest |
//! | Generated sources | Byte-identical to a fresh render |
//!
//! # Entry Point
//!
//! ```no_run
//! use hiveot_vocab_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths {
//!     workspace: PathBuf::from("."),
//! };
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use hiveot_vocab_spec::{epochs, load_dir, Schema};
use tracing::info;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct WorkspacePaths {
    /// Root of the workspace (contains `spec/vocab/`, `vocab/`, `api/`).
    pub workspace: PathBuf,
}

impl WorkspacePaths {
    /// Directory holding the YAML sources of one epoch.
    pub fn schema_dir(&self, namespace: &str) -> PathBuf {
        self.workspace.join("spec").join("vocab").join(namespace)
    }
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Schema load (every epoch under `spec/vocab/`)
/// 2. Inventory (ht 25/80/109/31, hiveot 23/80/96/31)
/// 3. Identifier format
/// 4. Epoch isolation
/// 5. Descriptor keys and titles
/// 6. Symbol coverage
/// 7. Verbatim upstream spellings
/// 8. Compiled `hiveot-vocab` tables
/// 9. Generated sources
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Schema load
    let mut schemas: Vec<Schema> = Vec::new();
    for namespace in epochs::NAMESPACES {
        let dir = paths.schema_dir(namespace);
        match load_dir(namespace, &dir) {
            Ok(schema) => {
                report.push(TestResult::pass(
                    "schema/load",
                    format!(
                        "Loaded {namespace}: {} constants, {} classes",
                        schema.constant_count(),
                        schema.class_count()
                    ),
                ));
                schemas.push(schema);
            }
            Err(e) => report.push(TestResult::fail(
                "schema/load",
                format!("{}: {e}", dir.display()),
            )),
        }
    }
    if !report.all_passed() {
        return Ok(report);
    }

    // 2-7. Schema
    report.extend(validators::schema::inventory::validate(&schemas));
    report.extend(validators::schema::identifiers::validate(&schemas)?);
    report.extend(validators::schema::isolation::validate(&schemas));
    report.extend(validators::schema::descriptors::validate(&schemas));
    report.extend(validators::schema::coverage::validate(&schemas));
    report.extend(validators::schema::verbatim::validate(&schemas));

    // 8-9. Generated artifacts
    report.extend(validators::generated::tables::validate(&schemas));
    report.extend(validators::generated::sources::validate(
        &schemas,
        &paths.workspace,
    )?);

    info!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn workspace() -> WorkspacePaths {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        WorkspacePaths {
            workspace: manifest.parent().unwrap_or(manifest).to_path_buf(),
        }
    }

    fn failures(report: &ConformanceReport) -> Vec<String> {
        report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| format!("{}: {} {:?}", r.validator, r.message, r.details))
            .collect()
    }

    #[test]
    fn embedded_schemas_pass_schema_validators() {
        let schemas = epochs::all().expect("load");
        let mut report = ConformanceReport::new();
        report.extend(validators::schema::inventory::validate(&schemas));
        report.extend(validators::schema::identifiers::validate(&schemas).expect("regex"));
        report.extend(validators::schema::isolation::validate(&schemas));
        report.extend(validators::schema::descriptors::validate(&schemas));
        report.extend(validators::schema::coverage::validate(&schemas));
        report.extend(validators::schema::verbatim::validate(&schemas));
        assert!(report.all_passed(), "{:#?}", failures(&report));
    }

    #[test]
    fn untitled_electric_meter_is_only_a_warning() {
        let schemas = epochs::all().expect("load");
        let report = validators::schema::descriptors::validate(&schemas);
        let warnings: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].details, ["ThingMeterElectric = ht:thing:meter:electric"]);
        assert_eq!(
            warnings[1].details,
            ["ThingMeterElectric = hiveot:thing:meter:electric"]
        );
    }

    #[test]
    fn compiled_tables_match_embedded_schemas() {
        let schemas = epochs::all().expect("load");
        let report = validators::generated::tables::validate(&schemas);
        assert!(report.all_passed(), "{:#?}", failures(&report));
    }

    #[test]
    fn workspace_conforms() {
        let report = run_all(&workspace()).expect("run");
        assert!(report.all_passed(), "{:#?}", failures(&report));
        assert!(report.by_validator("generated/tables").count() >= 4);
    }
}
