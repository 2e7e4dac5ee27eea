//! Generated source validator.
//!
//! Renders every epoch for every target and compares with the files in the
//! workspace. The Rust modules are compiled into `hiveot-vocab` and must be
//! current. The Go, JavaScript and Python outputs are optional, so a missing
//! one is only a warning; a stale one is a failure.

use std::path::Path;

use anyhow::Result;
use hiveot_vocab_codegen::{check, DriftKind, Target};
use hiveot_vocab_spec::Schema;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "generated/sources";

/// Validates the generated files under `workspace`.
///
/// # Errors
///
/// Returns an error if an existing generated file cannot be read.
pub fn validate(schemas: &[Schema], workspace: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for target in Target::ALL {
        let drifts = check(schemas, &[target], workspace)?;
        if drifts.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{target} sources are up to date"),
            ));
            continue;
        }

        let (missing, stale): (Vec<_>, Vec<_>) =
            drifts.iter().partition(|d| d.kind == DriftKind::Missing);
        if !stale.is_empty() || (target == Target::Rust && !missing.is_empty()) {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{target} sources are out of date; run vocab-gen --target {target}"),
                drifts.iter().map(ToString::to_string).collect(),
            ));
        } else {
            report.push(TestResult::warn_with_details(
                VALIDATOR,
                format!("{target} sources not generated"),
                missing.iter().map(ToString::to_string).collect(),
            ));
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use hiveot_vocab_codegen::generate;
    use hiveot_vocab_spec::epochs;

    #[test]
    fn missing_outputs_warn_except_rust() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schemas = vec![epochs::ht::schema().expect("load")];
        generate(&schemas, &[Target::Go], dir.path()).expect("generate");

        let report = validate(&schemas, dir.path()).expect("validate");
        let severities: Vec<_> = report.results.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            [
                Severity::Pass,
                Severity::Warning,
                Severity::Warning,
                Severity::Failure
            ]
        );
    }
}
