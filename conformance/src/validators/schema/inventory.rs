//! Inventory validator.
//!
//! Verifies the per-family class counts of every epoch:
//! - `ht`: 25 action, 80 property, 109 thing, 31 unit
//! - `hiveot`: 23 action, 80 property, 96 thing, 31 unit

use hiveot_vocab_spec::{ClassFamily, Schema};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/inventory";

/// Expected `(namespace, [action, property, thing, unit])` counts.
const EXPECTED: [(&str, [usize; 4]); 2] = [("ht", [25, 80, 109, 31]), ("hiveot", [23, 80, 96, 31])];

/// Validates the class inventory of every loaded epoch.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (namespace, counts) in EXPECTED {
        let Some(schema) = schemas.iter().find(|s| s.namespace == namespace) else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("epoch `{namespace}` not loaded"),
            ));
            continue;
        };
        for (family, expected) in ClassFamily::ALL.into_iter().zip(counts) {
            let actual = schema.class_group(family).map_or(0, |g| g.vocab.len());
            check_count(&mut report, namespace, family, actual, expected);
        }
    }

    report
}

/// Checks a count matches the expected value.
fn check_count(
    report: &mut ConformanceReport,
    namespace: &str,
    family: ClassFamily,
    actual: usize,
    expected: usize,
) {
    let label = family.group_name();
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {namespace} {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {namespace} {label} count: expected {expected}, got {actual}"),
        ));
    }
}
