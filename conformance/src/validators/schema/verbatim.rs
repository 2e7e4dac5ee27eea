//! Verbatim spelling validator.
//!
//! Some upstream values are misspelled (`poer`, `unobserveroperty`) but are
//! load-bearing for existing consumers. They must stay byte-for-byte.

use hiveot_vocab_spec::Schema;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/verbatim";

/// `(namespace, symbolic name, exact value)`.
const SPELLINGS: [(&str, &str, &str); 4] = [
    ("ht", "PropElectricPower", "ht:prop:electric:poer"),
    ("ht", "WoTOpUnobserveProperty", "unobserveroperty"),
    ("hiveot", "PropElectricPower", "hiveot:prop:electric:poer"),
    ("hiveot", "OpUnobserveProperty", "unobserveroperty"),
];

/// Validates that the known upstream spellings are unchanged.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (namespace, name, expected) in SPELLINGS {
        let Some(schema) = schemas.iter().find(|s| s.namespace == namespace) else {
            continue;
        };
        match schema.find_symbol(name) {
            Some(value) if value == expected => report.push(TestResult::pass(
                VALIDATOR,
                format!("{namespace} {name} = {expected}"),
            )),
            Some(value) => report.push(TestResult::fail(
                VALIDATOR,
                format!("{namespace} {name} changed: expected `{expected}`, got `{value}`"),
            )),
            None => report.push(TestResult::fail(
                VALIDATOR,
                format!("{namespace} {name} is missing"),
            )),
        }
    }

    report
}
