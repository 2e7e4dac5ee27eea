//! Namespace isolation validator.
//!
//! No class identifier and no identifier-valued constant of one epoch may
//! appear in another epoch.

use std::collections::HashSet;

use hiveot_vocab_spec::Schema;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/isolation";

/// Validates that epochs share no identifiers.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (i, a) in schemas.iter().enumerate() {
        for b in &schemas[i + 1..] {
            let ids: HashSet<&str> = identifiers(a).collect();
            let mut shared: Vec<String> = identifiers(b)
                .filter(|id| ids.contains(id))
                .map(str::to_string)
                .collect();
            // Identifiers carrying the other epoch's prefix leak too.
            let foreign_b = format!("{}:", b.namespace);
            let foreign_a = format!("{}:", a.namespace);
            shared.extend(
                identifiers(a)
                    .filter(|id| id.starts_with(&foreign_b))
                    .chain(identifiers(b).filter(|id| id.starts_with(&foreign_a)))
                    .map(str::to_string),
            );

            if shared.is_empty() {
                report.push(TestResult::pass(
                    VALIDATOR,
                    format!("`{}` and `{}` share no identifiers", a.namespace, b.namespace),
                ));
            } else {
                report.push(TestResult::fail_with_details(
                    VALIDATOR,
                    format!(
                        "{} identifiers cross `{}` and `{}`",
                        shared.len(),
                        a.namespace,
                        b.namespace
                    ),
                    shared,
                ));
            }
        }
    }

    report
}

fn identifiers(schema: &Schema) -> impl Iterator<Item = &str> {
    schema
        .class_groups()
        .flat_map(|g| g.vocab.iter().map(|(_, c)| c.class_name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::load_sources;

    fn units(ns: &str, id: &str) -> Schema {
        let yaml = format!("UnitClasses:\n  vocab:\n    UnitWatt:\n      class: \"{id}\"\n");
        load_sources(ns, &[("u-unit-classes.yaml", yaml.as_str())]).expect("load")
    }

    #[test]
    fn leaked_identifier_fails() {
        let report = validate(&[units("a", "a:unit:watt"), units("b", "a:unit:watt")]);
        assert!(!report.all_passed());
    }

    #[test]
    fn distinct_prefixes_pass() {
        let report = validate(&[units("a", "a:unit:watt"), units("b", "b:unit:watt")]);
        assert!(report.all_passed());
    }
}
