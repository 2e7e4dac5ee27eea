//! Descriptor table validator.
//!
//! Keys must be unique within each family table. Every descriptor should
//! have a title; untitled entries are reported as a warning, since the
//! upstream electric meter thing class has none.

use std::collections::HashSet;

use hiveot_vocab_spec::Schema;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/descriptors";

/// Validates key uniqueness and title completeness.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for schema in schemas {
        for group in schema.class_groups() {
            let mut seen = HashSet::new();
            let duplicates: Vec<String> = group
                .vocab
                .iter()
                .filter(|(_, c)| !seen.insert(c.class_name.as_str()))
                .map(|(_, c)| c.class_name.clone())
                .collect();
            if duplicates.is_empty() {
                report.push(TestResult::pass(
                    VALIDATOR,
                    format!(
                        "{} {}: {} unique keys",
                        schema.namespace,
                        group.name,
                        group.vocab.len()
                    ),
                ));
            } else {
                report.push(TestResult::fail_with_details(
                    VALIDATOR,
                    format!("{} {}: duplicate keys", schema.namespace, group.name),
                    duplicates,
                ));
            }

            let untitled: Vec<String> = group
                .vocab
                .iter()
                .filter(|(_, c)| c.title.trim().is_empty())
                .map(|(name, c)| format!("{name} = {}", c.class_name))
                .collect();
            if !untitled.is_empty() {
                report.push(TestResult::warn_with_details(
                    VALIDATOR,
                    format!(
                        "{} {}: {} descriptors without a title",
                        schema.namespace,
                        group.name,
                        untitled.len()
                    ),
                    untitled,
                ));
            }
        }
    }

    report
}
