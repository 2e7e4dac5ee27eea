//! Identifier format validator.
//!
//! Class identifiers are `<ns>:<kind>[:<segment>...]` with lowercase
//! segments; `<ns>` is the epoch and `<kind>` matches the class family.
//! Symbolic names must be valid identifiers in every target language.

use anyhow::Result;
use regex::Regex;

use hiveot_vocab_spec::Schema;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/identifiers";

/// Validates identifier and symbolic name formats.
///
/// # Errors
///
/// Returns an error if a format pattern fails to compile.
pub fn validate(schemas: &[Schema]) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let identifier = Regex::new(r"^[a-z]+(:[a-z0-9-]+)+$")?;
    let symbol = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$")?;

    for schema in schemas {
        let mut bad = Vec::new();
        for group in schema.class_groups() {
            for (name, class) in &group.vocab {
                let id = class.class_name.as_str();
                let mut segments = id.split(':');
                let ns = segments.next();
                let kind = segments.next();
                if !identifier.is_match(id) {
                    bad.push(format!("{name} = {id}: malformed"));
                } else if ns != Some(schema.namespace.as_str()) {
                    bad.push(format!("{name} = {id}: not in namespace `{}`", schema.namespace));
                } else if kind != Some(group.family.kind()) {
                    bad.push(format!("{name} = {id}: not a `{}` identifier", group.family.kind()));
                }
            }
        }

        let names = schema
            .constant_groups()
            .flat_map(|g| g.vocab.iter().map(|(n, _)| n))
            .chain(schema.class_groups().flat_map(|g| g.vocab.iter().map(|(n, _)| n)));
        for name in names {
            if !symbol.is_match(name) {
                bad.push(format!("{name}: not a valid symbolic name"));
            }
        }

        if bad.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("All {} identifiers are well-formed", schema.namespace),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{} malformed {} identifiers", bad.len(), schema.namespace),
                bad,
            ));
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::load_sources;

    #[test]
    fn wrong_kind_and_namespace_fail() {
        let yaml = r#"
UnitClasses:
  vocab:
    UnitWatt:
      class: "t:prop:watt"
    UnitVolt:
      class: "x:unit:volt"
    UnitAmp:
      class: "t:unit:Amp"
"#;
        let schema = load_sources("t", &[("t-unit-classes.yaml", yaml)]).expect("load");
        let report = validate(&[schema]).expect("validate");
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].details.len(), 3);
    }
}
