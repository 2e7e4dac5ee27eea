//! Coverage validator.
//!
//! Every symbolic name with a family prefix (`Action`, `Prop`, `Thing`,
//! `Unit`) must resolve to a key of that family's table, and every table
//! key must be reachable through a symbolic name.

use std::collections::HashSet;

use hiveot_vocab_spec::{ClassFamily, Schema};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/coverage";

fn symbol_prefix(family: ClassFamily) -> &'static str {
    match family {
        ClassFamily::Action => "Action",
        ClassFamily::Property => "Prop",
        ClassFamily::Thing => "Thing",
        ClassFamily::Unit => "Unit",
    }
}

/// Validates the symbol to table mapping of every epoch.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for schema in schemas {
        let mut gaps = Vec::new();

        for family in ClassFamily::ALL {
            let keys: HashSet<&str> = schema
                .class_group(family)
                .map(|g| g.vocab.iter().map(|(_, c)| c.class_name.as_str()).collect())
                .unwrap_or_default();

            let prefix = symbol_prefix(family);
            let bindings = schema
                .constant_groups()
                .flat_map(|g| g.vocab.iter().map(|(n, v)| (n.as_str(), v.as_str())))
                .chain(schema.class_groups().flat_map(|g| {
                    g.vocab
                        .iter()
                        .map(|(n, c)| (n.as_str(), c.class_name.as_str()))
                }));
            let mut reached = HashSet::new();
            for (name, value) in bindings {
                if !name.starts_with(prefix) {
                    continue;
                }
                if keys.contains(value) {
                    reached.insert(value);
                } else {
                    gaps.push(format!("{name} = {value}: no {} entry", family.group_name()));
                }
            }
            gaps.extend(
                keys.difference(&reached)
                    .map(|key| format!("{key}: no `{prefix}*` symbol")),
            );
        }

        if gaps.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("Every {} class symbol maps into its table", schema.namespace),
            ));
        } else {
            gaps.sort();
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{} {} coverage gaps", gaps.len(), schema.namespace),
                gaps,
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::load_sources;

    #[test]
    fn misplaced_symbol_is_a_gap() {
        let yaml = r#"
ThingClasses:
  vocab:
    UnitOops:
      class: "t:thing:oops"
"#;
        let schema = load_sources("t", &[("t-thing-classes.yaml", yaml)]).expect("load");
        let report = validate(&[schema]);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].details.len(), 2);
    }
}
