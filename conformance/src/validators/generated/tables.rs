//! Compiled table validator.
//!
//! The `hiveot-vocab` crate is built from generated modules. This validator
//! checks that what was compiled equals the schema on disk: same digest,
//! same groups, same names, values and descriptors, in the same order.

use hiveot_vocab::{ClassFamily as VocabFamily, Epoch, Vocabulary};
use hiveot_vocab_spec::{ClassFamily, Schema};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "generated/tables";

fn vocab_family(family: ClassFamily) -> VocabFamily {
    match family {
        ClassFamily::Action => VocabFamily::Action,
        ClassFamily::Property => VocabFamily::Property,
        ClassFamily::Thing => VocabFamily::Thing,
        ClassFamily::Unit => VocabFamily::Unit,
    }
}

/// Validates the compiled tables of every epoch against its schema.
pub fn validate(schemas: &[Schema]) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for schema in schemas {
        let Ok(epoch) = schema.namespace.parse::<Epoch>() else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("`{}` has no compiled epoch", schema.namespace),
            ));
            continue;
        };
        let vocab = Vocabulary::get(epoch);

        if vocab.digest() == schema.digest {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{epoch} SCHEMA_DIGEST matches the schema"),
            ));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{epoch} SCHEMA_DIGEST {} does not match schema digest {}; regenerate with vocab-gen",
                    vocab.digest(),
                    schema.digest
                ),
            ));
        }

        let diffs = diff(schema, vocab);
        if diffs.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{epoch} compiled tables equal the schema"),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{epoch} compiled tables differ from the schema"),
                diffs,
            ));
        }
    }

    report
}

/// Lists every difference between a schema and a compiled vocabulary.
pub fn diff(schema: &Schema, vocab: &Vocabulary) -> Vec<String> {
    let mut out = Vec::new();

    let compiled = vocab.constant_groups();
    let groups: Vec<_> = schema.constant_groups().collect();
    if groups.len() != compiled.len() {
        out.push(format!(
            "constant groups: schema has {}, compiled has {}",
            groups.len(),
            compiled.len()
        ));
    }
    for (group, table) in groups.iter().zip(compiled) {
        if group.name != table.name
            || group.version != table.version
            || group.link != table.source
            || group.description != table.description
        {
            out.push(format!("{}: group header differs from {}", group.name, table.name));
        }
        let terms: Vec<(&str, &str)> = table.terms.iter().map(|t| (t.name, t.value)).collect();
        let expected: Vec<(&str, &str)> = group
            .vocab
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        if terms != expected {
            out.push(format!("{}: terms differ", group.name));
        }
    }

    let compiled = vocab.class_tables();
    let groups: Vec<_> = schema.class_groups().collect();
    if groups.len() != compiled.len() {
        out.push(format!(
            "class groups: schema has {}, compiled has {}",
            groups.len(),
            compiled.len()
        ));
    }
    for (group, table) in groups.iter().zip(compiled) {
        if group.name != table.name
            || vocab_family(group.family) != table.family
            || group.version != table.version
            || group.link != table.source
            || group.namespace != table.namespace
        {
            out.push(format!("{}: group header differs from {}", group.name, table.name));
        }
        if group.vocab.len() != table.entries.len() {
            out.push(format!(
                "{}: schema has {} entries, compiled has {}",
                group.name,
                group.vocab.len(),
                table.entries.len()
            ));
        }
        for ((name, class), entry) in group.vocab.iter().zip(table.entries) {
            let d = &entry.descriptor;
            if name != entry.name
                || class.class_name != entry.id
                || class.symbol != d.symbol
                || class.title != d.title
                || class.description != d.description
            {
                out.push(format!("{}: {name} differs from compiled {}", group.name, entry.name));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::load_sources;

    #[test]
    fn foreign_schema_differs_from_compiled_tables() {
        let yaml = "UnitClasses:\n  vocab:\n    UnitWatt:\n      class: \"ht:unit:watt\"\n";
        let schema = load_sources("ht", &[("ht-unit-classes.yaml", yaml)]).expect("load");
        let report = validate(&[schema]);
        assert_eq!(report.failure_count(), 2);
    }
}
