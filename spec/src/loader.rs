//! Schema loader.
//!
//! Reads the YAML sources of one namespace epoch. Files ending in
//! `classes.yaml` hold class groups, every other `.yaml` file holds constant
//! groups, and anything else is skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::digest::schema_digest;
use crate::error::SchemaError;
use crate::model::{
    ClassFamily, ClassGroup, ConstantGroup, FileGroups, RawClassGroup, RawConstantGroup, Schema,
    SchemaFile,
};
use crate::ordered::OrderedMap;

/// How a source file is interpreted, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `*classes.yaml`: class groups with descriptors.
    Classes,
    /// Any other `*.yaml`: plain constant groups.
    Constants,
    /// Not a YAML file.
    Ignored,
}

/// Classifies a source file by name.
#[must_use]
pub fn source_kind(file_name: &str) -> SourceKind {
    if file_name.ends_with("classes.yaml") {
        SourceKind::Classes
    } else if file_name.ends_with(".yaml") {
        SourceKind::Constants
    } else {
        SourceKind::Ignored
    }
}

/// Loads every source file directly under `dir` as the epoch `namespace`.
///
/// # Errors
///
/// Returns [`SchemaError`] if the directory cannot be listed, a file cannot be
/// read or parsed, or the sources collide (duplicate group, symbol or class
/// identifier).
pub fn load_dir(namespace: &str, dir: &Path) -> Result<Schema, SchemaError> {
    let mut sources: Vec<(String, String)> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if source_kind(&file_name) == SourceKind::Ignored {
            warn!(file = %path.display(), "ignored non-yaml file");
            continue;
        }
        let contents = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        sources.push((file_name, contents));
    }

    let borrowed: Vec<(&str, &str)> = sources
        .iter()
        .map(|(name, contents)| (name.as_str(), contents.as_str()))
        .collect();
    load_sources(namespace, &borrowed)
}

/// Loads an epoch from in-memory `(file_name, contents)` sources.
///
/// # Errors
///
/// Returns [`SchemaError`] if a source cannot be parsed, a symbolic name is
/// malformed or reserved, or the sources collide (duplicate group, symbol or
/// class identifier).
pub fn load_sources(namespace: &str, sources: &[(&str, &str)]) -> Result<Schema, SchemaError> {
    let mut ordered: Vec<&(&str, &str)> = sources.iter().collect();
    ordered.sort_by(|a, b| a.0.cmp(b.0));

    let mut files = Vec::with_capacity(ordered.len());
    let mut hashed = Vec::with_capacity(ordered.len());
    for &&(file_name, contents) in &ordered {
        let groups = match source_kind(file_name) {
            SourceKind::Classes => {
                debug!(namespace, file = file_name, "reading vocab classes");
                FileGroups::Classes(parse_class_file(file_name, contents)?)
            }
            SourceKind::Constants => {
                debug!(namespace, file = file_name, "reading vocab constants");
                FileGroups::Constants(parse_constant_file(file_name, contents)?)
            }
            SourceKind::Ignored => {
                warn!(namespace, file = file_name, "ignored non-yaml source");
                continue;
            }
        };
        hashed.push((file_name, contents));
        files.push(SchemaFile {
            file_name: file_name.to_string(),
            groups,
        });
    }

    let schema = Schema {
        namespace: namespace.to_string(),
        files,
        digest: schema_digest(&hashed),
    };
    check_symbols(&schema)?;
    check_collisions(&schema)?;

    info!(
        namespace,
        constants = schema.constant_count(),
        classes = schema.class_count(),
        digest = %schema.digest,
        "loaded vocabulary schema"
    );
    Ok(schema)
}

fn parse_class_file(file_name: &str, contents: &str) -> Result<Vec<ClassGroup>, SchemaError> {
    let raw: OrderedMap<RawClassGroup> =
        serde_yaml::from_str(contents).map_err(|source| SchemaError::Parse {
            file: file_name.to_string(),
            source,
        })?;

    raw.into_entries()
        .into_iter()
        .map(|(name, group)| {
            let family =
                ClassFamily::from_group_name(&name).ok_or_else(|| SchemaError::UnknownClassGroup {
                    file: file_name.to_string(),
                    group: name.clone(),
                })?;
            Ok(ClassGroup {
                name,
                family,
                version: group.version,
                link: group.link,
                namespace: group.namespace,
                description: group.description,
                vocab: group.vocab.into_entries(),
            })
        })
        .collect()
}

fn parse_constant_file(
    file_name: &str,
    contents: &str,
) -> Result<Vec<ConstantGroup>, SchemaError> {
    let raw: OrderedMap<RawConstantGroup> =
        serde_yaml::from_str(contents).map_err(|source| SchemaError::Parse {
            file: file_name.to_string(),
            source,
        })?;

    Ok(raw
        .into_entries()
        .into_iter()
        .map(|(name, group)| ConstantGroup {
            name,
            version: group.version,
            link: group.link,
            description: group.description,
            vocab: group.vocab.into_entries(),
        })
        .collect())
}

/// Names the generated Rust module declares next to the vocabulary.
pub const RESERVED_NAMES: [&str; 4] =
    ["NAMESPACE", "SCHEMA_DIGEST", "CONSTANT_GROUPS", "CLASS_TABLES"];

/// `[A-Za-z][A-Za-z0-9_]*`: a plain identifier in every target language.
fn is_symbolic_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rejects symbolic names that would not compile, or would shadow a
/// generated item, in some target.
fn check_symbols(schema: &Schema) -> Result<(), SchemaError> {
    let bindings = schema
        .constant_groups()
        .flat_map(|g| g.vocab.iter().map(move |(n, _)| (n, &g.name)))
        .chain(
            schema
                .class_groups()
                .flat_map(|g| g.vocab.iter().map(move |(n, _)| (n, &g.name))),
        );
    for (name, group) in bindings {
        if !is_symbolic_name(name) {
            return Err(SchemaError::InvalidSymbol {
                name: name.clone(),
                group: group.clone(),
            });
        }
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(SchemaError::ReservedSymbol {
                name: name.clone(),
                group: group.clone(),
            });
        }
    }
    Ok(())
}

/// Rejects group, symbol and identifier collisions across the whole epoch.
fn check_collisions(schema: &Schema) -> Result<(), SchemaError> {
    let mut groups: HashMap<&str, &str> = HashMap::new();
    for file in &schema.files {
        let names = file
            .constant_groups()
            .iter()
            .map(|g| g.name.as_str())
            .chain(file.class_groups().iter().map(|g| g.name.as_str()));
        for name in names {
            if let Some(first) = groups.insert(name, file.file_name.as_str()) {
                return Err(SchemaError::DuplicateGroup {
                    group: name.to_string(),
                    first: first.to_string(),
                    second: file.file_name.clone(),
                });
            }
        }
    }

    let mut symbols: HashMap<&str, &str> = HashMap::new();
    let bindings = schema
        .constant_groups()
        .flat_map(|g| g.vocab.iter().map(move |(n, _)| (n.as_str(), g.name.as_str())))
        .chain(
            schema
                .class_groups()
                .flat_map(|g| g.vocab.iter().map(move |(n, _)| (n.as_str(), g.name.as_str()))),
        );
    for (name, group) in bindings {
        if let Some(first) = symbols.insert(name, group) {
            return Err(SchemaError::DuplicateSymbol {
                name: name.to_string(),
                first: first.to_string(),
                second: group.to_string(),
            });
        }
    }

    let mut identifiers: HashMap<&str, &str> = HashMap::new();
    for (name, class) in schema.class_groups().flat_map(|g| g.vocab.iter()) {
        if let Some(first) = identifiers.insert(class.class_name.as_str(), name.as_str()) {
            return Err(SchemaError::DuplicateIdentifier {
                identifier: class.class_name.clone(),
                first: first.to_string(),
                second: name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: &str = r#"
UnitClasses:
  version: "0.1"
  link: "test"
  namespace: "t"
  vocab:
    UnitWatt:
      class: "t:unit:watt"
      title: "Watt"
      symbol: "W"
    UnitAmpere:
      class: "t:unit:ampere"
      title: "Ampere"
"#;

    const CONSTANTS: &str = r#"
MessageTypes:
  version: "0.1"
  vocab:
    MessageTypeEvent: "event"
"#;

    #[test]
    fn classifies_files_by_name() {
        assert_eq!(source_kind("ht-unit-classes.yaml"), SourceKind::Classes);
        assert_eq!(source_kind("wot-vocab.yaml"), SourceKind::Constants);
        assert_eq!(source_kind("README.md"), SourceKind::Ignored);
    }

    #[test]
    fn loads_classes_and_constants_in_source_order() {
        let schema = load_sources(
            "t",
            &[("t-unit-classes.yaml", UNITS), ("t-constants.yaml", CONSTANTS)],
        )
        .expect("load");
        assert_eq!(schema.files[0].file_name, "t-constants.yaml");
        let units = schema.class_group(ClassFamily::Unit).expect("units");
        let names: Vec<_> = units.vocab.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["UnitWatt", "UnitAmpere"]);
        assert_eq!(units.vocab[0].1.symbol, "W");
        assert_eq!(units.vocab[1].1.description, "");
        assert_eq!(schema.find_symbol("MessageTypeEvent"), Some("event"));
        assert_eq!(schema.find_symbol("UnitAmpere"), Some("t:unit:ampere"));
    }

    #[test]
    fn duplicate_group_across_files_is_fatal() {
        let err = load_sources(
            "t",
            &[("a-constants.yaml", CONSTANTS), ("b-constants.yaml", CONSTANTS)],
        )
        .expect_err("duplicate group");
        assert!(matches!(err, SchemaError::DuplicateGroup { .. }), "{err}");
    }

    #[test]
    fn duplicate_identifier_is_fatal() {
        let yaml = r#"
ActionClasses:
  vocab:
    ActionA:
      class: "t:action:a"
      title: "A"
    ActionB:
      class: "t:action:a"
      title: "B"
"#;
        let err = load_sources("t", &[("t-action-classes.yaml", yaml)]).expect_err("dup id");
        assert!(matches!(err, SchemaError::DuplicateIdentifier { .. }), "{err}");
    }

    #[test]
    fn duplicate_symbol_across_groups_is_fatal() {
        let other = r#"
OtherTypes:
  vocab:
    MessageTypeEvent: "evt"
"#;
        let err = load_sources(
            "t",
            &[("a-constants.yaml", CONSTANTS), ("b-constants.yaml", other)],
        )
        .expect_err("dup symbol");
        assert!(matches!(err, SchemaError::DuplicateSymbol { .. }), "{err}");
    }

    #[test]
    fn malformed_symbolic_names_are_rejected() {
        for name in ["Foo-Bar", "1Unit", "_Hidden", "Unit Watt"] {
            let yaml = format!("MessageTypes:\n  vocab:\n    \"{name}\": \"event\"\n");
            let err = load_sources("t", &[("t-constants.yaml", yaml.as_str())])
                .expect_err("malformed name");
            assert!(
                matches!(&err, SchemaError::InvalidSymbol { name: n, .. } if n == name),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn generated_item_names_are_reserved() {
        for name in RESERVED_NAMES {
            let yaml = format!("MessageTypes:\n  vocab:\n    {name}: \"event\"\n");
            let err = load_sources("t", &[("t-constants.yaml", yaml.as_str())])
                .expect_err("reserved name");
            assert!(
                matches!(&err, SchemaError::ReservedSymbol { name: n, .. } if n == name),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn reserved_class_symbol_is_rejected() {
        let yaml = r#"
UnitClasses:
  vocab:
    CLASS_TABLES:
      class: "t:unit:table"
      title: "Table"
"#;
        let err = load_sources("t", &[("t-unit-classes.yaml", yaml)]).expect_err("reserved");
        assert!(matches!(err, SchemaError::ReservedSymbol { .. }), "{err}");
    }

    #[test]
    fn symbolic_names_allow_digits_and_underscores() {
        assert!(is_symbolic_name("WoTOpUnobserveProperty"));
        assert!(is_symbolic_name("Unit_kWh2"));
        assert!(!is_symbolic_name(""));
    }

    #[test]
    fn unknown_class_group_is_fatal() {
        let yaml = "EventClasses:\n  vocab: {}\n";
        let err = load_sources("t", &[("t-event-classes.yaml", yaml)]).expect_err("unknown");
        assert!(matches!(err, SchemaError::UnknownClassGroup { .. }), "{err}");
    }

    #[test]
    fn load_dir_skips_non_yaml_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("t-unit-classes.yaml"), UNITS).expect("write");
        fs::write(dir.path().join("NOTES.txt"), "not a schema").expect("write");

        let schema = load_dir("t", dir.path()).expect("load");
        assert_eq!(schema.files.len(), 1);
        assert_eq!(schema.class_count(), 2);
        assert_eq!(schema.digest, schema_digest(&[("t-unit-classes.yaml", UNITS)]));
    }

    #[test]
    fn load_dir_fails_on_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        assert!(load_dir("t", &missing).is_err());
    }
}
