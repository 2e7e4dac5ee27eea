//! HiveOT vocabulary generator.
//!
//! Renders the vocabulary schema of each namespace epoch into source files
//! for Go, JavaScript, Python and the `hiveot-vocab` Rust crate. Output is a
//! pure function of the schema: constants and descriptor maps follow source
//! order and every file is stamped with the schema digest, so regenerating
//! from an unchanged schema is byte-identical.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod golang;
pub mod mapping;
pub mod rust;
pub mod script;

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hiveot_vocab_spec::Schema;
use tracing::{info, warn};

use mapping::output_path;

/// A target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Go package per epoch.
    Go,
    /// ES module.
    JavaScript,
    /// Python module.
    Python,
    /// `hiveot-vocab` epoch module.
    Rust,
}

impl Target {
    /// All targets.
    pub const ALL: [Target; 4] = [Target::Go, Target::JavaScript, Target::Python, Target::Rust];

    /// Short name as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Target::Go => "go",
            Target::JavaScript => "js",
            Target::Python => "python",
            Target::Rust => "rust",
        }
    }

    /// Parses a short name (`go`, `js`, `python`, `rust`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of plain constants across the generated epochs.
    pub constant_count: usize,
    /// Number of class entries across the generated epochs.
    pub class_count: usize,
    /// Files written, relative to the output root.
    pub files: Vec<PathBuf>,
}

/// How a generated file differs from a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftKind {
    /// The file does not exist.
    Missing,
    /// The file exists but its content differs.
    Stale,
}

/// A generated file that is out of date with the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    /// Epoch namespace.
    pub namespace: String,
    /// Target language.
    pub target: Target,
    /// Path relative to the output root.
    pub path: PathBuf,
    /// Kind of drift.
    pub kind: DriftKind,
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DriftKind::Missing => "missing",
            DriftKind::Stale => "stale",
        };
        write!(f, "{} ({} {}) is {what}", self.path.display(), self.namespace, self.target)
    }
}

/// Renders the source of one epoch for one target.
#[must_use]
pub fn render(schema: &Schema, target: Target) -> String {
    match target {
        Target::Go => golang::render(schema),
        Target::JavaScript => script::render(schema, &script::JAVASCRIPT),
        Target::Python => script::render(schema, &script::PYTHON),
        Target::Rust => rust::render(schema),
    }
}

/// Generates every `(epoch, target)` file under `out_root`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(schemas: &[Schema], targets: &[Target], out_root: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    for schema in schemas {
        report.constant_count += schema.constant_count();
        report.class_count += schema.class_count();

        for &target in targets {
            let rel = output_path(target, &schema.namespace);
            emit::write_file(&out_root.join(&rel), &render(schema, target))?;
            info!(
                namespace = %schema.namespace,
                target = %target,
                path = %rel.display(),
                "generated vocabulary"
            );
            report.files.push(rel);
        }
    }

    Ok(report)
}

/// Compares every `(epoch, target)` file under `out_root` with a fresh
/// render, without writing anything.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read.
pub fn check(schemas: &[Schema], targets: &[Target], out_root: &Path) -> Result<Vec<Drift>> {
    let mut drifts = Vec::new();

    for schema in schemas {
        for &target in targets {
            let rel = output_path(target, &schema.namespace);
            let path = out_root.join(&rel);
            let kind = match fs::read_to_string(&path) {
                Ok(on_disk) if on_disk == render(schema, target) => continue,
                Ok(_) => DriftKind::Stale,
                Err(e) if e.kind() == ErrorKind::NotFound => DriftKind::Missing,
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to read {}", path.display()))
                }
            };
            let drift = Drift {
                namespace: schema.namespace.clone(),
                target,
                path: rel,
                kind,
            };
            warn!(%drift, "generated vocabulary drift");
            drifts.push(drift);
        }
    }

    Ok(drifts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::epochs;

    fn schemas() -> Vec<Schema> {
        epochs::all().expect("embedded epochs load")
    }

    #[test]
    fn render_is_deterministic() {
        for schema in schemas() {
            for target in Target::ALL {
                assert_eq!(render(&schema, target), render(&schema, target), "{target}");
            }
        }
    }

    #[test]
    fn every_target_stamps_the_digest() {
        for schema in schemas() {
            for target in Target::ALL {
                let text = render(&schema, target);
                assert!(text.contains(emit::DO_NOT_EDIT), "{target}");
                assert!(
                    text.contains(&format!("schema digest: {}", schema.digest)),
                    "{target}"
                );
            }
        }
    }

    #[test]
    fn upstream_spellings_survive_every_target() {
        let hiveot = epochs::hiveot::schema().expect("load");
        for target in Target::ALL {
            let text = render(&hiveot, target);
            assert!(text.contains("\"hiveot:prop:electric:poer\""), "{target}");
            assert!(text.contains("\"unobserveroperty\""), "{target}");
            assert!(!text.contains("\"hiveot:prop:electric:power\""), "{target}");
        }
    }

    #[test]
    fn block_scalar_group_text_is_commented_in_every_target() {
        let yaml = "MessageTypes:\n  version: \"0.1\"\n  description: |\n    first line\n    const x = 1\n  vocab:\n    MessageTypeEvent: \"event\"\n";
        let schema =
            hiveot_vocab_spec::load_sources("t", &[("t-constants.yaml", yaml)]).expect("load");
        for target in Target::ALL {
            let text = render(&schema, target);
            assert!(
                !text.lines().any(|l| l.trim_start().starts_with("const x")),
                "{target}: block text leaked as code"
            );
            assert!(text.contains("description: first line const x = 1\n"), "{target}");
        }
    }

    #[test]
    fn descriptor_maps_follow_source_order() {
        let ht = epochs::ht::schema().expect("load");
        let js = render(&ht, Target::JavaScript);
        let units = ht
            .class_group(hiveot_vocab_spec::ClassFamily::Unit)
            .expect("units");
        let positions: Vec<usize> = units
            .vocab
            .iter()
            .map(|(_, c)| {
                js.find(&format!("  \"{}\": {{Symbol", c.class_name))
                    .expect("map entry")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn go_map_is_keyed_by_constant() {
        let hiveot = epochs::hiveot::schema().expect("load");
        let go = render(&hiveot, Target::Go);
        assert!(go.contains("package hiveot\n"));
        assert!(go.contains(
            "\tUnitWatt: {Symbol: \"W\", Title: \"Watt\", Description: \"SI unit of power."
        ));
    }

    #[test]
    fn rust_module_binds_tables_to_constants() {
        let ht = epochs::ht::schema().expect("load");
        let rs = render(&ht, Target::Rust);
        assert!(rs.starts_with("//! Package vocab"));
        assert!(rs.contains("pub const ActionSwitchOn: &str = \"ht:action:switch:on\";"));
        assert!(rs.contains("                id: ActionSwitchOn,\n"));
        assert!(rs.contains("        family: ClassFamily::Unit,\n"));
        assert!(rs.contains(&format!("pub const SCHEMA_DIGEST: &str = \"{}\";", ht.digest)));
    }

    #[test]
    fn generate_then_check_reports_no_drift() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schemas = schemas();
        let report = generate(&schemas, &Target::ALL, dir.path()).expect("generate");
        assert_eq!(report.files.len(), 8);
        assert_eq!(report.class_count, 245 + 230);
        assert!(check(&schemas, &Target::ALL, dir.path()).expect("check").is_empty());
    }

    #[test]
    fn check_reports_missing_and_stale_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ht = vec![epochs::ht::schema().expect("load")];
        generate(&ht, &[Target::Python], dir.path()).expect("generate");
        let py = dir.path().join(output_path(Target::Python, "ht"));
        fs::write(&py, "# edited by hand\n").expect("overwrite");

        let drifts = check(&ht, &[Target::Python, Target::Go], dir.path()).expect("check");
        let kinds: Vec<_> = drifts.iter().map(|d| (d.target, d.kind)).collect();
        assert_eq!(
            kinds,
            [(Target::Python, DriftKind::Stale), (Target::Go, DriftKind::Missing)]
        );
    }

    #[test]
    fn target_names_round_trip() {
        for target in Target::ALL {
            assert_eq!(Target::from_name(target.name()), Some(target));
        }
        assert_eq!(Target::from_name("cobol"), None);
    }
}
