//! Rust target: the `hiveot-vocab` epoch modules.
//!
//! Symbolic names keep their schema spelling, so the module allows
//! non-upper-case globals. The static tables reference the constants, which
//! ties every table value to the constant of the same name.

use hiveot_vocab_spec::Schema;

use crate::emit::{quote, SourceFile};
use crate::mapping::family_path;

/// Renders `vocab/src/epochs/<ns>.rs` for one epoch.
#[must_use]
pub fn render(schema: &Schema) -> String {
    let mut f = SourceFile::with_header("//!", "//", &schema.namespace, &schema.digest);
    f.blank();
    f.line("#![allow(missing_docs, non_upper_case_globals)]");
    f.blank();
    f.line("use crate::model::{ClassDescriptor, ClassEntry, ClassFamily, ClassTable, ConstantGroup, Term};");
    f.blank();
    f.line(&format!("pub const NAMESPACE: &str = {};", quote(&schema.namespace)));
    f.line(&format!("pub const SCHEMA_DIGEST: &str = {};", quote(&schema.digest)));

    for group in schema.constant_groups() {
        f.blank();
        f.group_header(
            &group.name,
            &group.version,
            &group.link,
            ("description", &group.description),
        );
        for (name, value) in &group.vocab {
            f.line(&format!("pub const {name}: &str = {};", quote(value)));
        }
        f.comment(&format!("end of {}", group.name));
    }

    for group in schema.class_groups() {
        f.blank();
        f.group_header(
            &group.name,
            &group.version,
            &group.link,
            ("namespace", &group.namespace),
        );
        for (name, class) in &group.vocab {
            f.line(&format!("pub const {name}: &str = {};", quote(&class.class_name)));
        }
        f.comment(&format!("end of {}", group.name));
    }

    f.blank();
    f.line("pub static CONSTANT_GROUPS: &[ConstantGroup] = &[");
    for group in schema.constant_groups() {
        f.line("    ConstantGroup {");
        f.line(&format!("        name: {},", quote(&group.name)));
        f.line(&format!("        version: {},", quote(&group.version)));
        f.line(&format!("        source: {},", quote(&group.link)));
        f.line(&format!("        description: {},", quote(&group.description)));
        f.line("        terms: &[");
        for (name, _) in &group.vocab {
            f.line(&format!("            Term {{ name: {}, value: {name} }},", quote(name)));
        }
        f.line("        ],");
        f.line("    },");
    }
    f.line("];");

    f.blank();
    f.line("pub static CLASS_TABLES: &[ClassTable] = &[");
    for group in schema.class_groups() {
        f.line("    ClassTable {");
        f.line(&format!("        family: {},", family_path(group.family)));
        f.line(&format!("        name: {},", quote(&group.name)));
        f.line(&format!("        version: {},", quote(&group.version)));
        f.line(&format!("        source: {},", quote(&group.link)));
        f.line(&format!("        namespace: {},", quote(&group.namespace)));
        f.line("        entries: &[");
        for (name, class) in &group.vocab {
            f.line("            ClassEntry {");
            f.line(&format!("                name: {},", quote(name)));
            f.line(&format!("                id: {name},"));
            f.line("                descriptor: ClassDescriptor {");
            f.line(&format!("                    symbol: {},", quote(&class.symbol)));
            f.line(&format!("                    title: {},", quote(&class.title)));
            f.line(&format!("                    description: {},", quote(&class.description)));
            f.line("                },");
            f.line("            },");
        }
        f.line("        ],");
        f.line("    },");
    }
    f.line("];");

    f.finish()
}
