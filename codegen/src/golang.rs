//! Go target.
//!
//! One `const (...)` block per group and a `<Group>Map` per class group,
//! keyed by the Go constant so the compiler checks every key.

use hiveot_vocab_spec::Schema;

use crate::emit::{quote, SourceFile};
use crate::mapping::descriptor_map_name;

/// Renders the Go source of one epoch.
#[must_use]
pub fn render(schema: &Schema) -> String {
    let mut f = SourceFile::new("//", &schema.namespace, &schema.digest);
    f.line(&format!("package {}", schema.namespace));

    for group in schema.constant_groups() {
        f.blank();
        f.group_header(
            &group.name,
            &group.version,
            &group.link,
            ("description", &group.description),
        );
        f.line("const (");
        for (name, value) in &group.vocab {
            f.line(&format!("\t{name} = {}", quote(value)));
        }
        f.line(")");
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
        f.line("const (");
        for (name, class) in &group.vocab {
            f.line(&format!("\t{name} = {}", quote(&class.class_name)));
        }
        f.line(")");
        f.comment(&format!("end of {}", group.name));

        let map = descriptor_map_name(&group.name);
        f.blank();
        f.comment(&format!("{map} maps @type to symbol, title and description"));
        f.line(&format!("var {map} = map[string]struct {{"));
        f.line("\tSymbol      string");
        f.line("\tTitle       string");
        f.line("\tDescription string");
        f.line("}{");
        for (name, class) in &group.vocab {
            f.line(&format!(
                "\t{name}: {{Symbol: {}, Title: {}, Description: {}}},",
                quote(&class.symbol),
                quote(&class.title),
                quote(&class.description)
            ));
        }
        f.line("}");
    }

    f.finish()
}
