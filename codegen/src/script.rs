//! Script targets: JavaScript and Python share one layout and differ only in
//! a few syntax strings.

use hiveot_vocab_spec::Schema;

use crate::emit::{quote, SourceFile};
use crate::mapping::descriptor_map_name;

/// Syntax of one script target.
pub struct Dialect {
    /// Line comment marker.
    pub comment: &'static str,
    /// Prefix of every top-level binding.
    pub declare: &'static str,
    /// Statement terminator.
    pub terminator: &'static str,
    /// Indentation of descriptor map entries.
    pub indent: &'static str,
    /// Descriptor field keys, written as is.
    pub keys: [&'static str; 3],
}

/// ES module exports.
pub const JAVASCRIPT: Dialect = Dialect {
    comment: "//",
    declare: "export const ",
    terminator: ";",
    indent: "  ",
    keys: ["Symbol", "Title", "Description"],
};

/// Module-level constants and dicts.
pub const PYTHON: Dialect = Dialect {
    comment: "#",
    declare: "",
    terminator: "",
    indent: "    ",
    keys: ["\"Symbol\"", "\"Title\"", "\"Description\""],
};

/// Renders the module of one epoch in `dialect`.
#[must_use]
pub fn render(schema: &Schema, dialect: &Dialect) -> String {
    let Dialect {
        declare,
        terminator: end,
        ..
    } = dialect;
    let mut f = SourceFile::new(dialect.comment, &schema.namespace, &schema.digest);

    for group in schema.constant_groups() {
        f.blank();
        f.group_header(
            &group.name,
            &group.version,
            &group.link,
            ("description", &group.description),
        );
        for (name, value) in &group.vocab {
            f.line(&format!("{declare}{name} = {}{end}", quote(value)));
        }
        f.comment(&format!("end of {}", group.name));
    }

    let [symbol, title, description] = dialect.keys;
    for group in schema.class_groups() {
        f.blank();
        f.group_header(
            &group.name,
            &group.version,
            &group.link,
            ("namespace", &group.namespace),
        );
        for (name, class) in &group.vocab {
            f.line(&format!("{declare}{name} = {}{end}", quote(&class.class_name)));
        }
        f.comment(&format!("end of {}", group.name));

        let map = descriptor_map_name(&group.name);
        f.blank();
        f.comment(&format!("{map} maps @type to symbol, title and description"));
        f.line(&format!("{declare}{map} = {{"));
        for (_, class) in &group.vocab {
            f.line(&format!(
                "{}{}: {{{symbol}: {}, {title}: {}, {description}: {}}},",
                dialect.indent,
                quote(&class.class_name),
                quote(&class.symbol),
                quote(&class.title),
                quote(&class.description)
            ));
        }
        f.line(&format!("}}{end}"));
    }

    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiveot_vocab_spec::epochs;

    #[test]
    fn javascript_exports_constants_and_maps() {
        let ht = epochs::ht::schema().expect("load");
        let js = render(&ht, &JAVASCRIPT);
        assert!(js.starts_with("// Package vocab"));
        assert!(js.contains("export const UnitWatt = \"ht:unit:watt\";\n"));
        assert!(js.contains("export const UnitClassesMap = {\n"));
        assert!(js.contains("  \"ht:unit:watt\": {Symbol: \"W\", Title: "));
        assert!(js.contains("\n};\n"));
    }

    #[test]
    fn python_binds_module_constants_and_dicts() {
        let hiveot = epochs::hiveot::schema().expect("load");
        let py = render(&hiveot, &PYTHON);
        assert!(py.starts_with("# Package vocab"));
        assert!(py.contains("\nUnitWatt = \"hiveot:unit:watt\"\n"));
        assert!(py.contains("\nUnitClassesMap = {\n"));
        assert!(py.contains("    \"hiveot:unit:watt\": {\"Symbol\": \"W\", \"Title\": "));
        assert!(!py.contains("export const"));
    }
}
