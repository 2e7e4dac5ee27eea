//! Source file builder shared by all targets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// First header line of every generated file.
pub const PACKAGE_LINE: &str =
    "Package vocab with HiveOT vocabulary names for TD Things, properties, events and actions";

/// Second header line of every generated file.
pub const DO_NOT_EDIT: &str = "DO NOT EDIT. This file is generated and changes will be overwritten";

/// Line-oriented text buffer with a language-specific comment marker.
pub struct SourceFile {
    /// The accumulated source text.
    pub buf: String,
    comment: &'static str,
}

impl SourceFile {
    /// Starts a file with the standard header written as `comment` lines.
    #[must_use]
    pub fn new(comment: &'static str, namespace: &str, digest: &str) -> Self {
        Self::with_header(comment, comment, namespace, digest)
    }

    /// Like [`SourceFile::new`], but writes the header with its own marker,
    /// e.g. `//!` for a Rust module doc.
    #[must_use]
    pub fn with_header(
        header: &'static str,
        comment: &'static str,
        namespace: &str,
        digest: &str,
    ) -> Self {
        let mut f = Self {
            buf: String::new(),
            comment: header,
        };
        f.comment(PACKAGE_LINE);
        f.comment(DO_NOT_EDIT);
        f.comment(&format!("namespace: {namespace}"));
        f.comment(&format!("schema digest: {digest}"));
        f.comment = comment;
        f
    }

    /// Appends one line. Trailing whitespace is dropped.
    pub fn line(&mut self, line: &str) {
        self.buf.push_str(line.trim_end());
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a comment line. Line breaks in `text` are folded into spaces
    /// so schema text can never escape the comment.
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("{} {}", self.comment, normalize_comment(text)));
    }

    /// Appends the `type/version/source` block that opens every group, plus
    /// one trailing `label: value` line (namespace for classes, description
    /// for constants).
    pub fn group_header(&mut self, name: &str, version: &str, source: &str, extra: (&str, &str)) {
        self.comment(&format!("type: {name}"));
        self.comment(&format!("version: {version}"));
        self.comment(&format!("source: {source}"));
        self.comment(&format!("{}: {}", extra.0, extra.1));
    }

    /// Returns the finished source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Collapses every run of whitespace, line breaks included, into one space.
#[must_use]
pub fn normalize_comment(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Double-quotes `s` as a string literal.
///
/// The escapes used (`\\`, `\"`, `\n`, `\r`, `\t` and `\xNN` for other ASCII
/// control characters) mean the same in Go, JavaScript, Python and Rust.
/// Everything else, including non-ASCII text such as `°C`, is kept as is.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_delimiters_and_controls() {
        assert_eq!(quote(r#"say "hi"\n"#), r#""say \"hi\"\\n""#);
        assert_eq!(quote("a\tb\nc"), r#""a\tb\nc""#);
        assert_eq!(quote("bell\u{7}"), r#""bell\x07""#);
        assert_eq!(quote("°C"), "\"°C\"");
    }

    #[test]
    fn header_carries_digest_and_trims_empty_values() {
        let mut f = SourceFile::new("#", "ht", "abc123");
        f.group_header("MessageTypes", "", "src", ("description", ""));
        let text = f.finish();
        assert!(text.starts_with("# Package vocab"));
        assert!(text.contains("# DO NOT EDIT."));
        assert!(text.contains("# schema digest: abc123\n"));
        assert!(text.contains("# version:\n"));
        assert!(text.contains("# description:\n"));
    }

    #[test]
    fn multiline_group_text_stays_commented() {
        let mut f = SourceFile::new("//", "t", "d");
        f.group_header(
            "MessageTypes",
            "0.1\nconst v = 2",
            "src\r\nimport os",
            ("description", "first line\n const x = 1\n"),
        );
        let text = f.finish();
        for line in text.lines() {
            assert!(line.starts_with("// "), "uncommented line: {line:?}");
        }
        assert!(text.contains("// description: first line const x = 1\n"));
        assert!(text.contains("// version: 0.1 const v = 2\n"));
        assert!(text.contains("// source: src import os\n"));
    }

    #[test]
    fn normalize_comment_folds_whitespace() {
        assert_eq!(normalize_comment("  a\n\tb  c\u{2028}d "), "a b c d");
        assert_eq!(normalize_comment(""), "");
    }

    #[test]
    fn header_marker_is_separate_from_body_comments() {
        let mut f = SourceFile::with_header("//!", "//", "hiveot", "d");
        f.comment("end of UnitClasses");
        let text = f.finish();
        assert!(text.starts_with("//! Package vocab"));
        assert!(text.ends_with("\n// end of UnitClasses\n"));
    }
}
