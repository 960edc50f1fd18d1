//! Read-set literal extraction
//!
//! Finds `var readSet = []common.HString{ ... }` literals and splits them
//! into ordered field references. The capture stops at the first `}`, so
//! nested braces inside the literal are not supported.

use crate::output::schema::ReadSetRecord;
use regex::Regex;
use std::path::Path;

/// Qualifier stripped from field references (`document.Foo` -> `Foo`).
const VALUE_QUALIFIER: &str = "document.";

pub struct ReadSetExtractor {
    literal: Regex,
    activity_name: Regex,
}

impl Default for ReadSetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadSetExtractor {
    pub fn new() -> Self {
        Self {
            literal: Regex::new(r#"var\s+readSet\s*=\s*\[\]common\.HString\s*\{\s*([^}]+)\s*\}"#)
                .expect("hard-coded pattern"),
            activity_name: Regex::new(
                r#"(?s)const\s+\(\s*[^)]*?processAndActivityName\s*=\s*"([^"]+)"[^)]*?\)"#,
            )
            .expect("hard-coded pattern"),
        }
    }

    /// Emits one record per read-set literal found in `content`, in source
    /// order. Files with no literal contribute nothing.
    pub fn extract(&self, content: &str, file_path: &Path) -> Vec<ReadSetRecord> {
        let mut records = Vec::new();

        for captures in self.literal.captures_iter(content) {
            records.push(ReadSetRecord {
                type_label: self.type_label(content, file_path),
                read_set: split_fields(&captures[1]),
            });
        }

        records
    }

    /// Default label is the immediate parent directory name. Files whose path
    /// mentions `scoring` or `operation` use the `processAndActivityName`
    /// constant declared in the same file, when present.
    fn type_label(&self, content: &str, file_path: &Path) -> String {
        let from_directory = file_path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let path_text = file_path.to_string_lossy();
        if path_text.contains("scoring") || path_text.contains("operation") {
            if let Some(captures) = self.activity_name.captures(content) {
                return captures[1].trim().to_string();
            }
        }

        from_directory
    }
}

/// Splits a captured literal body into field names: whole-line comments are
/// blanked first (line structure preserved so commas split correctly), then
/// the text is comma-split, trimmed, stripped of inline comments and the
/// `document.` qualifier, and emptied tokens are dropped.
fn split_fields(body: &str) -> Vec<String> {
    let cleaned = body
        .lines()
        .map(|line| if line.trim().starts_with("//") { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n");

    cleaned
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let token = match token.find("//") {
                Some(index) => token[..index].trim(),
                None => token,
            };
            token.strip_prefix(VALUE_QUALIFIER).unwrap_or(token)
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
