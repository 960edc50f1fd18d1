//! Constant table reconciliation
//!
//! The merge is an explicit ordered fold over immutable per-file tables so
//! resolution order stays auditable: files are visited in discovery order and
//! the first file to define a name wins.

use crate::extract::constants::ConstantExtractor;
use crate::output::schema::ReadSetRecord;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Merges per-file constant tables in discovery order, first-write-wins.
pub fn merge_constants(tables: &[BTreeMap<String, String>]) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    for table in tables {
        for (name, value) in table {
            merged
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    merged
}

/// The distinct field names referenced across every read-set record.
pub fn referenced_fields(records: &[ReadSetRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| record.read_set.iter().cloned())
        .collect()
}

/// Fallback pass for referenced names missing from the merged table.
///
/// Re-runs the constant extractor over every cached file body, in the same
/// order the files were discovered, inserting the first value found for each
/// missing name. Names still unresolved afterwards are left absent; that is
/// not an error.
pub fn resolve_missing<'a, I>(
    table: &mut BTreeMap<String, String>,
    needed: &BTreeSet<String>,
    contents: I,
) where
    I: IntoIterator<Item = &'a str>,
{
    let missing: Vec<&String> = needed
        .iter()
        .filter(|name| !table.contains_key(*name))
        .collect();
    if missing.is_empty() {
        return;
    }
    debug!(count = missing.len(), "resolving missing constants");

    let extractor = ConstantExtractor::new();
    for content in contents {
        for (name, value) in extractor.extract(content) {
            if needed.contains(&name) && !table.contains_key(&name) {
                table.insert(name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn record(fields: &[&str]) -> ReadSetRecord {
        ReadSetRecord {
            type_label: "test".to_string(),
            read_set: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_merge_first_file_wins() {
        let merged = merge_constants(&[
            table(&[("Shared", "first"), ("OnlyA", "a")]),
            table(&[("Shared", "second"), ("OnlyB", "b")]),
        ]);
        assert_eq!(merged["Shared"], "first");
        assert_eq!(merged["OnlyA"], "a");
        assert_eq!(merged["OnlyB"], "b");
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert!(merge_constants(&[]).is_empty());
    }

    #[test]
    fn test_referenced_fields_are_distinct() {
        let fields = referenced_fields(&[record(&["Foo", "Bar"]), record(&["Bar", "Baz"])]);
        assert_eq!(
            fields.into_iter().collect::<Vec<_>>(),
            vec!["Bar", "Baz", "Foo"]
        );
    }

    #[test]
    fn test_resolve_missing_fills_from_cached_content() {
        let mut merged = table(&[("Known", "known")]);
        let needed: BTreeSet<String> =
            ["Known", "Elsewhere"].iter().map(|s| s.to_string()).collect();
        let contents = [r#"const ( Elsewhere = "resolved" )"#];

        resolve_missing(&mut merged, &needed, contents.iter().copied());
        assert_eq!(merged["Elsewhere"], "resolved");
        assert_eq!(merged["Known"], "known");
    }

    #[test]
    fn test_resolve_missing_first_found_wins() {
        let mut merged = BTreeMap::new();
        let needed: BTreeSet<String> = ["Name"].iter().map(|s| s.to_string()).collect();
        let contents = [
            r#"const ( Name = "first" )"#,
            r#"const ( Name = "second" )"#,
        ];

        resolve_missing(&mut merged, &needed, contents.iter().copied());
        assert_eq!(merged["Name"], "first");
    }

    #[test]
    fn test_resolve_missing_never_overwrites_existing() {
        let mut merged = table(&[("Name", "original")]);
        let needed: BTreeSet<String> = ["Name"].iter().map(|s| s.to_string()).collect();
        let contents = [r#"const ( Name = "other" )"#];

        resolve_missing(&mut merged, &needed, contents.iter().copied());
        assert_eq!(merged["Name"], "original");
    }

    #[test]
    fn test_resolve_missing_ignores_unneeded_names() {
        let mut merged = BTreeMap::new();
        let needed: BTreeSet<String> = ["Wanted"].iter().map(|s| s.to_string()).collect();
        let contents = [r#"const ( Unwanted = "value" )"#];

        resolve_missing(&mut merged, &needed, contents.iter().copied());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_unresolvable_names_stay_absent() {
        let mut merged = BTreeMap::new();
        let needed: BTreeSet<String> = ["Ghost"].iter().map(|s| s.to_string()).collect();

        resolve_missing(&mut merged, &needed, std::iter::empty());
        assert!(!merged.contains_key("Ghost"));
    }
}
