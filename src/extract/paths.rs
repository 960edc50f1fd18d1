//! Source file discovery
//!
//! Walks the target repository and collects the deduplicated union of files
//! matching the four fixed process patterns. Discovery order is the sorted
//! walk order, which keeps downstream first-found-wins resolution stable for
//! a given filesystem state.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Relative glob patterns the scan covers.
pub const SOURCE_PATTERNS: [&str; 4] = [
    "internal/process/tasking/**/*.go",
    "internal/process/document/**/*.go",
    "internal/process/operation/**/impl.go",
    "internal/process/scoring/**/impl.go",
];

/// Directory prefixes recorded in the artifact's `searchPaths`.
pub const SEARCH_PATHS: [&str; 4] = [
    "internal/process/tasking/",
    "internal/process/document/",
    "internal/process/operation/",
    "internal/process/scoring/",
];

fn pattern_set() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in SOURCE_PATTERNS {
        builder.add(Glob::new(pattern).expect("hard-coded pattern"));
    }
    builder.build().expect("hard-coded pattern set")
}

/// Returns every file under `root` matching any of [`SOURCE_PATTERNS`],
/// deduplicated, in sorted walk order.
///
/// A missing or non-directory root yields an empty list; callers decide
/// whether that is worth reporting.
pub fn find_source_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "scan root is not a directory");
        return Vec::new();
    }

    let patterns = pattern_set();
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        if patterns.is_match(relative) && seen.insert(entry.path().to_path_buf()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files
}

/// True when the root contains at least one file the scan would pick up.
pub fn has_source_files(root: &Path) -> bool {
    !find_source_files(root).is_empty()
}
