//! Extraction artifact schema
//!
//! Defines the JSON document written at the end of a sync run. Downstream
//! dashboards consume the artifact by key name, so the camelCase renames here
//! are part of the wire format: `system`, `extractedAt`, `gitInfo`,
//! `searchPaths`, `totalFiles`, `totalReadSets`, `totalConstants`,
//! `readSets`, `constants`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One read-set declaration recovered from a source file.
///
/// A file may contribute any number of records; duplicates across records are
/// kept as found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadSetRecord {
    /// Label for the owning entity: the parent directory name, or the
    /// `processAndActivityName` constant for scoring/operation files.
    #[serde(rename = "type")]
    pub type_label: String,
    /// Field names in source-declaration order.
    #[serde(rename = "readSet")]
    pub read_set: Vec<String>,
}

/// Version-control provenance attached to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitInfo {
    pub commit_id: String,
    pub short_commit_id: String,
    pub commit_url: String,
    pub tree_url: String,
}

/// The complete artifact for one extraction run. Regenerated wholesale on
/// every run; never merged with prior output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutput {
    pub system: String,
    /// RFC 3339 UTC timestamp of the run.
    pub extracted_at: String,
    /// `null` when provenance lookup failed.
    pub git_info: Option<GitInfo>,
    /// The fixed directory prefixes the scan covered.
    pub search_paths: Vec<String>,
    pub total_files: usize,
    pub total_read_sets: usize,
    pub total_constants: usize,
    pub read_sets: Vec<ReadSetRecord>,
    pub constants: BTreeMap<String, String>,
}
