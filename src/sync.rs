//! Extraction pipeline orchestration
//!
//! Single-threaded, synchronous: discover files, read and extract per file,
//! reconcile constants, attach provenance, write the artifact. Per-file read
//! failures are logged and skipped; only the final output write is fatal.

use crate::extract::constants::ConstantExtractor;
use crate::extract::readsets::ReadSetExtractor;
use crate::extract::{paths, reconcile};
use crate::git;
use crate::output::schema::{ReadSetRecord, SyncOutput};
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved inputs for one run. The caller (CLI layer) has already picked the
/// system and validated the paths as far as it cares to.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Repository root to scan.
    pub base_path: PathBuf,
    /// Destination for the JSON artifact.
    pub output_public: PathBuf,
    /// Registry key recorded in the artifact.
    pub system: String,
}

/// Runs the full pipeline and writes the artifact to
/// `request.output_public`. The composed record is also returned so callers
/// can inspect results without re-reading the file.
pub fn run_sync(request: &SyncRequest) -> Result<SyncOutput, SyncError> {
    let files = paths::find_source_files(&request.base_path);
    info!(
        count = files.len(),
        base = %request.base_path.display(),
        "scanning process source files"
    );

    let constant_extractor = ConstantExtractor::new();
    let readset_extractor = ReadSetExtractor::new();

    let mut read_sets: Vec<ReadSetRecord> = Vec::new();
    let mut per_file_constants = Vec::new();
    let mut cached_contents = Vec::new();

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };

        read_sets.extend(readset_extractor.extract(&content, path));
        per_file_constants.push(constant_extractor.extract(&content));
        cached_contents.push(content);
    }

    let mut constants = reconcile::merge_constants(&per_file_constants);
    let needed = reconcile::referenced_fields(&read_sets);
    reconcile::resolve_missing(
        &mut constants,
        &needed,
        cached_contents.iter().map(String::as_str),
    );

    let git_info = git::lookup(&request.base_path);
    if let Some(ref info) = git_info {
        info!(commit = %info.short_commit_id, url = %info.commit_url, "git provenance");
    }

    let output = SyncOutput {
        system: request.system.clone(),
        extracted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        git_info,
        search_paths: paths::SEARCH_PATHS.iter().map(|s| s.to_string()).collect(),
        total_files: files.len(),
        total_read_sets: read_sets.len(),
        total_constants: constants.len(),
        read_sets,
        constants,
    };

    let json = serde_json::to_string_pretty(&output)?;
    fs::write(&request.output_public, json).map_err(|source| SyncError::OutputWrite {
        path: request.output_public.clone(),
        source,
    })?;
    info!(path = %request.output_public.display(), "wrote extraction artifact");

    Ok(output)
}
