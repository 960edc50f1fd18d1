//! readsync - read-set and constant extraction for process codebases
//!
//! Scans a target repository for process source files, recovers read-set
//! declarations and grouped string constants with pattern heuristics,
//! reconciles cross-file constant references, and writes a JSON artifact
//! with run metadata for downstream dashboards.
//!
//! # Core Concepts
//!
//! - **Read set**: the list of fields a process/document type declares it
//!   reads, as written in source
//! - **Constant table**: symbolic names mapped to literal string values,
//!   merged across files with first-definition-wins resolution
//! - **System**: a named target codebase (key, display name, output path)
//!   kept in a small JSON registry
//!
//! The extraction is deliberately heuristic: it pattern-matches loosely
//! structured source text instead of parsing it, so the emitted artifacts
//! stay compatible with what existing consumers expect, blind spots
//! included.
//!
//! # Example Usage
//!
//! ```ignore
//! use readsync::{run_sync, SyncRequest};
//! use std::path::PathBuf;
//!
//! let request = SyncRequest {
//!     base_path: PathBuf::from("/path/to/repo"),
//!     output_public: PathBuf::from("public/readset-output-ndf.json"),
//!     system: "ndf".to_string(),
//! };
//! let output = run_sync(&request)?;
//! println!("{} read sets", output.total_read_sets);
//! ```

pub mod cli;
pub mod config;
pub mod extract;
pub mod git;
pub mod output;
pub mod sync;

// Re-export key types for convenient access
pub use config::{ConfigError, SystemEntry, SystemsConfig};
pub use output::schema::{GitInfo, ReadSetRecord, SyncOutput};
pub use sync::{run_sync, SyncError, SyncRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_readsync() {
        assert_eq!(NAME, "readsync");
    }
}
