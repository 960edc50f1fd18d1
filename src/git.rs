//! Best-effort git provenance lookup
//!
//! Shells out to the `git` binary in the scanned directory. Every failure
//! path (no git, not a repository, detached state without HEAD) degrades to
//! `None` with a warning; provenance never fails a run.

use crate::output::schema::GitInfo;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Base URL used when the push remote does not point at github.com.
pub const DEFAULT_REPO_URL: &str = "https://github.com/user/repo";

/// Reads the current commit id and remote URL from `repo_path`.
pub fn lookup(repo_path: &Path) -> Option<GitInfo> {
    let commit_id = match git_output(repo_path, &["rev-parse", "HEAD"]) {
        Ok(commit_id) => commit_id,
        Err(err) => {
            warn!(path = %repo_path.display(), error = %err, "could not read git info");
            return None;
        }
    };

    let base_url = match git_output(repo_path, &["config", "--get", "remote.origin.url"]) {
        Ok(remote) if remote.contains("github.com") => normalize_remote(&remote),
        Ok(remote) => {
            debug!(remote = %remote, "remote is not github.com, using default base URL");
            DEFAULT_REPO_URL.to_string()
        }
        Err(err) => {
            debug!(error = %err, "no origin remote, using default base URL");
            DEFAULT_REPO_URL.to_string()
        }
    };

    let short_commit_id = commit_id.chars().take(7).collect();
    Some(GitInfo {
        commit_url: format!("{}/commit/{}", base_url, commit_id),
        tree_url: format!("{}/tree/{}", base_url, commit_id),
        commit_id,
        short_commit_id,
    })
}

fn git_output(repo_path: &Path, args: &[&str]) -> io::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("git {} exited with {}", args.join(" "), output.status),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Turns an ssh-style GitHub remote into a browsable https URL and drops the
/// `.git` suffix.
fn normalize_remote(remote: &str) -> String {
    let url = match remote.strip_prefix("git@github.com:") {
        Some(rest) => format!("https://github.com/{}", rest),
        None => remote.to_string(),
    };
    match url.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}
