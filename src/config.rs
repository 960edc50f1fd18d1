//! Systems registry configuration
//!
//! The registry is a small JSON file listing the target codebases the tool
//! can sync against. It is validated on every load and save: version must be
//! 1, keys are unique lowercase-kebab-case, names and output paths are
//! non-empty. Entries are trimmed and sorted by key so the file stays diffable.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Registry file name looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "systems.config.json";

/// The only supported registry schema version.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {0}. Run \"readsync add-system\" to create it.")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: only version 1 is supported, got {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid config: systems[{0}].key must be lowercase-kebab-case")]
    InvalidKey(usize),

    #[error("Invalid config: duplicate system key \"{0}\"")]
    DuplicateKey(String),

    #[error("Invalid config: systems[{0}].name must be a non-empty string")]
    EmptyName(usize),

    #[error("Invalid config: systems[{0}].outputPublic must be a non-empty string")]
    EmptyOutput(usize),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One registered target codebase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEntry {
    pub key: String,
    pub name: String,
    pub output_public: String,
}

impl SystemEntry {
    /// Builds an entry with the conventional artifact location for `key`.
    pub fn with_default_output(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            output_public: format!("public/readset-output-{}.json", key),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemsConfig {
    pub version: u32,
    pub systems: Vec<SystemEntry>,
}

impl SystemsConfig {
    /// Seed registry used when no config file exists yet.
    pub fn default_config() -> Self {
        Self {
            version: CONFIG_VERSION,
            systems: vec![
                SystemEntry::with_default_output("ndf", "NDF"),
                SystemEntry::with_default_output("ssf", "SSF"),
            ],
        }
    }

    pub fn find(&self, key: &str) -> Option<&SystemEntry> {
        self.systems.iter().find(|system| system.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.systems.iter().map(|system| system.key.as_str()).collect()
    }

    /// Trims all fields, enforces the invariants above, and sorts entries by
    /// key. Consumes and returns the config so callers always hold a
    /// validated value.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        let mut seen = Vec::new();
        for (index, system) in self.systems.iter_mut().enumerate() {
            system.key = system.key.trim().to_string();
            system.name = system.name.trim().to_string();
            system.output_public = system.output_public.trim().to_string();

            if !is_valid_key(&system.key) {
                return Err(ConfigError::InvalidKey(index));
            }
            if seen.contains(&system.key) {
                return Err(ConfigError::DuplicateKey(system.key.clone()));
            }
            seen.push(system.key.clone());

            if system.name.is_empty() {
                return Err(ConfigError::EmptyName(index));
            }
            if system.output_public.is_empty() {
                return Err(ConfigError::EmptyOutput(index));
            }
        }

        self.systems.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(self)
    }
}

/// True when `key` is lowercase-kebab-case (`abc`, `abc-core`, `v2-beta`).
pub fn is_valid_key(key: &str) -> bool {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$")
        .expect("hard-coded pattern")
        .is_match(key)
}

/// Loads and validates the registry at `path`.
pub fn load(path: &Path) -> Result<SystemsConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: SystemsConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    parsed.validate()
}

/// Loads the registry, falling back to the seed config when the file does
/// not exist yet.
pub fn load_or_default(path: &Path) -> Result<SystemsConfig, ConfigError> {
    if !path.exists() {
        return Ok(SystemsConfig::default_config());
    }
    load(path)
}

/// Validates and writes the registry as pretty JSON with a trailing newline.
pub fn save(path: &Path, config: SystemsConfig) -> Result<SystemsConfig, ConfigError> {
    let validated = config.validate()?;
    let json = serde_json::to_string_pretty(&validated).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, format!("{}\n", json)).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(validated)
}
