//! Command handlers
//!
//! Thin glue between parsed CLI arguments and the library: resolve the
//! system from the registry (prompting where needed), run the pipeline, and
//! map errors to process exit codes. Warnings never change the exit status;
//! only bad config, bad arguments, and output write failures do.

use crate::cli::commands::{AddSystemArgs, SyncArgs};
use crate::cli::prompts;
use crate::config::{self, SystemEntry};
use crate::output::schema::SyncOutput;
use crate::sync::{run_sync, SyncRequest};
use anyhow::{bail, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

pub fn handle_sync(args: &SyncArgs, config_path: &Path) -> i32 {
    match run_sync_command(args, config_path) {
        Ok((output, artifact_path)) => {
            println!(
                "Extracted {} read sets and {} constants from {} files -> {}",
                output.total_read_sets,
                output.total_constants,
                output.total_files,
                artifact_path.display()
            );
            0
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

pub fn handle_add_system(args: &AddSystemArgs, config_path: &Path) -> i32 {
    match run_add_system_command(args, config_path) {
        Ok(entry) => {
            println!("Added system \"{}\" in {}", entry.key, config_path.display());
            println!("Next: readsync sync {}", entry.key);
            0
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run_sync_command(args: &SyncArgs, config_path: &Path) -> Result<(SyncOutput, PathBuf)> {
    let registry = config::load(config_path)?;
    if registry.systems.is_empty() {
        bail!(
            "No systems configured in {}. Run \"readsync add-system\" first.",
            config_path.display()
        );
    }

    let system = resolve_system(args, &registry)?;

    let base_path = match &args.base_path {
        Some(path) => path.clone(),
        None => {
            let stdin = io::stdin();
            prompts::prompt_repo_path(&system.key, &mut stdin.lock(), &mut io::stdout())?
        }
    };

    let output_public = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&system.output_public));

    let request = SyncRequest {
        base_path,
        output_public: output_public.clone(),
        system: system.key,
    };
    let output = run_sync(&request)?;

    if output.total_files == 0 {
        warn!(
            base = %request.base_path.display(),
            "no process files found; the artifact is empty"
        );
    }

    Ok((output, output_public))
}

fn resolve_system(args: &SyncArgs, registry: &config::SystemsConfig) -> Result<SystemEntry> {
    match &args.system_key {
        Some(key) => match registry.find(key) {
            Some(system) => Ok(system.clone()),
            None => bail!(
                "Unknown system \"{}\". Available systems: {}",
                key,
                match registry.keys().as_slice() {
                    [] => "(none)".to_string(),
                    keys => keys.join(", "),
                }
            ),
        },
        None => {
            let stdin = io::stdin();
            let selected =
                prompts::select_system(&registry.systems, &mut stdin.lock(), &mut io::stdout())?;
            Ok(selected)
        }
    }
}

fn run_add_system_command(args: &AddSystemArgs, config_path: &Path) -> Result<SystemEntry> {
    let registry = config::load_or_default(config_path)?;

    let stdin = io::stdin();
    let entry = prompts::prompt_new_system(
        &registry,
        args.key.as_deref(),
        args.name.as_deref(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;

    let mut updated = registry;
    updated.systems.push(entry.clone());
    config::save(config_path, updated)?;

    Ok(entry)
}
