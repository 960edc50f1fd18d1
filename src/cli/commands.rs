use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-set and constant extraction for process codebases
#[derive(Parser, Debug)]
#[command(
    name = "readsync",
    about = "Extract read sets and string constants from a process codebase",
    version,
    long_about = "readsync scans a target repository for process source files, recovers \
                  read-set declarations and grouped string constants with pattern \
                  heuristics, and writes a JSON artifact for downstream dashboards. \
                  Target codebases are kept in a small systems registry."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Path to the systems registry (defaults to ./systems.config.json)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run extraction for a configured system",
        long_about = "Scans the system's repository and writes the extraction artifact.\n\n\
                      Examples:\n  \
                      readsync sync\n  \
                      readsync sync ndf\n  \
                      readsync sync ndf --base-path ~/src/ndf -o out.json"
    )]
    Sync(SyncArgs),

    #[command(
        name = "add-system",
        about = "Register a new target system in the registry",
        long_about = "Adds a system entry to the registry, prompting for any value not \
                      given as a flag.\n\n\
                      Examples:\n  \
                      readsync add-system\n  \
                      readsync add-system --key abc-core --name \"ABC Core\""
    )]
    AddSystem(AddSystemArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct SyncArgs {
    #[arg(
        value_name = "SYSTEM_KEY",
        help = "Registry key of the system to sync (prompts with a list when omitted)"
    )]
    pub system_key: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Repository to scan (prompts when omitted)"
    )]
    pub base_path: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the artifact here instead of the registry's outputPublic"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddSystemArgs {
    #[arg(
        long,
        value_name = "KEY",
        help = "System key in lowercase-kebab-case (prompts when omitted)"
    )]
    pub key: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Display name (defaults to the uppercased key)"
    )]
    pub name: Option<String>,
}
