pub mod commands;
pub mod handlers;
pub mod prompts;

pub use commands::{AddSystemArgs, CliArgs, Commands, SyncArgs};
