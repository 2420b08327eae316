//! Command-line interface for hostver.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InfoArgs, PackageArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
