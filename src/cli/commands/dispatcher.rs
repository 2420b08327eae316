//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::HostverConfig;
use crate::error::Result;
use crate::shell::{CommandOptions, SystemRunner};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: HostverConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the loaded configuration.
    pub fn new(config: HostverConfig) -> Self {
        Self { config }
    }

    /// Runner honoring the configured timeout.
    pub fn runner(&self) -> SystemRunner {
        SystemRunner::with_options(CommandOptions {
            timeout: self.config.settings.timeout_duration(),
        })
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Package(args) => {
                let cmd = super::package::PackageCommand::new(self.runner(), args.clone());
                cmd.execute(out)
            }
            Commands::Version(args) => {
                let cmd =
                    super::version::VersionCommand::new(self.runner(), &self.config, args.clone());
                cmd.execute(out)
            }
            Commands::Info(args) => {
                let cmd = super::info::InfoCommand::new(self.runner(), &self.config, args.clone());
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
