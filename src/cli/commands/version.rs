//! Version command implementation.
//!
//! The `hostver version <program>` command prints what a program reports
//! for `--version`.

use std::io::Write;

use crate::cli::args::VersionArgs;
use crate::config::HostverConfig;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::version::{stream_for, OutputStream, VersionQuerier};

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand<R> {
    runner: R,
    version_flag: String,
    stderr_programs: Vec<String>,
    args: VersionArgs,
}

impl<R: CommandRunner> VersionCommand<R> {
    /// Create a new version command.
    pub fn new(runner: R, config: &HostverConfig, args: VersionArgs) -> Self {
        Self {
            runner,
            version_flag: config.settings.version_flag.clone(),
            stderr_programs: config.stderr_programs.clone(),
            args,
        }
    }

    /// Stream to read: `--stderr`, or the configured stderr programs.
    fn stream(&self) -> OutputStream {
        if self.args.stderr {
            return OutputStream::Stderr;
        }
        stream_for(&self.args.program, &self.stderr_programs)
    }
}

impl<R: CommandRunner> Command for VersionCommand<R> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let version = VersionQuerier::new(&self.runner)
            .with_flag(self.version_flag.as_str())
            .query(&self.args.program, self.stream())?;

        writeln!(out, "{}", version)?;
        Ok(CommandResult::success())
    }
}
