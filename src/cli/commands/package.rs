//! Package command implementation.
//!
//! The `hostver package <path>` command prints the OS package that owns a
//! file, or `Unknown`.

use std::io::Write;

use serde_json::json;

use crate::cli::args::PackageArgs;
use crate::error::Result;
use crate::packages::PackageResolver;
use crate::shell::CommandRunner;

use super::dispatcher::{Command, CommandResult};

/// The package command implementation.
pub struct PackageCommand<R> {
    runner: R,
    args: PackageArgs,
}

impl<R: CommandRunner> PackageCommand<R> {
    /// Create a new package command.
    pub fn new(runner: R, args: PackageArgs) -> Self {
        Self { runner, args }
    }
}

impl<R: CommandRunner> Command for PackageCommand<R> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let package = PackageResolver::new(&self.runner).resolve(&self.args.path);

        if self.args.json {
            let report = json!({
                "path": self.args.path,
                "package": package,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{}", package)?;
        }

        Ok(CommandResult::success())
    }
}
