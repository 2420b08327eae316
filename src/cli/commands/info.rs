//! Info command implementation.
//!
//! The `hostver info <program>...` command reports path, owning package,
//! and version for each program.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::InfoArgs;
use crate::config::HostverConfig;
use crate::error::Result;
use crate::shell::{parse_system_path, CommandRunner};
use crate::version::{ProgramInfo, ProgramReporter};

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand<R> {
    reporter: ProgramReporter<R>,
    args: InfoArgs,
}

impl<R: CommandRunner> InfoCommand<R> {
    /// Create a new info command that searches the system `PATH`.
    pub fn new(runner: R, config: &HostverConfig, args: InfoArgs) -> Self {
        Self::with_path(runner, config, parse_system_path(), args)
    }

    /// Create a new info command that searches `path_entries`.
    pub fn with_path(
        runner: R,
        config: &HostverConfig,
        path_entries: Vec<PathBuf>,
        args: InfoArgs,
    ) -> Self {
        let reporter = ProgramReporter::new(runner, path_entries)
            .with_stderr_programs(config.stderr_programs.clone())
            .with_version_flag(config.settings.version_flag.as_str());
        Self { reporter, args }
    }
}

impl<R: CommandRunner> Command for InfoCommand<R> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let reports: Vec<ProgramInfo> = self
            .args
            .programs
            .iter()
            .map(|name| self.reporter.describe(name))
            .collect();

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
        } else {
            for report in &reports {
                write_human(out, report)?;
            }
        }

        Ok(CommandResult::success())
    }
}

fn write_human(out: &mut dyn Write, report: &ProgramInfo) -> Result<()> {
    writeln!(out, "{}:", report.name)?;
    match &report.path {
        Some(path) => writeln!(out, "  path: {}", path.display())?,
        None => writeln!(out, "  path: not found")?,
    }
    writeln!(out, "  package: {}", report.package)?;
    match (&report.version, &report.error) {
        (Some(version), _) => {
            let mut lines = version.lines();
            writeln!(out, "  version: {}", lines.next().unwrap_or_default())?;
            for line in lines {
                writeln!(out, "    {}", line)?;
            }
        }
        (None, Some(error)) => writeln!(out, "  error: {}", error)?,
        (None, None) => {}
    }
    Ok(())
}
