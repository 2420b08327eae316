//! Asking programs for their own version.
//!
//! Runs `<program> --version` and returns what it printed, minus one
//! trailing newline. Most tools print to stdout; a few (`dnsname`, for
//! one) print their version to stderr, which [`OutputStream::Stderr`]
//! selects.
//!
//! # Example
//!
//! ```
//! use hostver::shell::MockRunner;
//! use hostver::version::VersionQuerier;
//!
//! let runner = MockRunner::new()
//!     .with_stdout("conmon", "conmon version 2.1.10\n")
//!     .with_output("dnsname", "", "version: 1.3.1\n");
//!
//! let querier = VersionQuerier::new(&runner);
//! assert_eq!(querier.query_version("conmon").unwrap(), "conmon version 2.1.10");
//! assert_eq!(querier.query_version_from_stderr("dnsname").unwrap(), "version: 1.3.1");
//! ```

use crate::error::{HostverError, Result};
use crate::shell::{CommandRunner, SystemRunner};

/// Flag passed to programs to ask for their version.
pub const DEFAULT_VERSION_FLAG: &str = "--version";

/// Which captured stream holds a program's version text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStream {
    #[default]
    Stdout,
    Stderr,
}

/// Queries programs for their self-reported version.
#[derive(Debug, Clone)]
pub struct VersionQuerier<R> {
    runner: R,
    flag: String,
}

impl<R: CommandRunner> VersionQuerier<R> {
    /// Create a querier that passes `--version`.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            flag: DEFAULT_VERSION_FLAG.to_string(),
        }
    }

    /// Use a different version flag.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    /// The flag passed to programs.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Version text a program prints on stdout.
    pub fn query_version(&self, program: &str) -> Result<String> {
        self.query(program, OutputStream::Stdout)
    }

    /// Version text a program prints on stderr.
    pub fn query_version_from_stderr(&self, program: &str) -> Result<String> {
        self.query(program, OutputStream::Stderr)
    }

    /// Run the program and read its version from `stream`.
    ///
    /// Any failure to run, including a non-zero exit, is an error carrying
    /// the program name, both captured streams, and the cause.
    pub fn query(&self, program: &str, stream: OutputStream) -> Result<String> {
        let args = vec![self.flag.clone()];

        let result = self
            .runner
            .run(program, &args)
            .map_err(|e| HostverError::VersionQueryFailed {
                program: program.to_string(),
                flag: self.flag.clone(),
                stderr: String::new(),
                stdout: String::new(),
                reason: e.to_string(),
            })?;

        if !result.success {
            return Err(HostverError::VersionQueryFailed {
                program: program.to_string(),
                flag: self.flag.clone(),
                reason: result.status_text(),
                stderr: result.stderr,
                stdout: result.stdout,
            });
        }

        let text = match stream {
            OutputStream::Stdout => result.stdout,
            OutputStream::Stderr => result.stderr,
        };

        Ok(trim_one_newline(text))
    }
}

/// Version a program prints on stdout, using the host's processes.
pub fn program_version(program: &str) -> Result<String> {
    VersionQuerier::new(SystemRunner::new()).query_version(program)
}

/// Version a program prints on stderr, using the host's processes.
pub fn program_version_from_stderr(program: &str) -> Result<String> {
    VersionQuerier::new(SystemRunner::new()).query_version_from_stderr(program)
}

fn trim_one_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
