//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with canned responses keyed by
//! program, a configurable set of paths that "exist", and a log of every
//! command it was asked to run.
//!
//! # Example
//!
//! ```
//! use hostver::shell::{CommandRunner, MockRunner};
//! use std::path::Path;
//!
//! let runner = MockRunner::new()
//!     .with_path("/usr/bin/rpm")
//!     .with_stdout("/usr/bin/rpm", "bash-5.2.26-3.fc40.x86_64\n");
//!
//! assert!(runner.exists(Path::new("/usr/bin/rpm")));
//! let result = runner.run("/usr/bin/rpm", &["-q".into()]).unwrap();
//! assert_eq!(result.stdout, "bash-5.2.26-3.fc40.x86_64\n");
//! assert_eq!(runner.calls(), vec!["/usr/bin/rpm -q".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{HostverError, Result};

use super::command::{describe, CommandResult, CommandRunner};

#[derive(Debug, Clone)]
enum Response {
    Exit(CommandResult),
    SpawnError,
}

/// Command runner that answers from a script instead of the host.
///
/// Programs without a configured response fail to spawn, like a missing
/// binary would.
#[derive(Debug, Default)]
pub struct MockRunner {
    paths: HashSet<PathBuf>,
    responses: HashMap<String, Response>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where nothing exists and nothing runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as existing.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Make `program` exit 0 with the given stdout.
    pub fn with_stdout(self, program: &str, stdout: &str) -> Self {
        self.with_output(program, stdout, "")
    }

    /// Make `program` exit 0 with the given stdout and stderr.
    pub fn with_output(mut self, program: &str, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            program.to_string(),
            Response::Exit(CommandResult::success(
                stdout.to_string(),
                stderr.to_string(),
            )),
        );
        self
    }

    /// Make `program` exit with a non-zero code.
    pub fn with_failure(mut self, program: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            program.to_string(),
            Response::Exit(CommandResult::failure(
                Some(code),
                stdout.to_string(),
                stderr.to_string(),
            )),
        );
        self
    }

    /// Make `program` fail to spawn even though it may "exist".
    pub fn with_spawn_error(mut self, program: &str) -> Self {
        self.responses
            .insert(program.to_string(), Response::SpawnError);
        self
    }

    /// Every command run so far, rendered as `program arg1 arg2 ...`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Commands run so far whose program matches `program`.
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(' ').next() == Some(program))
            .cloned()
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        let command = describe(program, args);
        self.calls.borrow_mut().push(command.clone());

        match self.responses.get(program) {
            Some(Response::Exit(result)) => Ok(result.clone()),
            Some(Response::SpawnError) | None => Err(HostverError::CommandSpawnFailed {
                command,
                source: io::Error::new(io::ErrorKind::NotFound, "no such program"),
            }),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}
