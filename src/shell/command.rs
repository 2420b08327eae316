//! Process execution.
//!
//! Everything in this crate that touches the host goes through
//! [`CommandRunner`]: running a program with arguments and checking whether
//! a path exists. [`SystemRunner`] is the real implementation; tests swap in
//! fakes that answer deterministically.

use crate::error::{HostverError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between exit checks while waiting on a child with a timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Human-readable description of how the process ended.
    pub fn status_text(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit status: {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the child if it runs longer than this (None = wait forever).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with the given timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// The host capabilities package and version lookups depend on.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout and stderr separately.
    ///
    /// Returns `Ok` for any process that ran to completion, including
    /// non-zero exits. Returns `Err` when the process could not be spawned
    /// or was killed for exceeding a timeout.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult>;

    /// Check whether a path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        (**self).run(program, args)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Runs programs directly on the host (no shell in between).
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: CommandOptions,
}

impl SystemRunner {
    /// Create a runner with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with the given options.
    pub fn with_options(options: CommandOptions) -> Self {
        Self { options }
    }

    /// Get the execution options.
    pub fn options(&self) -> &CommandOptions {
        &self.options
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        let start = Instant::now();
        let command_line = describe(program, args);

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!("Running: {}", command_line);

        let Some(timeout) = self.options.timeout else {
            let output = cmd.output().map_err(|source| HostverError::CommandSpawnFailed {
                command: command_line.clone(),
                source,
            })?;
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();

            return Ok(if output.status.success() {
                CommandResult::success(stdout, stderr)
            } else {
                CommandResult::failure(output.status.code(), stdout, stderr)
            });
        };

        let child = cmd.spawn().map_err(|source| HostverError::CommandSpawnFailed {
            command: command_line.clone(),
            source,
        })?;

        wait_with_timeout(child, &command_line, start + timeout, timeout)
    }
}

/// Wait for a child and its output, giving up at `deadline`.
///
/// Both pipes are drained on their own threads so a chatty child cannot
/// block on a full pipe while we poll. The deadline also bounds reading:
/// a background process that inherited the pipes can keep them open after
/// the child itself has exited.
fn wait_with_timeout(
    mut child: Child,
    command_line: &str,
    deadline: Instant,
    timeout: Duration,
) -> Result<CommandResult> {
    let stdout_rx = spawn_reader(child.stdout.take());
    let stderr_rx = spawn_reader(child.stderr.take());

    let timed_out = || {
        tracing::warn!("Killed after {:?}: {}", timeout, command_line);
        HostverError::CommandTimedOut {
            command: command_line.to_string(),
            timeout,
        }
    };

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(timed_out());
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(HostverError::CommandSpawnFailed {
                    command: command_line.to_string(),
                    source,
                });
            }
        }
    };

    let stdout = receive_before(&stdout_rx, deadline).ok_or_else(timed_out)?;
    let stderr = receive_before(&stderr_rx, deadline).ok_or_else(timed_out)?;

    if status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr))
    }
}

fn spawn_reader<R: Read + Send + 'static>(stream: Option<R>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(read_stream(stream));
    });
    rx
}

/// Output from a reader thread, or `None` if `deadline` passes first.
fn receive_before(rx: &Receiver<String>, deadline: Instant) -> Option<String> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    match rx.recv_timeout(remaining) {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Timeout) => None,
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
    }
}

fn read_stream<R: Read>(stream: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        let _ = stream.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Render a program and its arguments for logs and error messages.
pub fn describe(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
