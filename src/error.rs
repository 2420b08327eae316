//! Error types for hostver operations.
//!
//! This module defines [`HostverError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Package resolution never surfaces errors; every failure collapses into
//!   the `Unknown` sentinel
//! - Version queries fail loudly with [`HostverError::VersionQueryFailed`]
//! - Use `anyhow::Error` (via `HostverError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for hostver operations.
#[derive(Debug, Error)]
pub enum HostverError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A process could not be spawned or waited on.
    #[error("Failed to run {command}: {source}")]
    CommandSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A process outlived its configured timeout and was killed.
    #[error("Command timed out after {timeout:?}: {command}")]
    CommandTimedOut { command: String, timeout: Duration },

    /// Running `<program> --version` did not succeed.
    ///
    /// Carries both captured streams so the failure can be diagnosed
    /// without re-running the program.
    #[error("`{program} {flag}` failed: {stderr} {stdout} ({reason})")]
    VersionQueryFailed {
        program: String,
        flag: String,
        stderr: String,
        stdout: String,
        reason: String,
    },

    /// Failed to render a report as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hostver operations.
pub type Result<T> = std::result::Result<T, HostverError>;
