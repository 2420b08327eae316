//! hostver - version metadata for installed programs.
//!
//! hostver answers two questions about a host: which OS package owns a
//! given executable (RPM, Deb, Pacman, Gentoo, APK, or FreeBSD pkg), and
//! what version a program reports when asked with `--version`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Owning-package resolution
//! - [`shell`] - Process execution behind the [`shell::CommandRunner`] seam
//! - [`version`] - Program version queries and reports
//!
//! # Example
//!
//! ```
//! use hostver::packages::{PackageResolver, UNKNOWN_PACKAGE};
//! use hostver::shell::MockRunner;
//! use hostver::version::VersionQuerier;
//! use std::path::Path;
//!
//! let runner = MockRunner::new()
//!     .with_path("/usr/bin/runc")
//!     .with_stdout("/usr/bin/runc", "runc version 1.1.12\n");
//!
//! // No package manager is installed on this fake host.
//! let package = PackageResolver::new(&runner).resolve(Path::new("/usr/bin/runc"));
//! assert_eq!(package, UNKNOWN_PACKAGE);
//!
//! let version = VersionQuerier::new(&runner).query_version("/usr/bin/runc").unwrap();
//! assert_eq!(version, "runc version 1.1.12");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod packages;
pub mod shell;
pub mod version;

pub use error::{HostverError, Result};
pub use packages::{package_for, UNKNOWN_PACKAGE};
pub use version::{program_version, program_version_from_stderr};
