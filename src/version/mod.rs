//! Program version queries and reports.
//!
//! - [`query`] - Running `<program> --version` and reading the answer
//! - [`report`] - Combining location, package, and version per program

pub mod query;
pub mod report;

pub use query::{
    program_version, program_version_from_stderr, OutputStream, VersionQuerier,
    DEFAULT_VERSION_FLAG,
};
pub use report::{
    extract_version, stream_for, ProgramInfo, ProgramReporter, DEFAULT_STDERR_PROGRAMS,
};
