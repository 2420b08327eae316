//! Per-program version reports.
//!
//! A [`ProgramInfo`] bundles what is known about one installed program:
//! where it lives, which package installed it, and what version it claims
//! to be. This is the shape container engines print for their helper
//! binaries (`conmon`, `runc`, `slirp4netns`, ...).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::packages::{PackageResolver, UNKNOWN_PACKAGE};
use crate::shell::{resolve_tool_path, CommandRunner};

use super::query::{OutputStream, VersionQuerier, DEFAULT_VERSION_FLAG};

/// Programs that print their version on stderr.
pub const DEFAULT_STDERR_PROGRAMS: &[&str] = &["dnsname"];

/// What is known about one program on this host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInfo {
    /// Name as requested.
    pub name: String,

    /// Resolved location, if the program was found.
    pub path: Option<PathBuf>,

    /// Owning package, or `Unknown`.
    pub package: String,

    /// Full version text the program printed.
    pub version: Option<String>,

    /// Bare version number extracted from `version`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_version: Option<String>,

    /// Why the version query failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds [`ProgramInfo`] reports.
#[derive(Debug, Clone)]
pub struct ProgramReporter<R> {
    runner: R,
    path_entries: Vec<PathBuf>,
    stderr_programs: Vec<String>,
    version_flag: String,
}

impl<R: CommandRunner> ProgramReporter<R> {
    /// Create a reporter that looks programs up in `path_entries`.
    pub fn new(runner: R, path_entries: Vec<PathBuf>) -> Self {
        Self {
            runner,
            path_entries,
            stderr_programs: DEFAULT_STDERR_PROGRAMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            version_flag: DEFAULT_VERSION_FLAG.to_string(),
        }
    }

    /// Replace the list of programs read from stderr.
    pub fn with_stderr_programs(mut self, programs: Vec<String>) -> Self {
        self.stderr_programs = programs;
        self
    }

    /// Use a different version flag.
    pub fn with_version_flag(mut self, flag: impl Into<String>) -> Self {
        self.version_flag = flag.into();
        self
    }

    /// Which stream carries `name`'s version.
    pub fn stream_for(&self, name: &str) -> OutputStream {
        stream_for(name, &self.stderr_programs)
    }

    /// Locate `name`, resolve its package, and query its version.
    ///
    /// A program that cannot be found still gets a report; its version
    /// query runs against the bare name and usually fails.
    pub fn describe(&self, name: &str) -> ProgramInfo {
        let path = resolve_tool_path(name, &self.path_entries);

        let package = match &path {
            Some(p) => PackageResolver::new(&self.runner).resolve(p),
            None => UNKNOWN_PACKAGE.to_string(),
        };

        let program = path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());

        let querier = VersionQuerier::new(&self.runner).with_flag(self.version_flag.as_str());
        let (version, error) = match querier.query(&program, self.stream_for(name)) {
            Ok(v) => (Some(v), None),
            Err(e) => {
                tracing::debug!("Version query for {} failed: {}", name, e);
                (None, Some(e.to_string()))
            }
        };

        ProgramInfo {
            name: name.to_string(),
            short_version: version.as_deref().and_then(extract_version),
            path,
            package,
            version,
            error,
        }
    }
}

/// Which stream carries `name`'s version, given the programs known to
/// print it on stderr. Matches on the file name, so paths work too.
pub fn stream_for(name: &str, stderr_programs: &[String]) -> OutputStream {
    let base = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());

    if stderr_programs.iter().any(|p| *p == base) {
        OutputStream::Stderr
    } else {
        OutputStream::Stdout
    }
}

/// Extract a bare version number from version output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(dir: &Path, name: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    #[test]
    fn describe_found_program() {
        let temp = TempDir::new().unwrap();
        let bin = create_fake_binary(temp.path(), "conmon");
        let bin_str = bin.to_str().unwrap();

        let runner = MockRunner::new()
            .with_path(&bin)
            .with_path("/usr/bin/rpm")
            .with_stdout("/usr/bin/rpm", "conmon-2.1.10-1.fc40.x86_64\n")
            .with_stdout(bin_str, "conmon version 2.1.10\ncommit: 1234\n");

        let info = ProgramReporter::new(&runner, vec![temp.path().to_path_buf()]).describe("conmon");

        assert_eq!(info.name, "conmon");
        assert_eq!(info.path.as_deref(), Some(bin.as_path()));
        assert_eq!(info.package, "conmon-2.1.10-1.fc40.x86_64");
        assert_eq!(
            info.version.as_deref(),
            Some("conmon version 2.1.10\ncommit: 1234")
        );
        assert_eq!(info.short_version.as_deref(), Some("2.1.10"));
        assert!(info.error.is_none());
    }

    #[test]
    fn describe_missing_program() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();

        let info = ProgramReporter::new(&runner, vec![temp.path().to_path_buf()]).describe("runc");

        assert!(info.path.is_none());
        assert_eq!(info.package, UNKNOWN_PACKAGE);
        assert!(info.version.is_none());
        assert!(info.error.unwrap().contains("runc"));
        assert_eq!(runner.calls(), vec!["runc --version"]);
    }

    #[test]
    fn dnsname_is_read_from_stderr() {
        let temp = TempDir::new().unwrap();
        let bin = create_fake_binary(temp.path(), "dnsname");

        let runner = MockRunner::new()
            .with_path(&bin)
            .with_output(bin.to_str().unwrap(), "", "CNI dnsname plugin\nversion: 1.3.1\n");

        let info = ProgramReporter::new(&runner, vec![temp.path().to_path_buf()]).describe("dnsname");

        assert_eq!(
            info.version.as_deref(),
            Some("CNI dnsname plugin\nversion: 1.3.1")
        );
        assert_eq!(info.package, UNKNOWN_PACKAGE);
    }

    #[test]
    fn stderr_programs_are_configurable() {
        let runner = MockRunner::new();
        let reporter = ProgramReporter::new(&runner, vec![])
            .with_stderr_programs(vec!["java".to_string()]);

        assert_eq!(reporter.stream_for("java"), OutputStream::Stderr);
        assert_eq!(reporter.stream_for("/opt/jdk/bin/java"), OutputStream::Stderr);
        assert_eq!(reporter.stream_for("dnsname"), OutputStream::Stdout);
    }

    #[test]
    fn program_info_serializes_without_empty_optionals() {
        let info = ProgramInfo {
            name: "crun".into(),
            path: Some(PathBuf::from("/usr/bin/crun")),
            package: "crun-1.14.4-1.fc40.x86_64".into(),
            version: Some("crun version 1.14.4".into()),
            short_version: None,
            error: None,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["package"], "crun-1.14.4-1.fc40.x86_64");
        assert_eq!(json["path"], "/usr/bin/crun");
        assert!(json.get("error").is_none());
        assert!(json.get("short_version").is_none());
    }

    #[test]
    fn extract_version_semver() {
        assert_eq!(
            extract_version("podman version 5.0.2"),
            Some("5.0.2".to_string())
        );
    }

    #[test]
    fn extract_version_two_part() {
        assert_eq!(
            extract_version("slirp4netns version 1.2"),
            Some("1.2".to_string())
        );
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }
}
