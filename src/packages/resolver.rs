//! Owning-package resolution.
//!
//! [`PackageResolver`] asks each package manager in [`PACKAGE_PROBES`]
//! which package owns a file, stopping at the first definite answer.
//! Resolution never fails: anything that goes wrong yields
//! [`UNKNOWN_PACKAGE`].
//!
//! # Example
//!
//! ```
//! use hostver::packages::{PackageResolver, UNKNOWN_PACKAGE};
//! use hostver::shell::MockRunner;
//! use std::path::Path;
//!
//! let runner = MockRunner::new()
//!     .with_path("/usr/bin/crun")
//!     .with_path("/usr/bin/rpm")
//!     .with_stdout("/usr/bin/rpm", "crun-1.14.4-1.fc40.x86_64\n");
//!
//! let resolver = PackageResolver::new(&runner);
//! assert_eq!(resolver.resolve(Path::new("/usr/bin/crun")), "crun-1.14.4-1.fc40.x86_64");
//! assert_eq!(resolver.resolve(Path::new("/usr/bin/missing")), UNKNOWN_PACKAGE);
//! ```

use std::path::Path;

use crate::shell::{CommandRunner, SystemRunner};

use super::probe::{
    PackageFamily, PackageProbe, APK, DLOCATE, DPKG, DPKG_QUERY, DPKG_QUERY_FORMAT,
    PACKAGE_PROBES,
};

/// Returned when no package manager claims a file.
pub const UNKNOWN_PACKAGE: &str = "Unknown";

/// What a single probe had to say about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProbeOutcome {
    /// The tool is not installed (or said nothing); try the next probe.
    Unavailable,
    /// The tool ran but could not name an owner.
    Unknown,
    /// The tool named the owning package.
    Owner(String),
}

impl ProbeOutcome {
    fn classify(output: &str) -> Self {
        match output {
            "" => ProbeOutcome::Unavailable,
            UNKNOWN_PACKAGE => ProbeOutcome::Unknown,
            owner => ProbeOutcome::Owner(owner.to_string()),
        }
    }
}

/// Resolves which OS package owns an executable.
#[derive(Debug, Clone)]
pub struct PackageResolver<R> {
    runner: R,
    probes: Vec<PackageProbe>,
}

impl<R: CommandRunner> PackageResolver<R> {
    /// Create a resolver using the standard probe table.
    pub fn new(runner: R) -> Self {
        Self::with_probes(runner, PACKAGE_PROBES.to_vec())
    }

    /// Create a resolver with a custom probe list.
    pub fn with_probes(runner: R, probes: Vec<PackageProbe>) -> Self {
        Self { runner, probes }
    }

    /// Determine the package owning `executable`.
    ///
    /// Returns [`UNKNOWN_PACKAGE`] when the path does not exist or no
    /// probe names an owner. Once a probe of some family has run without
    /// naming an owner, the remaining probes of that family are skipped; a
    /// probe whose tool is not installed does not count as having run.
    ///
    /// Paths that are not valid UTF-8 are never probed and resolve to
    /// [`UNKNOWN_PACKAGE`].
    pub fn resolve(&self, executable: &Path) -> String {
        if !self.runner.exists(executable) {
            tracing::debug!("{} does not exist", executable.display());
            return UNKNOWN_PACKAGE.to_string();
        }

        let Some(target) = executable.to_str() else {
            tracing::debug!("{} is not valid UTF-8", executable.display());
            return UNKNOWN_PACKAGE.to_string();
        };
        let mut concluded: Vec<PackageFamily> = Vec::new();

        for probe in &self.probes {
            if concluded.contains(&probe.family) {
                tracing::debug!("Skipping {} ({} already answered)", probe.command, probe.family);
                continue;
            }

            match self.query_owner(probe, target) {
                ProbeOutcome::Unavailable => continue,
                ProbeOutcome::Unknown => concluded.push(probe.family),
                ProbeOutcome::Owner(package) => {
                    tracing::debug!("{} owns {} (via {})", package, target, probe.command);
                    return package;
                }
            }
        }

        UNKNOWN_PACKAGE.to_string()
    }

    fn query_owner(&self, probe: &PackageProbe, target: &str) -> ProbeOutcome {
        if !self.runner.exists(Path::new(probe.command)) {
            return ProbeOutcome::Unavailable;
        }

        let args = probe.args_for(target);
        let mut output = match self.runner.run(probe.command, &args) {
            Ok(result) if result.success => {
                let stdout = result.stdout;
                match probe.command {
                    DLOCATE => self.canonical_debian(first_line(&stdout), target),
                    DPKG => self.canonical_debian(&stdout, target),
                    _ => stdout,
                }
            }
            Ok(result) => {
                tracing::debug!("{} exited with {}", probe.command, result.status_text());
                UNKNOWN_PACKAGE.to_string()
            }
            Err(e) => {
                tracing::debug!("{}", e);
                UNKNOWN_PACKAGE.to_string()
            }
        };

        if probe.command == APK {
            output = strip_apk_owner(&output, target);
        }

        ProbeOutcome::classify(output.trim_matches('\n'))
    }

    /// Turn a `dpkg -S` style answer into `name_version_arch`.
    ///
    /// Falls back to the raw answer when `dpkg-query` fails.
    fn canonical_debian(&self, raw: &str, target: &str) -> String {
        let package = debian_package_name(raw, target);
        let args = vec![
            "-f".to_string(),
            DPKG_QUERY_FORMAT.to_string(),
            "-W".to_string(),
            package.to_string(),
        ];

        match self.runner.run(DPKG_QUERY, &args) {
            Ok(result) if result.success => result.stdout,
            _ => raw.to_string(),
        }
    }
}

/// Resolve the package owning `executable` on this host.
pub fn package_for(executable: &Path) -> String {
    PackageResolver::new(SystemRunner::new()).resolve(executable)
}

fn first_line(output: &str) -> &str {
    output.split('\n').next().unwrap_or(output)
}

/// Pick the package name out of a `<a>: <b>` line.
///
/// Debian tools print `package: path`; if the left side is the queried path
/// itself, the name is on the right.
fn debian_package_name<'a>(line: &'a str, target: &str) -> &'a str {
    match line.split_once(": ") {
        Some((left, right)) if left == target => right.trim_matches('\n'),
        Some((left, _)) => left,
        None => line.trim_matches('\n'),
    }
}

fn strip_apk_owner(output: &str, target: &str) -> String {
    let prefix = format!("{} is owned by ", target);
    output.replacen(&prefix, "", 1)
}
