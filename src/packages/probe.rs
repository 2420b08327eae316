//! Package-manager probe table.
//!
//! Each [`PackageProbe`] names one ownership query for a package-manager
//! tool. Probes in the same [`PackageFamily`] are alternatives for the same
//! package database, listed fastest first.

use std::fmt;

/// `dlocate`, the fast Debian lookup. May print several matches.
pub const DLOCATE: &str = "/usr/bin/dlocate";

/// `dpkg`, the slow Debian lookup.
pub const DPKG: &str = "/usr/bin/dpkg";

/// `dpkg-query`, used to canonicalize a Debian package name.
pub const DPKG_QUERY: &str = "/usr/bin/dpkg-query";

/// `dpkg-query` output format for a canonical `name_version_arch` string.
pub const DPKG_QUERY_FORMAT: &str = "${Package}_${Version}_${Architecture}";

/// Alpine's `apk`, which embeds an `<path> is owned by ` prefix in its answer.
pub const APK: &str = "/sbin/apk";

/// Package-manager ecosystem a probe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageFamily {
    Rpm,
    Deb,
    Pacman,
    Gentoo,
    Apk,
    Pkg,
}

impl PackageFamily {
    /// Short lowercase tag for the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageFamily::Rpm => "rpm",
            PackageFamily::Deb => "deb",
            PackageFamily::Pacman => "pacman",
            PackageFamily::Gentoo => "gentoo",
            PackageFamily::Apk => "apk",
            PackageFamily::Pkg => "pkg",
        }
    }
}

impl fmt::Display for PackageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ownership query: `command base_args... <path>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageProbe {
    pub family: PackageFamily,
    pub command: &'static str,
    pub base_args: &'static [&'static str],
}

impl PackageProbe {
    /// Arguments for querying the owner of `target`.
    pub fn args_for(&self, target: &str) -> Vec<String> {
        self.base_args
            .iter()
            .map(|arg| arg.to_string())
            .chain(std::iter::once(target.to_string()))
            .collect()
    }
}

/// Probes tried in order when resolving a program's owning package.
pub const PACKAGE_PROBES: &[PackageProbe] = &[
    PackageProbe {
        family: PackageFamily::Rpm,
        command: "/usr/bin/rpm",
        base_args: &["-q", "-f"],
    },
    // Debian, Ubuntu (quick)
    PackageProbe {
        family: PackageFamily::Deb,
        command: DLOCATE,
        base_args: &["-F"],
    },
    // Debian, Ubuntu (slow)
    PackageProbe {
        family: PackageFamily::Deb,
        command: DPKG,
        base_args: &["-S"],
    },
    // Arch
    PackageProbe {
        family: PackageFamily::Pacman,
        command: "/usr/bin/pacman",
        base_args: &["-Qo"],
    },
    // Gentoo (quick)
    PackageProbe {
        family: PackageFamily::Gentoo,
        command: "/usr/bin/qfile",
        base_args: &["-qv"],
    },
    // Gentoo (slow)
    PackageProbe {
        family: PackageFamily::Gentoo,
        command: "/usr/bin/equery",
        base_args: &["b"],
    },
    // Alpine
    PackageProbe {
        family: PackageFamily::Apk,
        command: APK,
        base_args: &["info", "-W"],
    },
    // FreeBSD
    PackageProbe {
        family: PackageFamily::Pkg,
        command: "/usr/local/sbin/pkg",
        base_args: &["which", "-q"],
    },
];
