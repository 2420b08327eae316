//! Package resolution and version queries through the public API.

use hostver::packages::{PackageFamily, PackageResolver, PACKAGE_PROBES, UNKNOWN_PACKAGE};
use hostver::shell::MockRunner;
use hostver::version::VersionQuerier;
use std::path::Path;

const TARGET: &str = "/bin/foo";

#[test]
fn nonexistent_path_runs_nothing() {
    let runner = MockRunner::new()
        .with_path("/usr/bin/rpm")
        .with_path("/usr/bin/dpkg")
        .with_stdout("/usr/bin/rpm", "foo-1\n");

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, UNKNOWN_PACKAGE);
    assert!(runner.calls().is_empty());
}

#[test]
fn dpkg_result_is_replaced_by_dpkg_query_output() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/usr/bin/dpkg")
        .with_stdout("/usr/bin/dpkg", "/bin/foo: foo-package\n")
        .with_stdout("/usr/bin/dpkg-query", "foo-package_1.0-1_amd64");

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, "foo-package_1.0-1_amd64");
    assert_eq!(
        runner.calls_to("/usr/bin/dpkg-query"),
        vec!["/usr/bin/dpkg-query -f ${Package}_${Version}_${Architecture} -W foo-package"]
    );
}

#[test]
fn dlocate_second_match_is_ignored() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/usr/bin/dlocate")
        .with_stdout("/usr/bin/dlocate", "/bin/foo: first-pkg\n/bin/foo: second-pkg\n")
        .with_stdout("/usr/bin/dpkg-query", "first-pkg_2.0_all\n");

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, "first-pkg_2.0_all");
    let queries = runner.calls_to("/usr/bin/dpkg-query");
    assert_eq!(queries.len(), 1);
    assert!(queries[0].ends_with("-W first-pkg"));
}

#[test]
fn apk_owner_prefix_is_removed() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/sbin/apk")
        .with_stdout("/sbin/apk", "/bin/foo is owned by foo-1.2.3\n");

    assert_eq!(
        PackageResolver::new(&runner).resolve(Path::new(TARGET)),
        "foo-1.2.3"
    );
}

#[test]
fn apk_owner_prefix_is_removed_exactly_once() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/sbin/apk")
        .with_stdout("/sbin/apk", "/bin/foo is owned by /bin/foo is owned by x-1\n");

    assert_eq!(
        PackageResolver::new(&runner).resolve(Path::new(TARGET)),
        "/bin/foo is owned by x-1"
    );
}

#[test]
fn absent_dlocate_falls_through_to_dpkg() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/usr/bin/dpkg")
        .with_path("/usr/bin/pacman")
        .with_stdout("/usr/bin/dpkg", "foo: /bin/foo\n")
        .with_stdout("/usr/bin/dpkg-query", "foo_1_amd64");

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, "foo_1_amd64");
    assert!(runner.calls_to("/usr/bin/dlocate").is_empty());
}

#[test]
fn unanswered_deb_family_still_tries_pacman() {
    let runner = MockRunner::new()
        .with_path(TARGET)
        .with_path("/usr/bin/dpkg")
        .with_path("/usr/bin/pacman")
        .with_failure("/usr/bin/dpkg", 1, "", "dpkg-query: no path found matching pattern /bin/foo\n")
        .with_stdout("/usr/bin/pacman", "/bin/foo is owned by foo 1.0-1\n");

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, "/bin/foo is owned by foo 1.0-1");
    assert_eq!(
        runner.calls(),
        vec!["/usr/bin/dpkg -S /bin/foo", "/usr/bin/pacman -Qo /bin/foo"]
    );
}

#[test]
fn every_family_is_probed_when_nothing_answers() {
    let mut runner = MockRunner::new().with_path(TARGET);
    for probe in PACKAGE_PROBES {
        runner = runner
            .with_path(probe.command)
            .with_failure(probe.command, 1, "", "");
    }

    let result = PackageResolver::new(&runner).resolve(Path::new(TARGET));

    assert_eq!(result, UNKNOWN_PACKAGE);
    let families: Vec<PackageFamily> = runner
        .calls()
        .iter()
        .filter_map(|call| {
            PACKAGE_PROBES
                .iter()
                .find(|p| call.starts_with(&format!("{} ", p.command)))
                .map(|p| p.family)
        })
        .collect();
    assert_eq!(
        families,
        vec![
            PackageFamily::Rpm,
            PackageFamily::Deb,
            PackageFamily::Pacman,
            PackageFamily::Gentoo,
            PackageFamily::Apk,
            PackageFamily::Pkg,
        ]
    );
}

#[test]
fn version_from_stdout() {
    let runner = MockRunner::new().with_stdout("toolX", "toolX 1.0\n");
    assert_eq!(
        VersionQuerier::new(&runner).query_version("toolX").unwrap(),
        "toolX 1.0"
    );
}

#[test]
fn version_from_stderr_ignores_stdout() {
    let runner = MockRunner::new().with_output("dnsTool", "not this\n", "dnsTool 2.1\n");
    assert_eq!(
        VersionQuerier::new(&runner)
            .query_version_from_stderr("dnsTool")
            .unwrap(),
        "dnsTool 2.1"
    );
}

#[test]
fn version_failure_carries_name_and_streams() {
    let runner = MockRunner::new().with_failure("toolY", 3, "stdout text", "stderr text");
    let msg = VersionQuerier::new(&runner)
        .query_version("toolY")
        .unwrap_err()
        .to_string();

    assert!(msg.contains("toolY"));
    assert!(msg.contains("stdout text"));
    assert!(msg.contains("stderr text"));
}
