//! Library integration tests.

use hostver::HostverError;

#[test]
fn error_types_are_public() {
    let err = HostverError::ConfigNotFound {
        path: "/etc/hostver.yml".into(),
    };
    assert!(err.to_string().contains("/etc/hostver.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> hostver::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use hostver::cli::{Cli, Commands};

    let cli = Cli::parse_from(["hostver", "info", "conmon", "--json"]);

    if let Commands::Info(args) = cli.command {
        assert!(args.json);
        assert_eq!(args.programs, vec!["conmon"]);
    } else {
        panic!("Expected Info command");
    }
}

#[test]
fn package_for_missing_path_is_unknown() {
    let package = hostver::package_for(std::path::Path::new("/nonexistent/hostver/tool"));
    assert_eq!(package, hostver::UNKNOWN_PACKAGE);
}

#[test]
fn program_version_of_missing_program_is_an_error() {
    let err = hostver::program_version("hostver-missing-program-12345").unwrap_err();
    assert!(matches!(err, HostverError::VersionQueryFailed { .. }));
    assert!(err.to_string().contains("hostver-missing-program-12345"));
}

#[cfg(unix)]
#[test]
fn system_runner_captures_real_streams() {
    use hostver::shell::{CommandRunner, SystemRunner};

    let result = SystemRunner::new()
        .run("sh", &["-c".into(), "echo toolX 1.0; echo warn >&2".into()])
        .unwrap();

    assert!(result.success);
    assert_eq!(result.stdout, "toolX 1.0\n");
    assert_eq!(result.stderr, "warn\n");
}
