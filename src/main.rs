//! hostver CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hostver::cli::{Cli, CommandDispatcher};
use hostver::config::load_config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hostver=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hostver=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Map a command's exit code onto a process status; out-of-range codes
/// become 1.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hostver starting with args: {:?}", cli);

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Some(timeout) = cli.timeout {
        config.settings.timeout = Some(timeout);
    }

    let dispatcher = CommandDispatcher::new(config);
    let mut stdout = std::io::stdout();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(exit_status(result.exit_code)),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_keeps_valid_codes() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(2), 2);
        assert_eq!(exit_status(255), 255);
    }

    #[test]
    fn exit_status_does_not_wrap() {
        assert_eq!(exit_status(256), 1);
        assert_eq!(exit_status(-1), 1);
    }
}
