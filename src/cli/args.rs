//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// hostver - Find which package installed a program and what version it reports.
#[derive(Debug, Parser)]
#[command(name = "hostver")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.hostver/config.yml)
    #[arg(short, long, global = true, env = "HOSTVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Kill package-manager and program invocations after this many seconds
    #[arg(short, long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show which OS package owns a file
    Package(PackageArgs),

    /// Show the version a program reports about itself
    Version(VersionArgs),

    /// Show location, package, and version for programs
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `package` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PackageArgs {
    /// Full path of the file to look up
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VersionArgs {
    /// Program name or path
    pub program: String,

    /// Read the version from stderr instead of stdout
    #[arg(long)]
    pub stderr: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Program names or paths
    #[arg(required = true)]
    pub programs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
