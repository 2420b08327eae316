//! Configuration loading and parsing for hostver.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use hostver::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "settings:\n  timeout: 10\n").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.settings.timeout, Some(10));
//! assert_eq!(config.stderr_programs, vec!["dnsname"]);
//! ```
//!
//! # Configuration File Location
//!
//! `--config <path>` wins; otherwise `~/.hostver/config.yml` is read when
//! it exists.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{HostverConfig, Settings};
