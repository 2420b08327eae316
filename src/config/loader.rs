//! Configuration file discovery and loading.

use crate::config::schema::HostverConfig;
use crate::error::{HostverError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the user's config: `~/.hostver/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".hostver").join("config.yml"))
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<HostverConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostverError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HostverError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into HostverConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<HostverConfig> {
    if content.trim().is_empty() {
        return Ok(HostverConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| HostverError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the default
/// user config is loaded if present, otherwise defaults are used.
pub fn load_config(config_override: Option<&Path>) -> Result<HostverConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(HostverConfig::default()),
    }
}
