//! Configuration schema definitions for hostver.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::version::{DEFAULT_STDERR_PROGRAMS, DEFAULT_VERSION_FLAG};

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostverConfig {
    /// Global settings
    pub settings: Settings,

    /// Programs whose `--version` output goes to stderr
    pub stderr_programs: Vec<String>,
}

impl Default for HostverConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            stderr_programs: DEFAULT_STDERR_PROGRAMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Settings that apply to every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Kill child processes after this many seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Flag passed to programs to ask for their version
    #[serde(default = "default_version_flag")]
    pub version_flag: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: None,
            version_flag: default_version_flag(),
        }
    }
}

impl Settings {
    /// The configured timeout as a duration.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

fn default_version_flag() -> String {
    DEFAULT_VERSION_FLAG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: HostverConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, HostverConfig::default());
        assert_eq!(config.settings.version_flag, "--version");
        assert_eq!(config.stderr_programs, vec!["dnsname"]);
        assert!(config.settings.timeout.is_none());
    }

    #[test]
    fn parses_all_fields() {
        let yaml = r#"
settings:
  timeout: 5
  version_flag: -V
stderr_programs:
  - dnsname
  - java
"#;
        let config: HostverConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.timeout, Some(5));
        assert_eq!(
            config.settings.timeout_duration(),
            Some(Duration::from_secs(5))
        );
        assert_eq!(config.settings.version_flag, "-V");
        assert_eq!(config.stderr_programs, vec!["dnsname", "java"]);
    }

    #[test]
    fn partial_settings_keep_default_flag() {
        let config: HostverConfig = serde_yaml::from_str("settings:\n  timeout: 2\n").unwrap();
        assert_eq!(config.settings.version_flag, "--version");
        assert_eq!(config.stderr_programs, vec!["dnsname"]);
    }

    #[test]
    fn serializes_without_unset_timeout() {
        let yaml = serde_yaml::to_string(&HostverConfig::default()).unwrap();
        assert!(!yaml.contains("timeout"));
        assert!(yaml.contains("version_flag"));
    }
}
