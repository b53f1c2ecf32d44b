// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Session configuration loaded from TOML.
//!
//! ```toml
//! [table]
//! force_version = 0x380804
//!
//! [mailbox]
//! family = "Vermeer"
//! probe_mode = "handshake"
//! refresh_after_tune = true
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use smu_mailbox::{Family, ProbeMode};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ZENSMU_CONFIG";
/// Configuration file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/zensmu.toml";

/// Failures while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// The family override names no known codename.
    #[error("unknown silicon family {0:?}")]
    UnknownFamily(String),
}

/// Effective session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Table layout to decode with instead of the driver-reported one.
    pub force_version: Option<u32>,
    /// Silicon family to route commands for instead of the detected one.
    pub family: Option<Family>,
    /// How operation support is probed.
    pub probe_mode: ProbeMode,
    /// Re-read the table after a tune to report the value in effect.
    pub refresh_after_tune: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force_version: None,
            family: None,
            probe_mode: ProbeMode::Handshake,
            refresh_after_tune: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default)]
    table: TableSection,
    #[serde(default)]
    mailbox: MailboxSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableSection {
    force_version: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MailboxSection {
    family: Option<String>,
    probe_mode: Option<ProbeSetting>,
    refresh_after_tune: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ProbeSetting {
    Handshake,
    RouteOnly,
}

impl From<ProbeSetting> for ProbeMode {
    fn from(value: ProbeSetting) -> Self {
        match value {
            ProbeSetting::Handshake => ProbeMode::Handshake,
            ProbeSetting::RouteOnly => ProbeMode::RouteOnly,
        }
    }
}

impl Config {
    /// Parses configuration TOML; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml = toml::from_str(text)?;
        let defaults = Self::default();
        let family = parsed
            .mailbox
            .family
            .map(|name| name.parse::<Family>().map_err(|_| ConfigError::UnknownFamily(name)))
            .transpose()?;
        Ok(Self {
            force_version: parsed.table.force_version,
            family,
            probe_mode: parsed
                .mailbox
                .probe_mode
                .map_or(defaults.probe_mode, ProbeMode::from),
            refresh_after_tune: parsed
                .mailbox
                .refresh_after_tune
                .unwrap_or(defaults.refresh_after_tune),
        })
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Path of the active configuration file.
pub fn active_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the active configuration, falling back to defaults when the file is
/// missing or invalid.
pub fn load_active() -> Config {
    let path = active_path();
    match Config::load(&path) {
        Ok(config) => {
            debug!("loaded configuration from {}", path.display());
            config
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            debug!("no configuration at {}, using defaults", path.display());
            Config::default()
        }
        Err(err) => {
            warn!("using default configuration: {err}");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        assert_eq!(Config::from_toml_str("").expect("empty toml"), Config::default());
    }

    #[test]
    fn hex_version_and_family_are_parsed() {
        let config = Config::from_toml_str(
            "[table]\nforce_version = 0x370003\n[mailbox]\nfamily = \"lucienne\"\nprobe_mode = \"route-only\"\n",
        )
        .expect("valid toml");
        assert_eq!(config.force_version, Some(0x0037_0003));
        assert_eq!(config.family, Some(Family::Lucienne));
        assert_eq!(config.probe_mode, ProbeMode::RouteOnly);
        assert!(config.refresh_after_tune);
    }

    #[test]
    fn unknown_keys_and_families_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[table]\nversion = 1\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[mailbox]\nfamily = \"Zen9\"\n"),
            Err(ConfigError::UnknownFamily(name)) if name == "Zen9"
        ));
    }
}
