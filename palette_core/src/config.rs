//! Probe configuration via TOML files.
//!
//! Parsing goes through serde raw structs so missing keys fall back to
//! defaults instead of failing the load.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which ordered view of the palette a listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    Alphabetical,
    Hue,
    Lightness,
}

impl FromStr for ListOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "alphabetical" => Ok(ListOrder::Alphabetical),
            "hue" => Ok(ListOrder::Hue),
            "lightness" => Ok(ListOrder::Lightness),
            other => Err(ConfigError::Parse(format!(
                "order must be alphabetical, hue, or lightness, found {:?}",
                other
            ))),
        }
    }
}

/// Configuration for the probe binary.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeConfig {
    /// Ordering used by the `list` command.
    pub order: ListOrder,
    /// Whether palette operations are appended to the JSONL logs.
    pub log_operations: bool,
    /// Directory the JSONL logs are written under.
    pub log_dir: PathBuf,
    /// ΔE94 above which a `closest` match is reported as poor.
    pub closest_max_delta: f32,
}

impl ProbeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let probe = raw.probe.unwrap_or_default();
        let defaults = ProbeConfig::default();
        let order = match probe.order {
            Some(order) => order.parse()?,
            None => defaults.order,
        };
        let closest_max_delta = probe.closest_max_delta.unwrap_or(defaults.closest_max_delta);
        if !(closest_max_delta > 0.0) {
            return Err(ConfigError::Parse(
                "closest_max_delta must be positive".to_string(),
            ));
        }
        Ok(ProbeConfig {
            order,
            log_operations: probe.log_operations.unwrap_or(defaults.log_operations),
            log_dir: probe.log_dir.map(PathBuf::from).unwrap_or(defaults.log_dir),
            closest_max_delta,
        })
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            order: ListOrder::Alphabetical,
            log_operations: true,
            log_dir: PathBuf::from("logs"),
            closest_max_delta: 10.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    probe: Option<RawProbe>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProbe {
    order: Option<String>,
    log_operations: Option<bool>,
    log_dir: Option<String>,
    closest_max_delta: Option<f32>,
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read config file: {}", err),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ProbeConfig::from_toml("").unwrap();
        assert_eq!(config.order, ListOrder::Alphabetical);
        assert!(config.log_operations);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.closest_max_delta, 10.0);
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config = ProbeConfig::from_toml("[probe]\norder = \"hue\"\n").unwrap();
        assert_eq!(config.order, ListOrder::Hue);
        assert!(config.log_operations);
    }

    #[test]
    fn full_section_parses() {
        let toml_str = r#"
            [probe]
            order = "lightness"
            log_operations = false
            log_dir = "var/palette"
            closest_max_delta = 4.5
        "#;
        let config = ProbeConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.order, ListOrder::Lightness);
        assert!(!config.log_operations);
        assert_eq!(config.log_dir, PathBuf::from("var/palette"));
        assert_eq!(config.closest_max_delta, 4.5);
    }

    #[test]
    fn bad_order_is_rejected() {
        let err = ProbeConfig::from_toml("[probe]\norder = \"rainbow\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn nonpositive_delta_is_rejected() {
        let err = ProbeConfig::from_toml("[probe]\nclosest_max_delta = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
