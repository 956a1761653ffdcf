//! Server configuration
//!
//! Looked up in order, first readable and parseable file wins:
//! 1. `--config <path>` / `MATERIAL_MCP_CONFIG`
//! 2. `./material-mcp.toml`
//! 3. `$XDG_CONFIG_HOME/material-mcp/config.toml`
//! 4. `~/.material-mcp.toml`
//! 5. Built-in defaults
//!
//! Discovery runs before tracing is installed (the file may set the log
//! level), so skipped candidates are returned in [`ConfigDiscovery`] for the
//! caller to log.

use std::path::{Path, PathBuf};

use mcp_common::{LogFormat, TracingOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contrast::AA_NORMAL;
use crate::theme::{OutputFormat, DEFAULT_THEME_NAME};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file {0} does not exist")]
    NotFound(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    #[serde(default)]
    pub theme: ThemeDefaults,
    #[serde(default)]
    pub accessibility: AccessibilityDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for `generate_theme` arguments the caller omits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefaults {
    #[serde(default = "default_theme_name")]
    pub default_name: String,
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Defaults for `find_accessible_color`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityDefaults {
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,
    #[serde(default = "default_true")]
    pub prefer_darker: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_target_ratio() -> f64 {
    AA_NORMAL
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            default_name: default_theme_name(),
            dark_mode: true,
            output_format: OutputFormat::default(),
        }
    }
}

impl Default for AccessibilityDefaults {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
            prefer_darker: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            level: self.level.clone(),
            format: self.format,
        }
    }
}

/// Outcome of [`MaterialConfig::discover`]
#[derive(Debug)]
pub struct ConfigDiscovery {
    pub config: MaterialConfig,
    /// File the config came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Candidates that existed (or were named explicitly) but were unusable
    pub skipped: Vec<ConfigError>,
}

impl MaterialConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Standard locations after the explicit path, in priority order
    pub fn standard_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("material-mcp.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("material-mcp").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".material-mcp.toml"));
        }

        paths
    }

    /// Resolve configuration from `explicit` and then the standard paths
    pub fn discover(explicit: Option<&Path>) -> ConfigDiscovery {
        Self::discover_in(explicit, Self::standard_paths())
    }

    fn discover_in(explicit: Option<&Path>, standard: Vec<PathBuf>) -> ConfigDiscovery {
        let mut skipped = Vec::new();

        if let Some(path) = explicit {
            match Self::from_file(path) {
                Ok(config) => {
                    return ConfigDiscovery {
                        config,
                        source: Some(path.to_path_buf()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        for path in standard {
            match Self::from_file(&path) {
                Ok(config) => {
                    return ConfigDiscovery {
                        config,
                        source: Some(path),
                        skipped,
                    }
                }
                // Absent standard locations are the normal case
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => skipped.push(e),
            }
        }

        ConfigDiscovery {
            config: Self::default(),
            source: None,
            skipped,
        }
    }
}
