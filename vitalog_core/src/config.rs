//! Configuration file support for Vitalog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/vitalog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Export artifact configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

/// Display defaults for the history view
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Range token used when the caller does not pick one; must be one of
    /// the recognized tokens (30d, 90d, 6m, 1y, all)
    #[serde(default = "default_range")]
    pub default_range: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_range: default_range(),
        }
    }
}

// Default value functions
fn default_output_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("vitalog")
}

fn default_file_name() -> String {
    "vitamin-history.csv".into()
}

fn default_range() -> String {
    "90d".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("vitalog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.file_name, "vitamin-history.csv");
        assert_eq!(config.display.default_range, "90d");
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::default();
        config.save_to(&config_path).unwrap();
        let parsed = Config::load_from(&config_path).unwrap();

        assert_eq!(config.export.file_name, parsed.export.file_name);
        assert_eq!(config.display.default_range, parsed.display.default_range);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
default_range = "all"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.default_range, "all");
        assert_eq!(config.export.file_name, "vitamin-history.csv"); // default
    }

    #[test]
    fn test_default_range_is_recognized_token() {
        let config = Config::default();
        let range: crate::HistoryRange = config.display.default_range.parse().unwrap();
        assert_eq!(range, crate::HistoryRange::Days90);
    }
}
