//! Optional settings for rotfreq.
//!
//! Settings are read from `~/.rotfreq/config.toml` or from an explicit path.
//! Every key is optional; anything missing falls back to the defaults below.
//!
//! ```toml
//! [pdf]
//! y_min = 50.0
//! y_max = 760.0
//!
//! [chart]
//! width = 40
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::DEFAULT_WIDTH;

/// Default lower vertical bound for PDF fragments (drops footers).
pub const DEFAULT_Y_MIN: f64 = 50.0;

/// Default upper vertical bound for PDF fragments (drops headers).
pub const DEFAULT_Y_MAX: f64 = 760.0;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Vertical band used to exclude headers and footers from PDF pages.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PdfSettings {
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ChartSettings {
    /// Maximum bar width in characters.
    pub width: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

/// All settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub pdf: PdfSettings,
    pub chart: ChartSettings,
}

impl Settings {
    /// Loads settings from the default location.
    ///
    /// Returns the defaults if the file doesn't exist or there is no home
    /// directory to look in.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(ConfigError::NoConfigDir) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads settings from `path`, which must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from `path` when given, otherwise from the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Path of the default settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

/// Returns `~/.rotfreq`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".rotfreq"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pdf.y_min, DEFAULT_Y_MIN);
        assert_eq!(settings.pdf.y_max, DEFAULT_Y_MAX);
        assert_eq!(settings.chart.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("[pdf]\ny_max = 700.0\n").unwrap();
        assert_eq!(settings.pdf.y_min, DEFAULT_Y_MIN);
        assert_eq!(settings.pdf.y_max, 700.0);
        assert_eq!(settings.chart, ChartSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[pdf]\ny_min = 10.0\ny_max = 20.0\n\n[chart]\nwidth = 12\n").unwrap();

        let settings = Settings::resolve(Some(path.as_path())).unwrap();
        assert_eq!(settings.pdf, PdfSettings { y_min: 10.0, y_max: 20.0 });
        assert_eq!(settings.chart.width, 12);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = Settings::load_from(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Settings::from_toml("[chart]\nwidth = \"wide\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParseError(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        assert!(toml_str.contains("[pdf]"));
        assert!(toml_str.contains("[chart]"));

        let loaded = Settings::from_toml(&toml_str).unwrap();
        assert_eq!(loaded, settings);
    }
}
