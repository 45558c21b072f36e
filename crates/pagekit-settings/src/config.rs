//! Configuration and settings management for PageKit
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Export (pdftk program, default output file name)
//! - Editor (last-page removal policy)
//! - Thumbnails (render sizes)
//! - Logging (default level)

use pagekit_editor::LastPagePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "pagekit";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// pdftk program name or path
    pub pdftk_path: PathBuf,
    /// File name suggested for the merged output
    pub output_file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pdftk_path: PathBuf::from("pdftk"),
            output_file_name: "merged.pdf".to_string(),
        }
    }
}

/// Editing behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// What removing the last remaining page does
    pub last_page_policy: LastPagePolicy,
}

/// Thumbnail render sizes, in pixels along the longer edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    /// Page thumbnails in the editor
    pub size: u32,
    /// Title page thumbnail in the document list
    pub title_size: u32,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            size: 200,
            title_size: 50,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// File format of a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(other.to_string())),
            None => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportSettings,
    pub editor: EditorSettings,
    pub thumbnails: ThumbnailSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/pagekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        path.push(APP_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;
        let content = self.render(format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        Ok(match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        })
    }

    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.export.pdftk_path.as_os_str().is_empty() {
            return Err(SettingsError::invalid(
                "export.pdftk_path",
                "must not be empty",
            ));
        }

        if self.export.output_file_name.trim().is_empty() {
            return Err(SettingsError::invalid(
                "export.output_file_name",
                "must not be empty",
            ));
        }

        if self.thumbnails.size == 0 {
            return Err(SettingsError::invalid("thumbnails.size", "must be > 0"));
        }

        if self.thumbnails.title_size == 0 {
            return Err(SettingsError::invalid("thumbnails.title_size", "must be > 0"));
        }

        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }

        Ok(())
    }
}
