//! PageKit Settings Crate
//!
//! Handles application configuration: defaults, validation, and JSON/TOML
//! persistence in the platform config directory.

pub mod config;
pub mod error;

pub use config::{
    Config, ConfigFormat, EditorSettings, ExportSettings, LoggingSettings, ThumbnailSettings,
    APP_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
