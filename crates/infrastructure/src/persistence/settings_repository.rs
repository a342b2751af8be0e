//! Engine settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/shellvars/settings.json
//! - macOS: ~/Library/Application Support/shellvars/settings.json
//! - Windows: %APPDATA%/shellvars/settings.json
//!
//! An explicit path may point at a `.json`, `.yaml` or `.yml` file.

use std::path::PathBuf;

use shellvars_domain::EngineSettings;
use tokio::fs;
use tracing::{debug, warn};

use crate::serialization::{SerializationError, SettingsFormat, to_pretty_json};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// An explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for engine settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository using the default settings location.
    #[must_use]
    pub const fn new() -> Self {
        Self { path: None }
    }

    /// Creates a repository bound to an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the path to the shellvars config directory.
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shellvars"))
    }

    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Returns the file this repository reads and writes.
    #[must_use]
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(Self::default_path)
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the default file doesn't exist. An explicit
    /// path that doesn't exist is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(&self) -> Result<EngineSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(EngineSettings::default());
        };

        if !fs::try_exists(&path).await? {
            if self.path.is_some() {
                warn!(path = %path.display(), "Settings file not found");
                return Err(SettingsError::NotFound(path));
            }
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(EngineSettings::default());
        }

        let content = fs::read(&path).await?;
        let settings = SettingsFormat::for_path(&path).decode(&content)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Saves settings to disk as pretty-printed JSON, whatever the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if no location is known or the file cannot be written.
    pub async fn save(&self, settings: &EngineSettings) -> Result<(), SettingsError> {
        let Some(path) = self.settings_path() else {
            return Err(SettingsError::NoConfigDir);
        };

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_pretty_json(settings)?;
        fs::write(&path, content).await?;

        Ok(())
    }
}
