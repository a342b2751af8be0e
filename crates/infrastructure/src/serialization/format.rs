//! Settings file formats and JSON output

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure to encode or decode settings or results.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Invalid JSON, or a value JSON cannot represent.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The syntax a settings file is written in, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsFormat {
    /// `.json`, and anything without a YAML extension.
    #[default]
    Json,
    /// `.yaml` or `.yml`.
    Yaml,
}

impl SettingsFormat {
    /// Picks the format for `path`. Extensions match in any case.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Decodes `bytes` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or does not fit `T`.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, SerializationError> {
        Ok(match self {
            Self::Json => serde_json::from_slice(bytes)?,
            Self::Yaml => serde_yaml::from_slice(bytes)?,
        })
    }
}

/// Renders `value` as pretty JSON with a trailing newline.
///
/// Map keys keep the order of the source type, so `BTreeMap`-backed settings
/// always render the same way.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
