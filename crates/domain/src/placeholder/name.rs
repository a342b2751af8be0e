//! Placeholder identity

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Returns true if `name` is a non-empty run of ASCII letters, digits and underscores.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The unique, case-insensitive name of a placeholder definition.
///
/// Keeps the spelling it was created with for display, but compares, orders and
/// hashes by the lowercase form, so `File_Path` and `file_path` are the same identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceholderName {
    display: String,
    key: String,
}

impl PlaceholderName {
    /// Creates a validated placeholder name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPlaceholderName`] if the name is empty or not ASCII
    /// alphanumeric/underscore.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let display = name.into();
        if !is_valid_identifier(&display) {
            return Err(DomainError::InvalidPlaceholderName(display));
        }
        let key = display.to_ascii_lowercase();
        Ok(Self { display, key })
    }

    /// Returns the name as it was spelled at construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Returns the lowercase comparison key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if `other` names this placeholder, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.key.eq_ignore_ascii_case(other)
    }

    /// Renders the token form, e.g. `{{file_path}}` or `{{!file_path}}`.
    #[must_use]
    pub fn token(&self, unescaped: bool) -> String {
        if unescaped {
            format!("{{{{!{}}}}}", self.display)
        } else {
            format!("{{{{{}}}}}", self.display)
        }
    }
}

impl PartialEq for PlaceholderName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PlaceholderName {}

impl Hash for PlaceholderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for PlaceholderName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlaceholderName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for PlaceholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl TryFrom<String> for PlaceholderName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlaceholderName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceholderName> for String {
    fn from(value: PlaceholderName) -> Self {
        value.display
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_names() {
        assert!(PlaceholderName::new("file_path").is_ok());
        assert!(PlaceholderName::new("_custom1").is_ok());
        assert!(PlaceholderName::new("Title").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(PlaceholderName::new("").is_err());
        assert!(PlaceholderName::new("file path").is_err());
        assert!(PlaceholderName::new("file:path").is_err());
        assert!(PlaceholderName::new("päivä").is_err());
        assert_eq!(
            PlaceholderName::new("a}}b"),
            Err(DomainError::InvalidPlaceholderName("a}}b".to_string()))
        );
    }

    #[test]
    fn test_identity_is_case_insensitive() {
        let lower = PlaceholderName::new("file_path").unwrap();
        let mixed = PlaceholderName::new("File_Path").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(mixed.as_str(), "File_Path");
        assert_eq!(mixed.key(), "file_path");

        let mut set = HashSet::new();
        set.insert(lower);
        assert!(!set.insert(mixed));
    }

    #[test]
    fn test_matches_ignores_case() {
        let name = PlaceholderName::new("folder_name").unwrap();
        assert!(name.matches("FOLDER_NAME"));
        assert!(!name.matches("folder"));
    }

    #[test]
    fn test_token_rendering() {
        let name = PlaceholderName::new("title").unwrap();
        assert_eq!(name.token(false), "{{title}}");
        assert_eq!(name.token(true), "{{!title}}");
    }

    #[test]
    fn test_serde_rejects_invalid_name() {
        let parsed: Result<PlaceholderName, _> = serde_json::from_str("\"bad name\"");
        assert!(parsed.is_err());

        let parsed: PlaceholderName = serde_json::from_str("\"ok_name\"").unwrap();
        assert_eq!(parsed.as_str(), "ok_name");
    }
}
