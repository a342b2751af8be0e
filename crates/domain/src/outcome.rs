//! Result of resolving a single token

use crate::parsing::ParsingResult;

/// The value produced for one occurrence: either a string or the reasons it
/// could not be produced. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOutcome {
    /// The placeholder produced a value.
    Resolved(String),

    /// The placeholder could not produce a value. Messages are shown to the user as-is.
    Failed(Vec<String>),
}

impl ValueOutcome {
    /// Creates a resolved outcome.
    #[must_use]
    pub fn resolved(value: impl Into<String>) -> Self {
        Self::Resolved(value.into())
    }

    /// Creates a failed outcome with a single message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(vec![message.into()])
    }

    /// Returns true if a value was produced.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the value, if resolved.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns the error messages; empty when resolved.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        match self {
            Self::Resolved(_) => &[],
            Self::Failed(messages) => messages,
        }
    }
}

impl From<ParsingResult> for ValueOutcome {
    fn from(result: ParsingResult) -> Self {
        match result.into_result() {
            Ok(parsed) => Self::Resolved(parsed),
            Err(messages) => Self::Failed(messages),
        }
    }
}
