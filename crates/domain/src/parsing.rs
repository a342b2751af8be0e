//! Outcome of one top-level substitution call

use serde::Serialize;

/// Message used when a failure arrives without any explanation of its own.
pub const UNSPECIFIED_FAILURE: &str = "A placeholder could not be resolved.";

/// The result of substituting every token in a text.
///
/// Fields are private so that `succeeded`, the presence of `parsed_content` and
/// the emptiness of `error_messages` always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsingResult {
    original_content: String,
    parsed_content: Option<String>,
    succeeded: bool,
    error_messages: Vec<String>,
    count_resolved_tokens: usize,
}

impl ParsingResult {
    /// Creates a successful result.
    #[must_use]
    pub fn succeeded(
        original_content: impl Into<String>,
        parsed_content: impl Into<String>,
        count_resolved_tokens: usize,
    ) -> Self {
        Self {
            original_content: original_content.into(),
            parsed_content: Some(parsed_content.into()),
            succeeded: true,
            error_messages: Vec::new(),
            count_resolved_tokens,
        }
    }

    /// Creates a failed result carrying the first failing token's messages.
    ///
    /// An empty message list is replaced by [`UNSPECIFIED_FAILURE`].
    #[must_use]
    pub fn failed(original_content: impl Into<String>, mut error_messages: Vec<String>) -> Self {
        if error_messages.is_empty() {
            error_messages.push(UNSPECIFIED_FAILURE.to_string());
        }
        Self {
            original_content: original_content.into(),
            parsed_content: None,
            succeeded: false,
            error_messages,
            count_resolved_tokens: 0,
        }
    }

    /// Returns the text as it was given.
    #[must_use]
    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// Returns the substituted text; `None` when parsing failed.
    #[must_use]
    pub fn parsed_content(&self) -> Option<&str> {
        self.parsed_content.as_deref()
    }

    /// Returns whether every token resolved.
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    /// Returns the failure messages; empty on success.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Returns how many tokens were substituted.
    #[must_use]
    pub const fn count_resolved_tokens(&self) -> usize {
        self.count_resolved_tokens
    }

    /// Converts into the substituted text or the failure messages.
    ///
    /// # Errors
    ///
    /// Returns the error messages if parsing failed.
    pub fn into_result(self) -> Result<String, Vec<String>> {
        match self.parsed_content {
            Some(parsed) => Ok(parsed),
            None => Err(self.error_messages),
        }
    }
}
