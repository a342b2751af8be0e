//! Located token matches

use std::ops::Range;

use super::parameter::ArgumentSlots;

/// Marker that, placed right after `{{`, disables escaping for one token.
pub const ESCAPE_SUPPRESSION_PREFIX: &str = "{{!";

/// Returns true if a matched token starts with `{{!`.
#[must_use]
pub fn denies_escaping(token: &str) -> bool {
    token.starts_with(ESCAPE_SUPPRESSION_PREFIX)
}

/// One match of a placeholder's token pattern inside a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The full matched substring, e.g. `{{!file_path:absolute}}`.
    pub token: String,

    /// Byte range of the token in the text it was found in.
    pub span: Range<usize>,

    /// True when the token begins with `{{!`.
    pub escape_suppressed: bool,

    /// Positional arguments, separator already stripped.
    pub arguments: ArgumentSlots,
}

impl Occurrence {
    /// Creates an occurrence, deriving the suppression flag from the token text.
    #[must_use]
    pub fn new(token: impl Into<String>, span: Range<usize>, arguments: ArgumentSlots) -> Self {
        let token = token.into();
        let escape_suppressed = denies_escaping(&token);
        Self {
            token,
            span,
            escape_suppressed,
            arguments,
        }
    }
}
