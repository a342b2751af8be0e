//! Token pattern compiler
//!
//! Builds the matcher for one placeholder definition:
//!
//! ```text
//! {{ [!] name [:arg1] [:arg2] ... }}
//! ```
//!
//! The name matches case-insensitively. Every parameter contributes an optional
//! `:argument` group; whether a missing required argument is acceptable is decided
//! later, at resolution time. Argument text never contains a raw newline or the
//! `}}` close marker, and arguments other than the last one cannot contain `:`.

use regex::Regex;
use shellvars_domain::{Occurrence, ParameterSpec, PlaceholderName};

use super::binder::extract_slots;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::PlaceholderDefinition;

const OPEN_MARKER: &str = r"\{\{!?";
const CLOSE_MARKER: &str = r"\}\}";
const INNER_ARGUMENT: &str = r"(?:[^:}\r\n]|\}[^:}\r\n])+";
const LAST_ARGUMENT: &str = r"(?:[^}\r\n]|\}[^}\r\n])+";

/// A compiled matcher for one placeholder's tokens.
///
/// Holds no scan position: every lookup states where to start, so one pattern
/// can serve any number of concurrent scans.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
    parameter_count: usize,
}

impl TokenPattern {
    /// Compiles the matcher for a definition.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Pattern`] if the regex cannot be built.
    pub fn compile(definition: &dyn PlaceholderDefinition) -> ApplicationResult<Self> {
        Self::from_parts(definition.name(), definition.parameters())
    }

    /// Compiles the matcher for a name and parameter list.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Pattern`] if the regex cannot be built.
    pub fn from_parts(name: &PlaceholderName, parameters: &[ParameterSpec]) -> ApplicationResult<Self> {
        let source = pattern_source(name, parameters.len());
        let regex = Regex::new(&source).map_err(|source| ApplicationError::Pattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            parameter_count: parameters.len(),
        })
    }

    /// Returns the regex source, for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if `text` contains at least one token.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Finds the first token starting at or after byte offset `start`.
    #[must_use]
    pub fn find_at(&self, text: &str, start: usize) -> Option<Occurrence> {
        let captures = self.regex.captures_at(text, start)?;
        let whole = captures.get(0)?;
        Some(Occurrence::new(
            whole.as_str(),
            whole.range(),
            extract_slots(&captures, self.parameter_count),
        ))
    }

    /// Iterates over all non-overlapping tokens, left to right.
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Occurrence> + 't {
        self.regex.captures_iter(text).filter_map(move |captures| {
            let whole = captures.get(0)?;
            Some(Occurrence::new(
                whole.as_str(),
                whole.range(),
                extract_slots(&captures, self.parameter_count),
            ))
        })
    }
}

fn pattern_source(name: &PlaceholderName, parameter_count: usize) -> String {
    let mut source = String::from("(?i)");
    source.push_str(OPEN_MARKER);
    source.push_str(&regex::escape(name.as_str()));
    for index in 0..parameter_count {
        let argument = if index + 1 == parameter_count {
            LAST_ARGUMENT
        } else {
            INNER_ARGUMENT
        };
        source.push_str("(:");
        source.push_str(argument);
        source.push_str(")?");
    }
    source.push_str(CLOSE_MARKER);
    source
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pattern(name: &str, params: &[&str]) -> TokenPattern {
        let specs: Vec<ParameterSpec> = params
            .iter()
            .map(|p| ParameterSpec::optional(*p).unwrap())
            .collect();
        TokenPattern::from_parts(&PlaceholderName::new(name).unwrap(), &specs).unwrap()
    }

    #[test]
    fn test_matches_plain_token() {
        let p = pattern("title", &[]);
        let found = p.find_at("echo {{title}} done", 0).unwrap();
        assert_eq!(found.token, "{{title}}");
        assert_eq!(found.span, 5..14);
        assert!(!found.escape_suppressed);
        assert!(found.arguments.is_empty());
    }

    #[test]
    fn test_case_insensitive_name() {
        let p = pattern("title", &[]);
        assert!(p.is_match("{{TITLE}}"));
        assert!(p.is_match("{{Title}}"));
        assert!(!p.is_match("{{titles}}"));
        assert!(!p.is_match("{title}"));
    }

    #[test]
    fn test_suppression_marker() {
        let p = pattern("title", &[]);
        let found = p.find_at("{{!title}}", 0).unwrap();
        assert!(found.escape_suppressed);
        assert_eq!(found.token, "{{!title}}");
    }

    #[test]
    fn test_argument_extraction_strips_separator() {
        let p = pattern("event_folder_path", &["mode"]);
        let found = p.find_at("{{event_folder_path:absolute}}", 0).unwrap();
        assert_eq!(found.arguments, vec![Some("absolute".to_string())]);
    }

    #[test]
    fn test_omitted_argument_is_absent_slot() {
        let p = pattern("event_folder_path", &["mode"]);
        let found = p.find_at("{{event_folder_path}}", 0).unwrap();
        assert_eq!(found.arguments, vec![None]);
    }

    #[test]
    fn test_multiple_parameters() {
        let p = pattern("date", &["format", "zone"]);
        let found = p.find_at("{{date:YYYY:utc}}", 0).unwrap();
        assert_eq!(
            found.arguments,
            vec![Some("YYYY".to_string()), Some("utc".to_string())]
        );

        let found = p.find_at("{{date:YYYY}}", 0).unwrap();
        assert_eq!(found.arguments, vec![Some("YYYY".to_string()), None]);
    }

    #[test]
    fn test_last_argument_may_contain_colons_and_single_braces() {
        let p = pattern("passthrough", &["value"]);
        let found = p.find_at("{{passthrough:C:\\a}b}}", 0).unwrap();
        assert_eq!(found.arguments, vec![Some("C:\\a}b".to_string())]);
    }

    #[test]
    fn test_argument_stops_at_close_marker() {
        let p = pattern("passthrough", &["value"]);
        let found: Vec<_> = p.find_iter("{{passthrough:a}} {{passthrough:b}}}").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].arguments, vec![Some("a".to_string())]);
        assert_eq!(found[1].token, "{{passthrough:b}}");
    }

    #[test]
    fn test_argument_cannot_span_lines() {
        let p = pattern("passthrough", &["value"]);
        assert!(!p.is_match("{{passthrough:a\nb}}"));
    }

    #[test]
    fn test_unicode_surroundings_and_arguments() {
        let p = pattern("passthrough", &["value"]);
        let text = "😀 {{passthrough:ääkkönen 🦀}} 𝄞";
        let found = p.find_at(text, 0).unwrap();
        assert_eq!(found.arguments, vec![Some("ääkkönen 🦀".to_string())]);
        assert_eq!(&text[found.span.clone()], "{{passthrough:ääkkönen 🦀}}");
    }

    #[test]
    fn test_find_at_respects_start_offset() {
        let p = pattern("x", &[]);
        let text = "{{x}} {{x}}";
        let first = p.find_at(text, 0).unwrap();
        let second = p.find_at(text, first.span.end).unwrap();
        assert_eq!(second.span, 6..11);
        assert!(p.find_at(text, second.span.end).is_none());
    }

    #[test]
    fn test_name_is_regex_escaped() {
        let p = pattern("a_b", &[]);
        assert!(p.is_match("{{a_b}}"));
        assert!(!p.is_match("{{axb}}"));
    }
}
