//! Substitution engine
//!
//! Walks the placeholder set in order. For each definition it repeatedly finds
//! the next token in the current working text, resolves it, escapes it and
//! splices the result in place. The first failing token aborts the whole call
//! and nothing of the working text escapes.

use std::sync::Arc;

use async_trait::async_trait;
use shellvars_domain::{ExecutionContext, ParsingResult, ValueOutcome};
use tracing::{debug, trace};

use super::escaping::{render_value, should_escape};
use super::pattern::TokenPattern;
use super::resolver::{resolve_value, resolve_value_sync};
use crate::error::ApplicationResult;
use crate::ports::{AugmentationHooks, DefaultValueExpander, NoHooks, PlaceholderDefinition, ShellContext};
use crate::registry::PlaceholderSet;

/// Resolves `{{name:args}}` tokens in text.
#[derive(Clone)]
pub struct SubstitutionEngine {
    hooks: Arc<dyn AugmentationHooks>,
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SubstitutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstitutionEngine").finish_non_exhaustive()
    }
}

impl SubstitutionEngine {
    /// Creates an engine without augmentation hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: Arc::new(NoHooks),
        }
    }

    /// Creates an engine that calls `hooks` for every resolved occurrence,
    /// including those inside default-value expansions.
    #[must_use]
    pub fn with_hooks(hooks: Arc<dyn AugmentationHooks>) -> Self {
        Self { hooks }
    }

    /// Substitutes every token of every definition in `placeholders`.
    ///
    /// Definitions are processed in set order and occurrences left to right.
    /// Later definitions see the values inserted by earlier ones, but an
    /// inserted value is never rescanned for the definition that produced it.
    /// Values are escaped through `shell` when `escape` is set, except for
    /// tokens written as `{{!name}}`.
    pub async fn parse(
        &self,
        text: &str,
        placeholders: &PlaceholderSet,
        shell: &dyn ShellContext,
        escape: bool,
        context: Option<&ExecutionContext>,
    ) -> ParsingResult {
        debug!(
            placeholders = placeholders.len(),
            escape,
            "Starting to parse {text:?}"
        );

        let mut working = text.to_string();
        let mut resolved = 0_usize;

        for entry in placeholders.entries() {
            let definition = entry.definition().as_ref();
            let mut expander: Option<ReducedSetExpander<'_>> = None;
            let mut cursor = 0;

            while let Some(occurrence) = entry.pattern().find_at(&working, cursor) {
                let reduced = expander.get_or_insert_with(|| ReducedSetExpander {
                    engine: self,
                    placeholders: placeholders.without(entry.name()),
                    shell,
                    context,
                });

                let mut outcome =
                    resolve_value(definition, &occurrence, shell, context, &*reduced).await;
                self.hooks.before_escape(definition, &mut outcome);

                let raw = match outcome {
                    ValueOutcome::Resolved(value) => value,
                    ValueOutcome::Failed(messages) => {
                        debug!(
                            placeholder = %entry.name(),
                            token = %occurrence.token,
                            "Parsing {text:?} failed"
                        );
                        return ParsingResult::failed(text, messages);
                    }
                };

                let escaped = render_value(shell, &raw, should_escape(escape, &occurrence));
                let inserted = self.hooks.after_escape(definition, escaped, &raw);
                trace!(token = %occurrence.token, value = %inserted, "Substituted token");

                working.replace_range(occurrence.span.clone(), &inserted);
                cursor = occurrence.span.start + inserted.len();
                resolved += 1;
            }
        }

        debug!("Parsing succeeded: from {text:?} to {working:?}");
        ParsingResult::succeeded(text, working, resolved)
    }

    /// Substitutes the tokens of a single definition without suspending.
    ///
    /// The definition's synchronous value is computed once and reused for every
    /// occurrence. It is escaped unless the token is written as `{{!name}}`.
    /// There is no default-value expansion on this path.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition declares parameters, has no
    /// synchronous generator, or its pattern cannot be compiled.
    pub fn parse_one_sync(
        &self,
        text: &str,
        definition: &dyn PlaceholderDefinition,
        shell: &dyn ShellContext,
    ) -> ApplicationResult<ParsingResult> {
        let mut outcome = resolve_value_sync(definition)?;
        let pattern = TokenPattern::compile(definition)?;
        self.hooks.before_escape(definition, &mut outcome);

        let raw = match outcome {
            ValueOutcome::Resolved(value) => value,
            ValueOutcome::Failed(messages) => {
                debug!(placeholder = %definition.name(), "Synchronous parsing of {text:?} failed");
                return Ok(ParsingResult::failed(text, messages));
            }
        };

        let mut parsed = String::with_capacity(text.len());
        let mut copied_until = 0;
        let mut resolved = 0_usize;
        for occurrence in pattern.find_iter(text) {
            let escaped = render_value(shell, &raw, should_escape(true, &occurrence));
            parsed.push_str(&text[copied_until..occurrence.span.start]);
            parsed.push_str(&self.hooks.after_escape(definition, escaped, &raw));
            copied_until = occurrence.span.end;
            resolved += 1;
        }
        parsed.push_str(&text[copied_until..]);

        Ok(ParsingResult::succeeded(text, parsed, resolved))
    }
}

/// Expands default values against the set that was active, minus the
/// definition currently being resolved.
///
/// Nested expansions narrow further, so no definition can be reached again
/// through any chain of defaults.
struct ReducedSetExpander<'a> {
    engine: &'a SubstitutionEngine,
    placeholders: PlaceholderSet,
    shell: &'a dyn ShellContext,
    context: Option<&'a ExecutionContext>,
}

#[async_trait]
impl DefaultValueExpander for ReducedSetExpander<'_> {
    async fn expand(&self, raw: &str) -> ParsingResult {
        self.engine
            .parse(raw, &self.placeholders, self.shell, false, self.context)
            .await
    }
}
