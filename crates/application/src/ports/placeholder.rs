//! Placeholder definition port
//!
//! A placeholder definition is the named, parameterized capability that knows
//! how to produce a value for its `{{name:args}}` tokens. Concrete kinds (file
//! paths, event fields, custom variables) live in the infrastructure layer.

use async_trait::async_trait;
use shellvars_domain::{
    BoundArguments, CommandContext, EventContext, ExecutionContext, ParameterSpec, ParsingResult,
    PlaceholderName, ValueOutcome,
};

use super::shell::ShellContext;

/// Expands a configured default value, substituting any tokens it contains.
///
/// The engine supplies an implementation bound to the current placeholder set
/// minus the definition being resolved.
#[async_trait]
pub trait DefaultValueExpander: Send + Sync {
    /// Runs token substitution over `raw` with escaping disabled.
    async fn expand(&self, raw: &str) -> ParsingResult;
}

/// An expander that returns its input untouched.
///
/// Useful when a definition is resolved outside the engine and there is no
/// placeholder set to expand against.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimExpander;

#[async_trait]
impl DefaultValueExpander for VerbatimExpander {
    async fn expand(&self, raw: &str) -> ParsingResult {
        ParsingResult::succeeded(raw, raw, 0)
    }
}

/// Everything a definition may consult while producing one value.
#[derive(Clone, Copy)]
pub struct ValueRequest<'a> {
    arguments: &'a BoundArguments,
    shell: &'a dyn ShellContext,
    context: Option<&'a ExecutionContext>,
    expander: &'a dyn DefaultValueExpander,
}

impl<'a> ValueRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub fn new(
        arguments: &'a BoundArguments,
        shell: &'a dyn ShellContext,
        context: Option<&'a ExecutionContext>,
        expander: &'a dyn DefaultValueExpander,
    ) -> Self {
        Self {
            arguments,
            shell,
            context,
            expander,
        }
    }

    /// Returns the bound arguments.
    #[must_use]
    pub const fn arguments(&self) -> &'a BoundArguments {
        self.arguments
    }

    /// Returns the argument bound to `parameter`.
    #[must_use]
    pub fn argument(&self, parameter: &str) -> Option<&'a str> {
        self.arguments.get(parameter)
    }

    /// Returns the target shell.
    #[must_use]
    pub fn shell(&self) -> &'a dyn ShellContext {
        self.shell
    }

    /// Returns the execution context, if the caller supplied one.
    #[must_use]
    pub const fn context(&self) -> Option<&'a ExecutionContext> {
        self.context
    }

    /// Returns the command context, if any.
    #[must_use]
    pub fn command(&self) -> Option<&'a CommandContext> {
        self.context.and_then(|context| context.command.as_ref())
    }

    /// Returns the triggering event, if any.
    #[must_use]
    pub fn event(&self) -> Option<&'a EventContext> {
        self.context.and_then(|context| context.event.as_ref())
    }

    /// Expands `raw` through the default-value expander.
    pub async fn expand(&self, raw: &str) -> ValueOutcome {
        self.expander.expand(raw).await.into()
    }
}

impl std::fmt::Debug for ValueRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueRequest")
            .field("arguments", self.arguments)
            .field("shell", &self.shell.name())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// A named placeholder that can produce values for its tokens.
#[async_trait]
pub trait PlaceholderDefinition: Send + Sync {
    /// Returns the unique, case-insensitive name.
    fn name(&self) -> &PlaceholderName;

    /// Returns the ordered parameter list. Empty by default.
    fn parameters(&self) -> &[ParameterSpec] {
        &[]
    }

    /// Returns a short description for listings.
    fn help_text(&self) -> &str {
        ""
    }

    /// Returns true if the placeholder can always produce a value. Such
    /// placeholders never consult configured default values.
    fn is_always_available(&self) -> bool {
        false
    }

    /// Produces a value. May perform I/O and consult the request's context.
    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome;

    /// Produces a value without I/O or context. `None` means the placeholder
    /// has no synchronous form.
    fn generate_value_sync(&self) -> Option<ValueOutcome> {
        None
    }
}
