//! Prepare command use case
//!
//! Turns a command template into the final command text: optionally wraps it
//! into the configured wrapper, then substitutes every placeholder.

use std::sync::Arc;

use async_trait::async_trait;
use shellvars_domain::{DomainResult, ExecutionContext, ParsingResult, PlaceholderName, ValueOutcome};
use tracing::warn;

use crate::error::ApplicationResult;
use crate::ports::{PlaceholderDefinition, ShellContext, ValueRequest};
use crate::registry::PlaceholderSet;
use crate::substitution::{SubstitutionEngine, find_used};

/// Name of the token a wrapper uses to embed the command.
pub const SHELL_COMMAND_CONTENT: &str = "shell_command_content";

/// The `{{shell_command_content}}` placeholder: the command being wrapped.
#[derive(Debug, Clone)]
pub struct ShellCommandContent {
    name: PlaceholderName,
    content: String,
}

impl ShellCommandContent {
    /// Creates the placeholder for `content`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the name is a fixed valid identifier.
    pub fn new(content: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new(SHELL_COMMAND_CONTENT)?,
            content: content.into(),
        })
    }

    /// Returns the wrapped command text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[async_trait]
impl PlaceholderDefinition for ShellCommandContent {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn help_text(&self) -> &str {
        "The command being wrapped. Only meaningful inside a command wrapper."
    }

    fn is_always_available(&self) -> bool {
        true
    }

    async fn generate_value(&self, _request: ValueRequest<'_>) -> ValueOutcome {
        ValueOutcome::resolved(self.content.as_str())
    }

    fn generate_value_sync(&self) -> Option<ValueOutcome> {
        Some(ValueOutcome::resolved(self.content.as_str()))
    }
}

/// Something worth telling the user that does not stop preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparationWarning {
    /// The wrapper never references `{{shell_command_content}}`, so the
    /// command itself is dropped.
    WrapperMissingContent {
        /// The offending wrapper.
        wrapper: String,
    },
}

impl std::fmt::Display for PreparationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrapperMissingContent { wrapper } => write!(
                f,
                "The command wrapper {wrapper:?} does not contain {{{{{SHELL_COMMAND_CONTENT}}}}}, so the command will not be executed."
            ),
        }
    }
}

/// Input for [`PrepareCommand::execute`].
#[derive(Clone, Copy)]
pub struct PrepareCommandInput<'a> {
    /// The command template.
    pub command: &'a str,
    /// Optional wrapper containing `{{shell_command_content}}`.
    pub wrapper: Option<&'a str>,
    /// Placeholders available to the command.
    pub placeholders: &'a PlaceholderSet,
    /// Target shell.
    pub shell: &'a dyn ShellContext,
    /// Whether to escape values.
    pub escape: bool,
    /// Execution context, if any.
    pub context: Option<&'a ExecutionContext>,
}

/// Output of [`PrepareCommand::execute`].
#[derive(Debug, Clone)]
pub struct PrepareCommandOutput {
    /// The command after wrapping, before placeholder substitution. If
    /// wrapping itself fails this is the unsubstituted wrapper.
    pub wrapped: String,
    /// The substitution result for `wrapped`.
    pub result: ParsingResult,
    /// Advisory warnings.
    pub warnings: Vec<PreparationWarning>,
}

/// Wraps and parses a command.
#[derive(Debug, Clone, Default)]
pub struct PrepareCommand {
    engine: SubstitutionEngine,
}

impl PrepareCommand {
    /// Creates a new `PrepareCommand` use case.
    #[must_use]
    pub const fn new(engine: SubstitutionEngine) -> Self {
        Self { engine }
    }

    /// Executes the use case.
    ///
    /// The wrapper is substituted synchronously first, so the command's own
    /// tokens are parsed together with the wrapper's. Write the wrapper token
    /// as `{{!shell_command_content}}` to keep the command's tokens live when
    /// escaping is on. `{{shell_command_content}}` is not available to the
    /// final parse.
    ///
    /// # Errors
    ///
    /// Propagates errors from synchronous wrapping. These only occur for a
    /// malformed `shell_command_content` definition.
    pub async fn execute(&self, input: PrepareCommandInput<'_>) -> ApplicationResult<PrepareCommandOutput> {
        let mut warnings = Vec::new();

        let wrapped = match input.wrapper {
            Some(wrapper) => {
                let content = ShellCommandContent::new(input.command)?;
                let probe = PlaceholderSet::from_definitions([
                    Arc::new(content.clone()) as Arc<dyn PlaceholderDefinition>
                ])?;
                if find_used([wrapper], &probe).is_empty() {
                    warn!(wrapper, "Command wrapper does not use {{{{{SHELL_COMMAND_CONTENT}}}}}");
                    warnings.push(PreparationWarning::WrapperMissingContent {
                        wrapper: wrapper.to_string(),
                    });
                }

                let result = self.engine.parse_one_sync(wrapper, &content, input.shell)?;
                match result.into_result() {
                    Ok(wrapped) => wrapped,
                    Err(messages) => {
                        return Ok(PrepareCommandOutput {
                            wrapped: wrapper.to_string(),
                            result: ParsingResult::failed(wrapper, messages),
                            warnings,
                        });
                    }
                }
            }
            None => input.command.to_string(),
        };

        let placeholders = input
            .placeholders
            .without(&PlaceholderName::new(SHELL_COMMAND_CONTENT)?);
        let result = self
            .engine
            .parse(&wrapped, &placeholders, input.shell, input.escape, input.context)
            .await;

        Ok(PrepareCommandOutput {
            wrapped,
            result,
            warnings,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::AugmentationHooks;
    use crate::substitution::fixtures::{QuoteShell, StaticDefinition};
    use pretty_assertions::assert_eq;

    fn catalogue() -> PlaceholderSet {
        PlaceholderSet::from_definitions([
            Arc::new(StaticDefinition::resolving("title", "My Note")) as Arc<dyn PlaceholderDefinition>,
            Arc::new(ShellCommandContent::new("").unwrap()),
        ])
        .unwrap()
    }

    fn input<'a>(command: &'a str, wrapper: Option<&'a str>, set: &'a PlaceholderSet) -> PrepareCommandInput<'a> {
        PrepareCommandInput {
            command,
            wrapper,
            placeholders: set,
            shell: &QuoteShell,
            escape: true,
            context: None,
        }
    }

    #[tokio::test]
    async fn test_without_wrapper() {
        let set = catalogue();
        let output = PrepareCommand::default()
            .execute(input("echo {{title}}", None, &set))
            .await
            .unwrap();
        assert_eq!(output.wrapped, "echo {{title}}");
        assert_eq!(output.result.parsed_content(), Some("echo 'My Note'"));
        assert!(output.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_raw_wrapper_keeps_command_tokens_live() {
        let set = catalogue();
        let output = PrepareCommand::default()
            .execute(input(
                "echo {{title}}",
                Some("ssh host {{!shell_command_content}}"),
                &set,
            ))
            .await
            .unwrap();
        assert_eq!(output.wrapped, "ssh host echo {{title}}");
        assert_eq!(output.result.parsed_content(), Some("ssh host echo 'My Note'"));
    }

    #[tokio::test]
    async fn test_escaped_wrapper_quotes_command() {
        let set = catalogue();
        let output = PrepareCommand::default()
            .execute(input("ls -la", Some("sh -c {{shell_command_content}}"), &set))
            .await
            .unwrap();
        assert_eq!(output.result.parsed_content(), Some("sh -c 'ls -la'"));
    }

    #[tokio::test]
    async fn test_wrapper_without_content_token_warns() {
        let set = catalogue();
        let output = PrepareCommand::default()
            .execute(input("ls", Some("echo nothing"), &set))
            .await
            .unwrap();
        assert_eq!(
            output.warnings,
            vec![PreparationWarning::WrapperMissingContent {
                wrapper: "echo nothing".to_string()
            }]
        );
        assert_eq!(output.result.parsed_content(), Some("echo nothing"));
    }

    #[tokio::test]
    async fn test_content_token_not_available_to_final_parse() {
        let set = catalogue();
        let output = PrepareCommand::default()
            .execute(input("echo {{shell_command_content}}", None, &set))
            .await
            .unwrap();
        assert_eq!(
            output.result.parsed_content(),
            Some("echo {{shell_command_content}}")
        );
    }

    #[test]
    fn test_warning_message() {
        let warning = PreparationWarning::WrapperMissingContent {
            wrapper: "x".to_string(),
        };
        assert!(warning.to_string().contains("{{shell_command_content}}"));
    }

    struct RejectWrappedCommand;

    impl AugmentationHooks for RejectWrappedCommand {
        fn before_escape(&self, definition: &dyn PlaceholderDefinition, outcome: &mut ValueOutcome) {
            if definition.name().as_str() == SHELL_COMMAND_CONTENT {
                *outcome = ValueOutcome::failed("wrapping refused");
            }
        }
    }

    #[tokio::test]
    async fn test_failed_wrapping_reports_the_wrapper() {
        let set = catalogue();
        let engine = SubstitutionEngine::with_hooks(Arc::new(RejectWrappedCommand));
        let output = PrepareCommand::new(engine)
            .execute(input("echo {{title}}", Some("ssh host {{!shell_command_content}}"), &set))
            .await
            .unwrap();

        assert_eq!(output.wrapped, "ssh host {{!shell_command_content}}");
        assert!(!output.result.is_succeeded());
        assert_eq!(output.result.original_content(), "ssh host {{!shell_command_content}}");
        assert_eq!(output.result.error_messages(), &["wrapping refused".to_string()]);
    }
}
