//! Value resolution for single occurrences
//!
//! The asynchronous path binds arguments, asks the definition for a value, and
//! falls back to the command's configured default value when the definition
//! cannot produce one. The synchronous path only works for definitions without
//! parameters that expose a context-free generator.

use shellvars_domain::{DefaultValue, ExecutionContext, Occurrence, ValueOutcome};
use tracing::debug;

use super::binder::bind_arguments;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{DefaultValueExpander, PlaceholderDefinition, ShellContext, ValueRequest};

/// Resolves one occurrence of `definition`.
///
/// A missing required argument or a disallowed argument yields `Failed`
/// without calling the definition. When the definition itself fails and the
/// command configures a [`DefaultValue::Value`] for it, that text is expanded
/// through `expander` and its outcome replaces the failure.
pub async fn resolve_value(
    definition: &dyn PlaceholderDefinition,
    occurrence: &Occurrence,
    shell: &dyn ShellContext,
    context: Option<&ExecutionContext>,
    expander: &dyn DefaultValueExpander,
) -> ValueOutcome {
    let name = definition.name();
    let arguments =
        match bind_arguments(name.as_str(), definition.parameters(), &occurrence.arguments) {
            Ok(arguments) => arguments,
            Err(problems) => return ValueOutcome::Failed(problems),
        };

    let outcome = definition
        .generate_value(ValueRequest::new(&arguments, shell, context, expander))
        .await;
    if outcome.is_resolved() || definition.is_always_available() {
        return outcome;
    }

    match context.and_then(|context| context.default_value_for(name)) {
        Some(DefaultValue::Value(raw)) => {
            debug!(
                placeholder = %name,
                command = context.and_then(|c| c.command.as_ref()).map_or("", |c| c.id.as_str()),
                "Falling back to configured default value"
            );
            expander.expand(raw).await.into()
        }
        Some(DefaultValue::ShowErrors) | None => outcome,
    }
}

/// Resolves `definition` through its synchronous generator.
///
/// # Errors
///
/// Returns [`ApplicationError::ParametersUnsupported`] if the definition
/// declares parameters, and [`ApplicationError::SyncUnsupported`] if it has no
/// synchronous generator.
pub fn resolve_value_sync(definition: &dyn PlaceholderDefinition) -> ApplicationResult<ValueOutcome> {
    if !definition.parameters().is_empty() {
        return Err(ApplicationError::ParametersUnsupported(
            definition.name().to_string(),
        ));
    }
    definition
        .generate_value_sync()
        .ok_or_else(|| ApplicationError::SyncUnsupported(definition.name().to_string()))
}
