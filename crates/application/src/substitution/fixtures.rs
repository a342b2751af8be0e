//! Test doubles shared by the substitution tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shellvars_domain::{ParameterSpec, PlaceholderName, ValueOutcome};

use crate::ports::{PlaceholderDefinition, ShellContext, ValueRequest};

/// Wraps every escaped value in single quotes, so escaping is visible in assertions.
pub struct QuoteShell;

impl ShellContext for QuoteShell {
    fn name(&self) -> &str {
        "quote"
    }

    fn escape_value(&self, raw: &str) -> String {
        format!("'{raw}'")
    }
}

/// A definition with a fixed outcome that counts how often it was asked.
///
/// With parameters declared, a resolved value has the bound arguments appended
/// as `value[param=arg,...]`.
pub struct StaticDefinition {
    name: PlaceholderName,
    parameters: Vec<ParameterSpec>,
    outcome: ValueOutcome,
    sync: bool,
    always_available: bool,
    calls: AtomicUsize,
}

impl StaticDefinition {
    pub fn resolving(name: &str, value: &str) -> Self {
        Self::with_outcome(name, ValueOutcome::resolved(value))
    }

    pub fn failing(name: &str, message: &str) -> Self {
        Self::with_outcome(name, ValueOutcome::failed(message))
    }

    pub fn failing_with(name: &str, messages: Vec<&str>) -> Self {
        Self::with_outcome(
            name,
            ValueOutcome::Failed(messages.into_iter().map(String::from).collect()),
        )
    }

    fn with_outcome(name: &str, outcome: ValueOutcome) -> Self {
        Self {
            name: PlaceholderName::new(name).expect("valid test name"),
            parameters: Vec::new(),
            outcome,
            sync: false,
            always_available: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterSpec>) -> Self {
        self.parameters = parameters;
        self
    }

    pub const fn with_sync(mut self) -> Self {
        self.sync = true;
        self
    }

    pub const fn always_available(mut self) -> Self {
        self.always_available = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceholderDefinition for StaticDefinition {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn is_always_available(&self) -> bool {
        self.always_available
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            ValueOutcome::Resolved(value) if !request.arguments().is_empty() => {
                let bound: Vec<String> = request
                    .arguments()
                    .iter()
                    .map(|(parameter, argument)| format!("{parameter}={argument}"))
                    .collect();
                ValueOutcome::resolved(format!("{value}[{}]", bound.join(",")))
            }
            outcome => outcome.clone(),
        }
    }

    fn generate_value_sync(&self) -> Option<ValueOutcome> {
        self.sync.then(|| self.outcome.clone())
    }
}
