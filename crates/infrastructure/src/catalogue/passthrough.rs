//! `{{passthrough:value}}`

use async_trait::async_trait;
use shellvars_application::ports::{PlaceholderDefinition, ValueRequest};
use shellvars_domain::{DomainResult, ParameterSpec, PlaceholderName, ValueOutcome};

const VALUE: &str = "value";

/// Returns its argument unchanged. Handy for checking how a shell escapes
/// special characters.
#[derive(Debug, Clone)]
pub struct Passthrough {
    name: PlaceholderName,
    parameters: Vec<ParameterSpec>,
}

impl Passthrough {
    /// Creates the placeholder.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name or parameter is rejected.
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("passthrough")?,
            parameters: vec![ParameterSpec::required(VALUE)?],
        })
    }
}

#[async_trait]
impl PlaceholderDefinition for Passthrough {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn help_text(&self) -> &str {
        "Gives the same value that is passed as an argument. Used for testing special characters' escaping."
    }

    fn is_always_available(&self) -> bool {
        true
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        request.argument(VALUE).map_or_else(
            || ValueOutcome::failed("passthrough: missing required parameter 'value'"),
            ValueOutcome::resolved,
        )
    }
}
