//! User-defined variables (`{{_name}}`)

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shellvars_application::ports::{PlaceholderDefinition, ValueRequest};
use shellvars_domain::{CustomVariableConfig, DomainResult, PlaceholderName, ValueOutcome};
use tracing::debug;

/// Prefix that separates custom variables from built-in placeholders.
pub const CUSTOM_VARIABLE_PREFIX: &str = "_";

type ChangeCallback = Arc<dyn Fn(&CustomVariable, &str, &str) + Send + Sync>;

/// A variable whose value is set at runtime, e.g. by a prompt or an output handler.
pub struct CustomVariable {
    name: PlaceholderName,
    description: String,
    value: RwLock<Option<String>>,
    on_change: Mutex<Vec<ChangeCallback>>,
}

impl CustomVariable {
    /// Creates a variable from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configured name is not a valid identifier.
    pub fn new(config: &CustomVariableConfig) -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new(format!("{CUSTOM_VARIABLE_PREFIX}{}", config.name))?,
            description: config.description.clone(),
            value: RwLock::new(config.value.clone()),
            on_change: Mutex::new(Vec::new()),
        })
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.value.read().clone()
    }

    /// Replaces the value and notifies every change callback with the new and
    /// the old value (empty if there was none).
    ///
    /// No lock is held while callbacks run, so a callback may set the value
    /// again or register further callbacks. Callbacks registered during the
    /// notification are first called on the next change.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        let old = self.value.write().replace(value.clone()).unwrap_or_default();
        debug!(variable = %self.name, "Custom variable value changed");
        let callbacks: Vec<ChangeCallback> = self.on_change.lock().clone();
        for callback in callbacks {
            callback(self, &value, &old);
        }
    }

    /// Registers a callback run after every [`CustomVariable::set_value`].
    pub fn on_change<C>(&self, callback: C)
    where
        C: Fn(&Self, &str, &str) + Send + Sync + 'static,
    {
        self.on_change.lock().push(Arc::new(callback));
    }

    fn current_outcome(&self) -> ValueOutcome {
        self.value.read().as_deref().map_or_else(
            || {
                ValueOutcome::failed(
                    "This custom variable does not have a value yet, and no default value is defined.",
                )
            },
            ValueOutcome::resolved,
        )
    }
}

impl std::fmt::Debug for CustomVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomVariable")
            .field("name", &self.name)
            .field("value", &*self.value.read())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PlaceholderDefinition for CustomVariable {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn help_text(&self) -> &str {
        &self.description
    }

    async fn generate_value(&self, _request: ValueRequest<'_>) -> ValueOutcome {
        self.current_outcome()
    }

    fn generate_value_sync(&self) -> Option<ValueOutcome> {
        Some(self.current_outcome())
    }
}
