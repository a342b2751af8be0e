//! Built-in placeholder catalogue
//!
//! Concrete [`PlaceholderDefinition`]s and the [`Catalogue`] that loads them,
//! together with the user's custom variables, into a registry.

mod custom;
mod event;
mod file;
mod passthrough;
mod paths;

use std::sync::Arc;

use shellvars_application::ports::{FileSystem, PlaceholderDefinition};
use shellvars_application::use_cases::ShellCommandContent;
use shellvars_application::{ApplicationResult, PlaceholderRegistry, PlaceholderSet};
use shellvars_domain::{CustomVariableConfig, DomainResult, EngineSettings};
use tracing::debug;

pub use custom::{CUSTOM_VARIABLE_PREFIX, CustomVariable};
pub use event::{EventFolderPath, EventOldFileName};
pub use file::{FileContent, FilePath, FolderName};
pub use passthrough::Passthrough;
pub use paths::PathMode;

/// Returns every built-in placeholder, in the order the engine processes them.
///
/// # Errors
///
/// Returns a domain error if a built-in name or parameter is rejected.
pub fn builtin_definitions<F>(file_system: F) -> DomainResult<Vec<Arc<dyn PlaceholderDefinition>>>
where
    F: FileSystem + 'static,
{
    let definitions: Vec<Arc<dyn PlaceholderDefinition>> = vec![
        Arc::new(EventFolderPath::new()?),
        Arc::new(EventOldFileName::new()?),
        Arc::new(FileContent::new(file_system)?),
        Arc::new(FilePath::new()?),
        Arc::new(FolderName::new()?),
        Arc::new(Passthrough::new()?),
        Arc::new(ShellCommandContent::new(String::new())?),
    ];
    Ok(definitions)
}

/// The placeholders available to the engine: built-ins plus custom variables.
#[derive(Debug)]
pub struct Catalogue {
    registry: PlaceholderRegistry,
    custom_variables: Vec<Arc<CustomVariable>>,
}

impl Catalogue {
    /// Loads the built-ins and the custom variables configured in `settings`.
    ///
    /// # Errors
    ///
    /// Fails if a custom variable has an invalid name or clashes with another
    /// placeholder.
    pub fn load<F>(settings: &EngineSettings, file_system: F) -> ApplicationResult<Self>
    where
        F: FileSystem + 'static,
    {
        let mut catalogue = Self {
            registry: PlaceholderRegistry::with_set(PlaceholderSet::from_definitions(
                builtin_definitions(file_system)?,
            )?),
            custom_variables: Vec::new(),
        };
        for config in &settings.custom_variables {
            catalogue.add_custom_variable(config)?;
        }
        debug!(placeholders = catalogue.registry.len(), "Loaded placeholder catalogue");
        Ok(catalogue)
    }

    /// Registers a new custom variable and returns it.
    ///
    /// # Errors
    ///
    /// Fails if the name is invalid or already taken.
    pub fn add_custom_variable(&mut self, config: &CustomVariableConfig) -> ApplicationResult<Arc<CustomVariable>> {
        let variable = Arc::new(CustomVariable::new(config)?);
        self.registry.register(Arc::clone(&variable) as Arc<dyn PlaceholderDefinition>)?;
        self.custom_variables.push(Arc::clone(&variable));
        Ok(variable)
    }

    /// Looks up a custom variable by name, with or without the leading underscore.
    #[must_use]
    pub fn custom_variable(&self, name: &str) -> Option<&Arc<CustomVariable>> {
        let prefixed = if name.starts_with(CUSTOM_VARIABLE_PREFIX) {
            name.to_string()
        } else {
            format!("{CUSTOM_VARIABLE_PREFIX}{name}")
        };
        self.custom_variables
            .iter()
            .find(|variable| variable.name().matches(&prefixed))
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &PlaceholderRegistry {
        &self.registry
    }

    /// Returns an immutable snapshot for one parse.
    #[must_use]
    pub fn snapshot(&self) -> PlaceholderSet {
        self.registry.snapshot()
    }
}
