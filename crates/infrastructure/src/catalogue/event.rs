//! Placeholders that read the triggering event

use std::path::Path;

use async_trait::async_trait;
use shellvars_application::ports::{PlaceholderDefinition, ValueRequest};
use shellvars_domain::{DomainResult, EventContext, ParameterSpec, PlaceholderName, ValueOutcome};

use super::paths::{mode_parameter, render_path};

fn unsupported_event(name: &PlaceholderName, supported: &[&str]) -> ValueOutcome {
    ValueOutcome::failed(format!(
        "{} is only available in the following events: {}.",
        name.token(false),
        supported.join(", ")
    ))
}

/// `{{event_folder_path:absolute|relative}}`: the folder a menu event targets.
///
/// For the file menu that is the selected file's parent folder; for the
/// folder menu it is the selected folder.
#[derive(Debug, Clone)]
pub struct EventFolderPath {
    name: PlaceholderName,
    parameters: Vec<ParameterSpec>,
}

impl EventFolderPath {
    const SUPPORTED: [&'static str; 2] = ["File menu", "Folder menu"];

    /// Creates the placeholder.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name or parameter is rejected.
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("event_folder_path")?,
            parameters: vec![mode_parameter()?],
        })
    }
}

#[async_trait]
impl PlaceholderDefinition for EventFolderPath {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn help_text(&self) -> &str {
        "File menu: gives path to the selected file's parent folder. Folder menu: gives path to the selected folder."
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        let folder = match request.event() {
            Some(EventContext::FileMenu { file }) => file.parent().unwrap_or(Path::new("")),
            Some(EventContext::FolderMenu { folder }) => folder.as_path(),
            _ => return unsupported_event(&self.name, &Self::SUPPORTED),
        };
        render_path(&request, folder)
    }
}

/// `{{event_old_file_name}}`: a renamed file's previous name, extension included.
#[derive(Debug, Clone)]
pub struct EventOldFileName {
    name: PlaceholderName,
}

impl EventOldFileName {
    const SUPPORTED: [&'static str; 1] = ["File renamed"];

    /// Creates the placeholder.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name is rejected.
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("event_old_file_name")?,
        })
    }
}

#[async_trait]
impl PlaceholderDefinition for EventOldFileName {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn help_text(&self) -> &str {
        "Gives the renamed file's old name with a file extension."
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        match request.event() {
            Some(EventContext::FileRenamed { old_path, .. }) => old_path
                .file_name()
                .map_or_else(
                    || ValueOutcome::failed("The renamed file's old path has no file name."),
                    |name| ValueOutcome::resolved(name.to_string_lossy()),
                ),
            _ => unsupported_event(&self.name, &Self::SUPPORTED),
        }
    }
}
