//! Placeholders about the active file

use std::path::Path;

use async_trait::async_trait;
use shellvars_application::ports::{FileSystem, PlaceholderDefinition, ValueRequest};
use shellvars_domain::{DomainResult, ParameterSpec, PlaceholderName, ValueOutcome};

use super::paths::{NO_ACTIVE_FILE, mode_parameter, render_path};

fn active_file<'a>(request: &ValueRequest<'a>) -> Result<&'a Path, ValueOutcome> {
    request
        .context()
        .and_then(|context| context.active_file.as_deref())
        .ok_or_else(|| ValueOutcome::failed(NO_ACTIVE_FILE))
}

/// `{{file_path:absolute|relative}}`: path of the active file.
#[derive(Debug, Clone)]
pub struct FilePath {
    name: PlaceholderName,
    parameters: Vec<ParameterSpec>,
}

impl FilePath {
    /// Creates the placeholder.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name or parameter is rejected.
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("file_path")?,
            parameters: vec![mode_parameter()?],
        })
    }
}

#[async_trait]
impl PlaceholderDefinition for FilePath {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn help_text(&self) -> &str {
        "Gives path to the current file, either absolute from the root of the file system, or relative from the root of the workspace."
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        match active_file(&request) {
            Ok(file) => render_path(&request, file),
            Err(failure) => failure,
        }
    }
}

/// `{{folder_name}}`: name of the active file's parent folder.
#[derive(Debug, Clone)]
pub struct FolderName {
    name: PlaceholderName,
}

impl FolderName {
    /// Creates the placeholder.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name is rejected.
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("folder_name")?,
        })
    }
}

#[async_trait]
impl PlaceholderDefinition for FolderName {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn help_text(&self) -> &str {
        "Gives the current file's parent folder name, or a dot if the folder is the workspace root. No ancestor folders are included."
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        let file = match active_file(&request) {
            Ok(file) => file,
            Err(failure) => return failure,
        };
        let folder_name = file
            .parent()
            .and_then(Path::file_name)
            .map_or_else(|| ".".to_string(), |name| name.to_string_lossy().into_owned());
        ValueOutcome::resolved(folder_name)
    }
}

/// `{{file_content}}`: full text of the active file.
#[derive(Debug, Clone)]
pub struct FileContent<F> {
    name: PlaceholderName,
    file_system: F,
}

impl<F: FileSystem> FileContent<F> {
    /// Creates the placeholder, reading through `file_system`.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the fixed name is rejected.
    pub fn new(file_system: F) -> DomainResult<Self> {
        Ok(Self {
            name: PlaceholderName::new("file_content")?,
            file_system,
        })
    }
}

#[async_trait]
impl<F: FileSystem> PlaceholderDefinition for FileContent<F> {
    fn name(&self) -> &PlaceholderName {
        &self.name
    }

    fn help_text(&self) -> &str {
        "Gives the current file's content, including YAML frontmatter."
    }

    async fn generate_value(&self, request: ValueRequest<'_>) -> ValueOutcome {
        let file = match active_file(&request) {
            Ok(file) => file,
            Err(failure) => return failure,
        };
        let Some(path) = request.context().and_then(|c| c.absolute_path(file)) else {
            return ValueOutcome::failed(
                "The workspace root is unknown, so the current file cannot be read.",
            );
        };

        match self.file_system.read_file_string(&path).await {
            Ok(content) => ValueOutcome::resolved(content),
            Err(error) => ValueOutcome::failed(format!(
                "Cannot read {}: {error}",
                file.display()
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::TokioFileSystem;
    use crate::shells::{PosixShell, PowerShell, RawShell};
    use pretty_assertions::assert_eq;
    use shellvars_application::ports::{ShellContext, VerbatimExpander};
    use shellvars_domain::{BoundArguments, ExecutionContext};
    use tempfile::tempdir;

    async fn generate(
        definition: &dyn PlaceholderDefinition,
        mode: Option<&str>,
        shell: &dyn ShellContext,
        context: &ExecutionContext,
    ) -> ValueOutcome {
        let mut arguments = BoundArguments::new();
        if let Some(mode) = mode {
            arguments.insert("mode", mode);
        }
        definition
            .generate_value(ValueRequest::new(
                &arguments,
                shell,
                Some(context),
                &VerbatimExpander,
            ))
            .await
    }

    #[tokio::test]
    async fn test_file_path_modes() {
        let context = ExecutionContext::new()
            .with_workspace_root("/vault")
            .with_active_file("notes/today.md");
        let definition = FilePath::new().unwrap();

        let relative = generate(&definition, Some("relative"), &RawShell, &context).await;
        assert_eq!(relative, ValueOutcome::resolved("notes/today.md"));

        let absolute = generate(&definition, Some("absolute"), &PosixShell::bash(), &context).await;
        assert_eq!(absolute, ValueOutcome::resolved("/vault/notes/today.md"));

        let windows = generate(&definition, Some("relative"), &PowerShell, &context).await;
        assert_eq!(windows, ValueOutcome::resolved("notes\\today.md"));
    }

    #[tokio::test]
    async fn test_file_path_without_active_file() {
        let definition = FilePath::new().unwrap();
        let outcome =
            generate(&definition, Some("relative"), &RawShell, &ExecutionContext::new()).await;
        assert_eq!(outcome, ValueOutcome::failed(NO_ACTIVE_FILE));
    }

    #[tokio::test]
    async fn test_folder_name() {
        let definition = FolderName::new().unwrap();

        let nested = ExecutionContext::new().with_active_file("projects/rust/plan.md");
        assert_eq!(
            generate(&definition, None, &RawShell, &nested).await,
            ValueOutcome::resolved("rust")
        );

        let at_root = ExecutionContext::new().with_active_file("plan.md");
        assert_eq!(
            generate(&definition, None, &RawShell, &at_root).await,
            ValueOutcome::resolved(".")
        );
    }

    #[tokio::test]
    async fn test_file_content_reads_active_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("note.md"), "# Title\nbody 🦀").unwrap();
        let context = ExecutionContext::new()
            .with_workspace_root(dir.path())
            .with_active_file("note.md");
        let definition = FileContent::new(TokioFileSystem::new()).unwrap();

        let outcome = generate(&definition, None, &RawShell, &context).await;
        assert_eq!(outcome, ValueOutcome::resolved("# Title\nbody 🦀"));
    }

    #[tokio::test]
    async fn test_file_content_missing_file() {
        let dir = tempdir().unwrap();
        let context = ExecutionContext::new()
            .with_workspace_root(dir.path())
            .with_active_file("missing.md");
        let definition = FileContent::new(TokioFileSystem::new()).unwrap();

        let outcome = generate(&definition, None, &RawShell, &context).await;
        assert!(!outcome.is_resolved());
        assert!(outcome.error_messages()[0].contains("missing.md"));
    }
}
