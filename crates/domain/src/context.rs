//! Execution context handed to placeholder definitions
//!
//! The engine passes these through untouched. Only the definitions that need
//! to know "which command" or "which event" look inside.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::placeholder::PlaceholderName;
use crate::settings::DefaultValue;

/// Everything known about the situation a text is being parsed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Root folder of the workspace (vault). Relative paths are relative to it.
    pub workspace_root: Option<PathBuf>,

    /// The file currently open, relative to the workspace root.
    pub active_file: Option<PathBuf>,

    /// The command whose text is being parsed.
    pub command: Option<CommandContext>,

    /// The event that triggered the command, if any.
    pub event: Option<EventContext>,
}

impl ExecutionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace root.
    #[must_use]
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// Sets the active file (relative to the workspace root).
    #[must_use]
    pub fn with_active_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.active_file = Some(file.into());
        self
    }

    /// Sets the command context.
    #[must_use]
    pub fn with_command(mut self, command: CommandContext) -> Self {
        self.command = Some(command);
        self
    }

    /// Sets the triggering event.
    #[must_use]
    pub fn with_event(mut self, event: EventContext) -> Self {
        self.event = Some(event);
        self
    }

    /// Returns the default value configured for `placeholder` by the current command.
    #[must_use]
    pub fn default_value_for(&self, placeholder: &PlaceholderName) -> Option<&DefaultValue> {
        self.command
            .as_ref()
            .and_then(|command| command.default_value_for(placeholder))
    }

    /// Joins a workspace-relative path onto the workspace root.
    #[must_use]
    pub fn absolute_path(&self, relative: &Path) -> Option<PathBuf> {
        self.workspace_root.as_ref().map(|root| root.join(relative))
    }
}

/// Identifies the command being executed and carries its per-placeholder defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Command identifier.
    pub id: String,

    /// Default values keyed by placeholder, used when a placeholder cannot produce a value.
    pub default_values: BTreeMap<PlaceholderName, DefaultValue>,
}

impl CommandContext {
    /// Creates a command context without defaults.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_values: BTreeMap::new(),
        }
    }

    /// Configures a default value for one placeholder.
    #[must_use]
    pub fn with_default(mut self, placeholder: PlaceholderName, default: DefaultValue) -> Self {
        self.default_values.insert(placeholder, default);
        self
    }

    /// Returns the default configured for `placeholder`.
    #[must_use]
    pub fn default_value_for(&self, placeholder: &PlaceholderName) -> Option<&DefaultValue> {
        self.default_values.get(placeholder)
    }
}

/// The event that triggered a command. Paths are workspace-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventContext {
    /// A file's context menu was used.
    FileMenu {
        /// The selected file.
        file: PathBuf,
    },

    /// A folder's context menu was used.
    FolderMenu {
        /// The selected folder.
        folder: PathBuf,
    },

    /// A file was renamed or moved.
    FileRenamed {
        /// Path before the rename.
        old_path: PathBuf,
        /// Path after the rename.
        new_path: PathBuf,
    },

    /// A folder was renamed or moved.
    FolderRenamed {
        /// Path before the rename.
        old_path: PathBuf,
        /// Path after the rename.
        new_path: PathBuf,
    },

    /// The host finished starting up.
    Startup,

    /// The host is quitting.
    Quit,

    /// A periodic timer fired.
    EveryNSeconds {
        /// Timer interval.
        seconds: u64,
    },
}

impl EventContext {
    /// Returns a human-readable event name, used in error messages.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FileMenu { .. } => "File menu",
            Self::FolderMenu { .. } => "Folder menu",
            Self::FileRenamed { .. } => "File renamed",
            Self::FolderRenamed { .. } => "Folder renamed",
            Self::Startup => "Startup",
            Self::Quit => "Quit",
            Self::EveryNSeconds { .. } => "Every n seconds",
        }
    }
}
