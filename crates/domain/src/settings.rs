//! Engine settings domain model
//!
//! Defines the user configuration consumed by the substitution engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::CommandContext;
use crate::placeholder::PlaceholderName;

/// Which shell the parsed text is meant for. Decides escaping and path style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    /// GNU Bash (default).
    #[default]
    Bash,
    /// Z shell.
    Zsh,
    /// POSIX `sh` / dash.
    Sh,
    /// Windows PowerShell or PowerShell Core.
    PowerShell,
    /// Windows `cmd.exe`. Values are never escaped.
    Cmd,
    /// No shell semantics: values are inserted verbatim.
    Raw,
}

impl ShellKind {
    /// All shell kinds, in display order.
    pub const ALL: [Self; 6] = [
        Self::Bash,
        Self::Zsh,
        Self::Sh,
        Self::PowerShell,
        Self::Cmd,
        Self::Raw,
    ];

    /// Returns the configuration identifier, e.g. `powershell`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Sh => "sh",
            Self::PowerShell => "powershell",
            Self::Cmd => "cmd",
            Self::Raw => "raw",
        }
    }

    /// Parses a configuration identifier, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

/// What to do when a placeholder cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum DefaultValue {
    /// Report the placeholder's own error messages (default).
    #[default]
    ShowErrors,
    /// Use this text instead. It may contain other placeholders.
    Value(String),
}

/// A user-defined variable, referenced as `{{_name}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomVariableConfig {
    /// Name without the leading underscore.
    pub name: String,

    /// Initial value. `None` means the variable has no value yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Help text shown in listings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Settings that apply to a single command, keyed by command id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSettings {
    /// Default values for this command. They take precedence over the global ones.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_values: BTreeMap<PlaceholderName, DefaultValue>,
}

/// Persisted engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Target shell.
    #[serde(default)]
    pub shell: ShellKind,

    /// Escape special characters in values (tokens written as `{{!name}}` are exempt).
    #[serde(default = "default_escape_values")]
    pub escape_values: bool,

    /// Text wrapped around every command. Should contain `{{shell_command_content}}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_command_wrapper: Option<String>,

    /// User-defined variables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_variables: Vec<CustomVariableConfig>,

    /// Default values keyed by placeholder name, shared by every command.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_values: BTreeMap<PlaceholderName, DefaultValue>,

    /// Per-command settings keyed by command id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, CommandSettings>,
}

const fn default_escape_values() -> bool {
    true
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            escape_values: default_escape_values(),
            shell_command_wrapper: None,
            custom_variables: Vec::new(),
            default_values: BTreeMap::new(),
            commands: BTreeMap::new(),
        }
    }
}

impl EngineSettings {
    /// Builds the context for command `id`.
    ///
    /// Its defaults are the global ones overlaid with the command's own, so a
    /// command-level entry wins for the same placeholder. An unknown id gets
    /// the global defaults only.
    #[must_use]
    pub fn command_context(&self, id: impl Into<String>) -> CommandContext {
        let id = id.into();
        let mut default_values = self.default_values.clone();
        if let Some(command) = self.commands.get(&id) {
            default_values.extend(
                command
                    .default_values
                    .iter()
                    .map(|(name, default)| (name.clone(), default.clone())),
            );
        }
        CommandContext { id, default_values }
    }
}
