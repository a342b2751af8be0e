//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shellvars_domain::ShellKind;

/// Resolve `{{placeholder}}` tokens in command text
#[derive(Parser, Debug)]
#[command(name = "shellvars")]
#[command(version)]
#[command(about = "Resolve {{placeholder}} tokens in command text")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (.json, .yaml or .yml). Defaults to the user config directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Substitute every placeholder in TEXT and print the result
    Parse(ParseArgs),

    /// List the placeholders referenced by the given texts
    Used {
        /// Texts to scan
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },

    /// List every available placeholder
    List,
}

/// Arguments of `shellvars parse`.
#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// Command text containing placeholders
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Target shell (overrides settings)
    #[arg(long, value_enum)]
    pub shell: Option<ShellArg>,

    /// Insert values without escaping
    #[arg(long)]
    pub no_escape: bool,

    /// Wrapper text containing {{shell_command_content}} (overrides settings)
    #[arg(long)]
    pub wrapper: Option<String>,

    /// Workspace root. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Active file, relative to the workspace root
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Identifier of the command being prepared. Selects its `commands.<id>` defaults
    #[arg(long, default_value = "cli")]
    pub command_id: String,

    /// Set a custom variable, e.g. `--var project=demo`
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub variables: Vec<(String, String)>,

    /// Print the full parsing result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Shell names accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellArg {
    /// GNU Bash
    Bash,
    /// Z shell
    Zsh,
    /// POSIX sh
    Sh,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Windows cmd.exe (no escaping)
    Cmd,
    /// Plain text (no escaping)
    Raw,
}

impl From<ShellArg> for ShellKind {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => Self::Bash,
            ShellArg::Zsh => Self::Zsh,
            ShellArg::Sh => Self::Sh,
            ShellArg::PowerShell => Self::PowerShell,
            ShellArg::Cmd => Self::Cmd,
            ShellArg::Raw => Self::Raw,
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))
}
