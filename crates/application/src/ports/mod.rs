//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the substitution engine and the host
//! application. Each port is a trait implemented by adapters in the
//! infrastructure layer (or by the host itself).

mod file_system;
mod hooks;
mod placeholder;
mod shell;

pub use file_system::{FileSystem, FileSystemError};
pub use hooks::{AugmentationHooks, NoHooks};
pub use placeholder::{DefaultValueExpander, PlaceholderDefinition, ValueRequest, VerbatimExpander};
pub use shell::ShellContext;
