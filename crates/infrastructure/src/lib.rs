//! Shellvars Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: shells, the built-in placeholder
//! catalogue, file system access and settings persistence.

pub mod catalogue;
pub mod persistence;
pub mod serialization;
pub mod shells;

pub use catalogue::{
    Catalogue, CustomVariable, EventFolderPath, EventOldFileName, FileContent, FilePath,
    FolderName, Passthrough, builtin_definitions,
};
pub use persistence::{SettingsError, SettingsRepository, TokioFileSystem};
pub use serialization::{SerializationError, SettingsFormat, to_pretty_json};
pub use shells::{CmdShell, PosixShell, PowerShell, RawShell, shell_for};
