//! Shellvars Domain - Core substitution types
//!
//! This crate defines the vocabulary of the placeholder substitution engine.
//! All types here are pure Rust with no I/O dependencies.

pub mod context;
pub mod error;
pub mod outcome;
pub mod parsing;
pub mod placeholder;
pub mod settings;

pub use context::{CommandContext, EventContext, ExecutionContext};
pub use error::{DomainError, DomainResult};
pub use outcome::ValueOutcome;
pub use parsing::{ParsingResult, UNSPECIFIED_FAILURE};
pub use placeholder::{
    ArgumentSlots, BoundArguments, Occurrence, ParameterSpec, PlaceholderName, denies_escaping,
    validate_parameters,
};
pub use settings::{CommandSettings, CustomVariableConfig, DefaultValue, EngineSettings, ShellKind};
