//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while constructing placeholder definitions.
///
/// These describe a malformed catalogue, never bad user input: text that merely
/// fails to resolve is reported through [`crate::ValueOutcome::Failed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A placeholder name is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid placeholder name: {0:?}")]
    InvalidPlaceholderName(String),

    /// A parameter name is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid parameter name: {0:?}")]
    InvalidParameterName(String),

    /// The same parameter name is declared twice for one placeholder.
    #[error("placeholder {placeholder} declares parameter {parameter} more than once")]
    DuplicateParameter {
        /// The placeholder declaring the parameters.
        placeholder: String,
        /// The repeated parameter name.
        parameter: String,
    },

    /// A parameter declares a closed value set that contains no values.
    #[error("parameter {0} declares an empty set of allowed values")]
    EmptyAllowedValues(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
