//! Application error types

use thiserror::Error;
use shellvars_domain::DomainError;

/// Application-level errors.
///
/// These signal an inconsistent placeholder catalogue or a misuse of the engine.
/// A token that merely fails to resolve is not an error here; it produces a
/// failed [`shellvars_domain::ParsingResult`].
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Two definitions share a name (names are case-insensitive).
    #[error("placeholder already registered: {0}")]
    DuplicatePlaceholder(String),

    /// The requested placeholder is not registered.
    #[error("placeholder not found: {0}")]
    NotFound(String),

    /// The token matcher for a definition could not be built.
    #[error("invalid token pattern for {name}: {source}")]
    Pattern {
        /// The placeholder whose pattern failed.
        name: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Synchronous resolution was requested for a definition that only resolves asynchronously.
    #[error("placeholder {0} cannot be resolved synchronously")]
    SyncUnsupported(String),

    /// Synchronous resolution was requested for a definition that declares parameters.
    #[error("placeholder {0} declares parameters, which synchronous parsing does not support")]
    ParametersUnsupported(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
