//! Placeholder vocabulary
//!
//! Names, parameters and located matches of `{{name:argument}}` tokens.

mod name;
mod occurrence;
mod parameter;

pub use name::{PlaceholderName, is_valid_identifier};
pub use occurrence::{ESCAPE_SUPPRESSION_PREFIX, Occurrence, denies_escaping};
pub use parameter::{ArgumentSlots, BoundArguments, ParameterSpec, validate_parameters};
