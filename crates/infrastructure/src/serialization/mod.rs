//! Settings decoding and JSON output for the CLI.

mod format;

pub use format::{SerializationError, SettingsFormat, to_pretty_json};
