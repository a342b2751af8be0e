//! Placeholder substitution
//!
//! Resolves `{{name}}` / `{{name:arg1:arg2}}` tokens in free-form text.
//!
//! # Syntax
//!
//! - `{{name}}` - Replaced by the placeholder's value, escaped for the target shell
//! - `{{!name}}` - Replaced by the raw value, never escaped
//! - `{{name:arg}}` - Passes `arg` to the placeholder's first parameter
//!
//! Names match case-insensitively. Unknown tokens are left untouched.
//!
//! # Example
//!
//! ```ignore
//! let engine = SubstitutionEngine::new();
//! let result = engine.parse("cat {{file_path:absolute}}", &set, &shell, true, Some(&context)).await;
//! assert!(result.is_succeeded());
//! ```

mod binder;
mod engine;
mod escaping;
mod pattern;
mod resolver;
mod scanner;

#[cfg(test)]
pub(crate) mod fixtures;

pub use binder::bind_arguments;
pub use engine::SubstitutionEngine;
pub use escaping::{render_value, should_escape};
pub use pattern::TokenPattern;
pub use resolver::{resolve_value, resolve_value_sync};
pub use scanner::find_used;
