//! Shell context port

use std::path::Path;

/// The shell a parsed text is destined for.
///
/// The engine only calls [`ShellContext::escape_value`]. Path normalization is
/// used by path-producing placeholder definitions.
pub trait ShellContext: Send + Sync {
    /// Returns the shell's display name.
    fn name(&self) -> &str;

    /// Returns `raw` in a form that is safe to place literally inside this shell's
    /// command syntax. No guarantee is made about how the result looks.
    fn escape_value(&self, raw: &str) -> String;

    /// Renders a file system path the way this shell expects it.
    fn normalize_path(&self, path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}
