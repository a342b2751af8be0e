//! Escape decision for one occurrence

use shellvars_domain::Occurrence;

use crate::ports::ShellContext;

/// Returns true if the value for `occurrence` must be escaped.
#[must_use]
pub const fn should_escape(escape_enabled: bool, occurrence: &Occurrence) -> bool {
    escape_enabled && !occurrence.escape_suppressed
}

/// Escapes `raw` through the shell when `escape` is set, otherwise copies it.
#[must_use]
pub fn render_value(shell: &dyn ShellContext, raw: &str, escape: bool) -> String {
    if escape {
        shell.escape_value(raw)
    } else {
        raw.to_string()
    }
}
