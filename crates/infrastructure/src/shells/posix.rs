//! POSIX-family shells (bash, zsh, sh)

use shellvars_application::ports::ShellContext;

/// Escapes values for `bash`, `zsh` and `sh`.
///
/// Every character outside `[A-Za-z0-9_,./-]` gets a preceding backslash.
/// Newlines become `"\n"` inside double quotes, because a backslash followed
/// by a newline is a line continuation.
#[derive(Debug, Clone)]
pub struct PosixShell {
    name: &'static str,
}

impl PosixShell {
    /// GNU Bash.
    #[must_use]
    pub const fn bash() -> Self {
        Self { name: "Bash" }
    }

    /// Z shell.
    #[must_use]
    pub const fn zsh() -> Self {
        Self { name: "Zsh" }
    }

    /// POSIX `sh` / dash.
    #[must_use]
    pub const fn sh() -> Self {
        Self { name: "Dash" }
    }
}

impl Default for PosixShell {
    fn default() -> Self {
        Self::bash()
    }
}

const fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '.' | '/' | '-')
}

impl ShellContext for PosixShell {
    fn name(&self) -> &str {
        self.name
    }

    fn escape_value(&self, raw: &str) -> String {
        let mut escaped = String::with_capacity(raw.len() * 2);
        for c in raw.chars() {
            match c {
                '\n' => escaped.push_str("\"\n\""),
                c if is_safe(c) => escaped.push(c),
                c => {
                    escaped.push('\\');
                    escaped.push(c);
                }
            }
        }
        escaped
    }
}
