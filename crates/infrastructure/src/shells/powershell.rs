//! PowerShell

use std::path::Path;

use shellvars_application::ports::ShellContext;

/// Escapes values for Windows PowerShell and PowerShell Core.
///
/// The escape character is the backtick. Control characters use their
/// backtick escape sequences (`` `n ``, `` `r ``, `` `t ``).
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerShell;

const fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '.' | '/' | '\\' | ':' | '-')
}

impl ShellContext for PowerShell {
    fn name(&self) -> &str {
        "PowerShell"
    }

    fn escape_value(&self, raw: &str) -> String {
        let mut escaped = String::with_capacity(raw.len() * 2);
        for c in raw.chars() {
            match c {
                '\n' => escaped.push_str("`n"),
                '\r' => escaped.push_str("`r"),
                '\t' => escaped.push_str("`t"),
                c if is_safe(c) => escaped.push(c),
                c => {
                    escaped.push('`');
                    escaped.push(c);
                }
            }
        }
        escaped
    }

    fn normalize_path(&self, path: &Path) -> String {
        path.to_string_lossy().replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backtick_escaping() {
        assert_eq!(PowerShell.escape_value("a b"), "a` b");
        assert_eq!(PowerShell.escape_value("$env:PATH"), "`$env:PATH");
        assert_eq!(PowerShell.escape_value("C:\\notes\\a.md"), "C:\\notes\\a.md");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(PowerShell.escape_value("a\nb\tc"), "a`nb`tc");
    }

    #[test]
    fn test_paths_use_backslashes() {
        assert_eq!(
            PowerShell.normalize_path(Path::new("notes/daily/today.md")),
            "notes\\daily\\today.md"
        );
    }
}
