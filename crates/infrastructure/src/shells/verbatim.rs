//! Shells whose values are inserted as-is

use shellvars_application::ports::ShellContext;

/// Windows `cmd.exe`. It has no reliable escaping, so values are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmdShell;

impl ShellContext for CmdShell {
    fn name(&self) -> &str {
        "CMD"
    }

    fn escape_value(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// No shell at all: plain text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawShell;

impl ShellContext for RawShell {
    fn name(&self) -> &str {
        "Raw"
    }

    fn escape_value(&self, raw: &str) -> String {
        raw.to_string()
    }
}
