//! Shell context adapters
//!
//! One [`ShellContext`] per supported [`ShellKind`].

mod posix;
mod powershell;
mod verbatim;

use std::sync::Arc;

use shellvars_application::ports::ShellContext;
use shellvars_domain::ShellKind;

pub use posix::PosixShell;
pub use powershell::PowerShell;
pub use verbatim::{CmdShell, RawShell};

/// Returns the shell context for `kind`.
#[must_use]
pub fn shell_for(kind: ShellKind) -> Arc<dyn ShellContext> {
    match kind {
        ShellKind::Bash => Arc::new(PosixShell::bash()),
        ShellKind::Zsh => Arc::new(PosixShell::zsh()),
        ShellKind::Sh => Arc::new(PosixShell::sh()),
        ShellKind::PowerShell => Arc::new(PowerShell),
        ShellKind::Cmd => Arc::new(CmdShell),
        ShellKind::Raw => Arc::new(RawShell),
    }
}
