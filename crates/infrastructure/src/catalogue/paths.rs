//! Path rendering shared by path-producing placeholders

use std::path::Path;

use shellvars_application::ports::ValueRequest;
use shellvars_domain::{DomainResult, ParameterSpec, ValueOutcome};

/// Name of the parameter selecting absolute or relative output.
pub const MODE: &str = "mode";

/// How a path is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// From the root of the file system.
    Absolute,
    /// From the root of the workspace.
    Relative,
}

impl PathMode {
    /// Parses a `mode` argument.
    #[must_use]
    pub fn from_argument(argument: &str) -> Option<Self> {
        if argument.eq_ignore_ascii_case("absolute") {
            Some(Self::Absolute)
        } else if argument.eq_ignore_ascii_case("relative") {
            Some(Self::Relative)
        } else {
            None
        }
    }
}

/// The required `mode` parameter, restricted to `absolute` and `relative`.
pub fn mode_parameter() -> DomainResult<ParameterSpec> {
    ParameterSpec::required(MODE)?.with_allowed_values(["absolute", "relative"])
}

/// Renders a workspace-relative path for the request's shell.
///
/// An empty relative path (the workspace root itself) is rendered as `.`.
pub fn render_path(request: &ValueRequest<'_>, relative: &Path) -> ValueOutcome {
    let Some(mode) = request.argument(MODE).and_then(PathMode::from_argument) else {
        return ValueOutcome::failed("The mode argument must be either 'absolute' or 'relative'.");
    };

    match mode {
        PathMode::Relative if relative.as_os_str().is_empty() => ValueOutcome::resolved("."),
        PathMode::Relative => ValueOutcome::resolved(request.shell().normalize_path(relative)),
        PathMode::Absolute => match request.context().and_then(|c| c.absolute_path(relative)) {
            Some(absolute) => ValueOutcome::resolved(request.shell().normalize_path(&absolute)),
            None => ValueOutcome::failed(
                "The workspace root is unknown, so an absolute path cannot be produced.",
            ),
        },
    }
}

/// Error shown when a placeholder needs the active file and there is none.
pub const NO_ACTIVE_FILE: &str =
    "No file is active at the moment. Open a file or click a pane that has a file open.";
