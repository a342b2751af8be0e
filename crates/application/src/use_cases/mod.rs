//! Application use cases (business logic orchestration).

mod prepare_command;

pub use prepare_command::{
    PrepareCommand, PrepareCommandInput, PrepareCommandOutput, PreparationWarning,
    SHELL_COMMAND_CONTENT, ShellCommandContent,
};
