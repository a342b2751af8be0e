//! Subcommand implementations.

use std::io::Write;
use std::process::ExitCode;

use shellvars_application::ports::PlaceholderDefinition;
use shellvars_application::use_cases::{PrepareCommand, PrepareCommandInput};
use shellvars_application::{SubstitutionEngine, find_used};
use shellvars_domain::{EngineSettings, ExecutionContext};
use shellvars_infrastructure::{
    Catalogue, SettingsRepository, TokioFileSystem, shell_for, to_pretty_json,
};
use tracing::debug;

use crate::cli::{Cli, Command, ParseArgs};

type CommandResult = Result<ExitCode, Box<dyn std::error::Error>>;

/// Runs the selected subcommand.
pub async fn run(cli: Cli) -> CommandResult {
    let repository = cli
        .config
        .map_or_else(SettingsRepository::new, SettingsRepository::at);
    let settings = repository.load().await?;
    let catalogue = Catalogue::load(&settings, TokioFileSystem::new())?;

    match cli.command {
        Command::Parse(args) => parse(args, settings, &catalogue).await,
        Command::Used { texts } => used(&texts, &catalogue),
        Command::List => list(&catalogue),
    }
}

async fn parse(args: ParseArgs, mut settings: EngineSettings, catalogue: &Catalogue) -> CommandResult {
    if let Some(shell) = args.shell {
        settings.shell = shell.into();
    }
    if args.no_escape {
        settings.escape_values = false;
    }
    if args.wrapper.is_some() {
        settings.shell_command_wrapper = args.wrapper;
    }

    for (name, value) in &args.variables {
        let Some(variable) = catalogue.custom_variable(name) else {
            return Err(format!("unknown custom variable: {name}").into());
        };
        variable.set_value(value.as_str());
    }

    let mut context = ExecutionContext::new().with_command(settings.command_context(&args.command_id));
    if let Some(root) = args.workspace.or_else(|| std::env::current_dir().ok()) {
        context = context.with_workspace_root(root);
    }
    if let Some(file) = args.file {
        context = context.with_active_file(file);
    }

    let shell = shell_for(settings.shell);
    let placeholders = catalogue.snapshot();
    debug!(shell = shell.name(), command = %args.command_id, "Preparing command");

    let output = PrepareCommand::new(SubstitutionEngine::new())
        .execute(PrepareCommandInput {
            command: &args.text,
            wrapper: settings.shell_command_wrapper.as_deref(),
            placeholders: &placeholders,
            shell: shell.as_ref(),
            escape: settings.escape_values,
            context: Some(&context),
        })
        .await?;

    for warning in &output.warnings {
        eprintln!("warning: {warning}");
    }

    let succeeded = output.result.is_succeeded();
    let mut stdout = std::io::stdout().lock();
    if args.json {
        write!(stdout, "{}", to_pretty_json(&output.result)?)?;
    } else if let Some(parsed) = output.result.parsed_content() {
        writeln!(stdout, "{parsed}")?;
    }
    if !succeeded {
        for message in output.result.error_messages() {
            eprintln!("error: {message}");
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn used(texts: &[String], catalogue: &Catalogue) -> CommandResult {
    let mut stdout = std::io::stdout().lock();
    for name in find_used(texts, &catalogue.snapshot()).keys() {
        writeln!(stdout, "{name}")?;
    }
    Ok(ExitCode::SUCCESS)
}

fn list(catalogue: &Catalogue) -> CommandResult {
    let mut stdout = std::io::stdout().lock();
    for definition in catalogue.snapshot().iter() {
        writeln!(stdout, "{}", usage(definition.as_ref()))?;
        let help = definition.help_text();
        if !help.is_empty() {
            writeln!(stdout, "    {help}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders a definition's token with its parameters, e.g. `{{file_path:absolute|relative}}`.
fn usage(definition: &dyn PlaceholderDefinition) -> String {
    let mut token = format!("{{{{{}", definition.name());
    for parameter in definition.parameters() {
        token.push(':');
        match parameter.allowed_values() {
            Some(values) => token.push_str(&values.join("|")),
            None => token.push_str(parameter.name()),
        }
        if !parameter.is_required() {
            token.push('?');
        }
    }
    token.push_str("}}");
    token
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use shellvars_infrastructure::{FilePath, FolderName, Passthrough};

    #[test]
    fn test_usage_rendering() {
        assert_eq!(usage(&FilePath::new().unwrap()), "{{file_path:absolute|relative}}");
        assert_eq!(usage(&Passthrough::new().unwrap()), "{{passthrough:value}}");
        assert_eq!(usage(&FolderName::new().unwrap()), "{{folder_name}}");
    }
}
