//! Check and probe command execution.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{
    helpers::{calculate_exit_code, create_output_options, read_statement_input, resolve_lint_options},
    types::{CheckParams, CommandOutput}
};
use crate::{
    config::Config,
    error::AppResult,
    linter::Linter,
    output::format_validation_result
};

/// Runs the check command.
///
/// 1. Merges command-line switches over `config`
/// 2. Confirms the validator is installed
/// 3. Reads the statement from arguments, a file or stdin
/// 4. Validates it and formats the diagnostics
///
/// # Errors
///
/// Returns an error if the validator is missing or cannot be run, or the
/// input cannot be read. Rejected SQL is reported through the exit code.
///
/// # Example
///
/// ```no_run
/// use sql_syntax_lint::{
///     app::{CheckParams, run_check},
///     cli::Format,
///     config::Config
/// };
///
/// # async fn demo() -> sql_syntax_lint::error::AppResult<()> {
/// let params = CheckParams {
///     statement:      vec!["SELECT 1".to_string()],
///     input:          None,
///     add_terminator: None,
///     trim:           None,
///     placeholders:   None,
///     validator:      None,
///     output_format:  Format::Text,
///     no_color:       false
/// };
/// let output = run_check(params, Config::default()).await?;
/// std::process::exit(output.exit_code);
/// # }
/// ```
pub async fn run_check(params: CheckParams, config: Config) -> AppResult<CommandOutput> {
    let options = resolve_lint_options(&params, config);
    let linter = Linter::new(options)?;
    let statement = read_statement_input(&params)?;
    let output_opts = create_output_options(params.output_format, params.no_color);

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Checking statements...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = linter.check_statement(&statement).await;
    pb.finish_and_clear();
    let result = result?;

    info!(
        fragments = result.fragments_checked,
        diagnostics = result.len(),
        "check finished"
    );

    let formatted = format_validation_result(&result, &output_opts);
    let stdout = if formatted.is_empty() {
        Vec::new()
    } else {
        vec![formatted.trim_end().to_string()]
    };

    Ok(CommandOutput {
        exit_code: calculate_exit_code(&result),
        stdout
    })
}

/// Runs the probe command: reports whether the validator can be found.
pub fn run_probe(validator: Option<String>, mut config: Config) -> CommandOutput {
    if let Some(program) = validator {
        config.validator.program = program;
    }
    let program = config.validator.program.clone();
    match Linter::new(config.to_lint_options()) {
        Ok(_) => CommandOutput {
            exit_code: 0,
            stdout:    vec![format!("{}: available", program)]
        },
        Err(_) => CommandOutput {
            exit_code: 1,
            stdout:    vec![format!("{}: not found", program)]
        }
    }
}
