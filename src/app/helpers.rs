//! Helper functions for CLI operations.
//!
//! Reading statement input, merging command-line switches over the loaded
//! configuration, and mapping results to exit codes.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::Path
};

use super::{convert::convert_format, types::CheckParams};
use crate::{
    cli::Format,
    config::Config,
    error::{AppResult, file_read_error},
    linter::{DiagnosticLevel, LintOptions, ValidationResult},
    output::OutputOptions
};

/// Calculates the process exit code for a validation result.
///
/// - `0` - Every fragment was accepted, or only warnings were reported
/// - `1` - At least one diagnostic other than a warning was produced
///
/// # Example
///
/// ```
/// use sql_syntax_lint::{app::calculate_exit_code, linter::ValidationResult};
///
/// assert_eq!(calculate_exit_code(&ValidationResult::new()), 0);
/// ```
pub fn calculate_exit_code(result: &ValidationResult) -> i32 {
    if result
        .iter()
        .any(|d| d.level != Some(DiagnosticLevel::Warning))
    {
        1
    } else {
        0
    }
}

/// Reads the statement to check.
///
/// With an input path the file (or stdin for "-") is read verbatim;
/// otherwise the positional words are joined with single spaces.
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_statement_input(params: &CheckParams) -> AppResult<String> {
    match &params.input {
        Some(path) => read_input_path(path),
        None => Ok(params.statement.join(" "))
    }
}

fn read_input_path(path: &Path) -> AppResult<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
    }
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn resolve_lint_options(params: &CheckParams, mut config: Config) -> LintOptions {
    if let Some(enabled) = params.add_terminator {
        config.lint.add_terminator = enabled;
    }
    if let Some(enabled) = params.trim {
        config.lint.trim_whitespace = enabled;
    }
    if let Some(enabled) = params.placeholders {
        config.lint.substitute_placeholders = enabled;
    }
    if let Some(program) = &params.validator {
        config.validator.program = program.clone();
    }
    config.to_lint_options()
}

/// Create output options from parameters
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}
