//! Application types for CLI commands.
//!
//! Parameters passed from the parsed command line into the check and probe
//! commands, and the output they hand back to `main`.

use std::path::PathBuf;

use crate::cli::Format;

/// Parameters for the check command.
///
/// `None` switches fall back to the loaded configuration.
///
/// # Example
///
/// ```
/// use sql_syntax_lint::{app::CheckParams, cli::Format};
///
/// let params = CheckParams {
///     statement:      vec!["SELECT".to_string(), "1".to_string()],
///     input:          None,
///     add_terminator: None,
///     trim:           None,
///     placeholders:   Some(false),
///     validator:      None,
///     output_format:  Format::Text,
///     no_color:       true
/// };
/// assert_eq!(params.statement.join(" "), "SELECT 1");
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Statement words from the command line.
    pub statement:      Vec<String>,
    /// File to read instead of `statement`, "-" for stdin.
    pub input:          Option<PathBuf>,
    pub add_terminator: Option<bool>,
    pub trim:           Option<bool>,
    pub placeholders:   Option<bool>,
    /// Validator program override.
    pub validator:      Option<String>,
    pub output_format:  Format,
    pub no_color:       bool
}

/// Output from CLI command execution.
///
/// Represents the final output ready for display, including the exit
/// code and all lines to be printed to stdout.
///
/// # Example
///
/// ```
/// use sql_syntax_lint::app::CommandOutput;
///
/// let output = CommandOutput {
///     exit_code: 0,
///     stdout:    vec!["ecpg: available".to_string()]
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process (0=valid, 1=diagnostics found).
    pub exit_code: i32,
    /// Lines to print to stdout.
    pub stdout:    Vec<String>
}
