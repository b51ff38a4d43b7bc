//! Syntax checking of embedded SQL through an external validator.
//!
//! # Pipeline
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌─────────┐   ┌──────────┐   ┌───────────┐
//! │ normalize │──▶│   split   │──▶│ invoke  │──▶│ extract  │──▶│  result   │
//! └───────────┘   └───────────┘   └─────────┘   └──────────┘   └───────────┘
//!                                 (per fragment, in order)
//! ```
//!
//! The [`Linter`] owns nothing but immutable [`LintOptions`], so one
//! instance can be shared across tasks and reused for any number of
//! statements.
//!
//! # Example
//!
//! ```no_run
//! use sql_syntax_lint::linter::{LintOptions, Linter};
//!
//! # async fn demo() -> sql_syntax_lint::error::AppResult<()> {
//! let linter = Linter::new(LintOptions::default())?;
//! let result = linter.check_statement("SELECT name FROM users WHERE id = ?").await?;
//! for diagnostic in &result {
//!     println!("ERROR: {}", diagnostic);
//! }
//! # Ok(())
//! # }
//! ```

mod extract;
mod invoke;
mod normalize;
mod options;
mod split;
mod types;

pub use extract::{Extracted, LOCATION_PREFIX, extract, first_meaningful_line};
pub use invoke::invoke;
pub use normalize::{PLACEHOLDER_LITERAL, TERMINATOR, normalize};
pub use options::{
    CommandExistsProbe, DEFAULT_VALIDATOR, DEFAULT_VALIDATOR_ARGS, DependencyProbe, LintOptions,
    ValidatorCommand
};
pub use split::{KEYWORD_PREFIX, split};
use tracing::{debug, warn};
pub use types::{
    Diagnostic, DiagnosticKind, DiagnosticLevel, EMPTY_STATEMENT_MESSAGE, Fragment, RawOutput,
    ValidationResult
};

use crate::error::{AppResult, missing_dependency_error};

/// Checks SQL statements with the configured validator.
#[derive(Debug, Clone)]
pub struct Linter {
    options: LintOptions
}

impl Linter {
    /// Build a linter after confirming the validator can be invoked.
    ///
    /// The dependency probe runs exactly once, here.
    ///
    /// # Errors
    ///
    /// Returns an error when the probe reports the validator as missing.
    pub fn new(options: LintOptions) -> AppResult<Self> {
        let tool = options.validator.program.as_str();
        if !options.probe(tool) {
            return Err(missing_dependency_error(tool));
        }
        debug!(validator = tool, "validator available");
        Ok(Self {
            options
        })
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Fragments `raw` would be split into, without running the validator.
    pub fn fragments(&self, raw: &str) -> Vec<Fragment> {
        split(&normalize(raw, &self.options)).collect()
    }

    /// Validate a possibly multi-statement string.
    ///
    /// Every fragment is attempted, in order, even after one fails. An
    /// empty string yields a single [`DiagnosticKind::EmptyStatement`]
    /// without starting the validator.
    ///
    /// # Errors
    ///
    /// Returns an error when the validator cannot be started or its pipes
    /// fail. Rejected SQL is never an error, it is a diagnostic.
    pub async fn check_statement(&self, raw: &str) -> AppResult<ValidationResult> {
        if raw.is_empty() {
            return Ok(ValidationResult::single(Diagnostic::empty_statement()));
        }

        let normalized = normalize(raw, &self.options);
        let mut result = ValidationResult::new();

        for (index, fragment) in split(&normalized).enumerate() {
            debug!(index, fragment = fragment.as_str(), "checking fragment");
            let output = invoke(&self.options.validator, &fragment).await?;
            result.fragments_checked += 1;
            if let Some(diagnostic) = diagnose(index, &fragment, &output) {
                debug!(index, message = %diagnostic, "fragment rejected");
                result.push(diagnostic);
            }
        }

        Ok(result)
    }
}

/// Turn one validator run into at most one diagnostic.
fn diagnose(index: usize, fragment: &Fragment, output: &RawOutput) -> Option<Diagnostic> {
    if let Some(found) = extract(&output.text) {
        return Some(Diagnostic::for_fragment(
            DiagnosticKind::Syntax,
            index,
            fragment,
            found.level,
            found.message
        ));
    }
    if output.success {
        return None;
    }

    let status = match output.exit_code {
        Some(code) => format!("exit status {}", code),
        None => "a signal".to_string()
    };
    let message = match first_meaningful_line(&output.text) {
        Some(line) => format!("validator failed with {}: {}", status, line),
        None => format!("validator failed with {} and printed no diagnostic", status)
    };
    warn!(index, fragment = fragment.as_str(), "{}", message);
    Some(Diagnostic::for_fragment(
        DiagnosticKind::UnparseableOutput,
        index,
        fragment,
        None,
        message
    ))
}
