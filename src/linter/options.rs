//! Lint options and the dependency probe seam.

use std::{
    fmt,
    process::{Command, Stdio},
    sync::Arc
};

use tracing::debug;

/// Default external validator binary.
pub const DEFAULT_VALIDATOR: &str = "ecpg";

/// Arguments telling `ecpg` to read one statement from stdin and write the
/// translated C to stdout.
pub const DEFAULT_VALIDATOR_ARGS: [&str; 3] = ["-o", "-", "-"];

/// Checks whether an external tool can be invoked.
///
/// Any `Fn(&str) -> bool` closure is a probe, which keeps tests free of
/// real process spawning.
pub trait DependencyProbe: Send + Sync {
    /// Returns `true` when `tool` is reachable in the current environment.
    fn is_available(&self, tool: &str) -> bool;
}

impl<F> DependencyProbe for F
where
    F: Fn(&str) -> bool + Send + Sync
{
    fn is_available(&self, tool: &str) -> bool {
        self(tool)
    }
}

/// Probe that asks the shell whether a command exists on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExistsProbe;

impl DependencyProbe for CommandExistsProbe {
    fn is_available(&self, tool: &str) -> bool {
        // `tool` is passed as `$1`, never spliced into the script.
        let status = Command::new("sh")
            .arg("-c")
            .arg("command -v -- \"$1\"")
            .arg("sh")
            .arg(tool)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(tool, error = %e, "dependency probe could not run");
                false
            }
        }
    }
}

/// Program and fixed argument list used to run the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCommand {
    pub program: String,
    pub args:    Vec<String>
}

impl ValidatorCommand {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args:    args.into_iter().map(Into::into).collect()
        }
    }
}

impl Default for ValidatorCommand {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATOR, DEFAULT_VALIDATOR_ARGS)
    }
}

/// Policy switches for a [`Linter`](crate::linter::Linter).
///
/// All switches default to on.
///
/// # Example
///
/// ```
/// use sql_syntax_lint::linter::LintOptions;
///
/// let options = LintOptions::default()
///     .add_terminator(false)
///     .with_probe(|_: &str| true);
/// assert!(!options.add_terminator);
/// assert!(options.trim_whitespace);
/// ```
#[derive(Clone)]
pub struct LintOptions {
    /// Append `;` when the statement does not already end with one
    pub add_terminator:          bool,
    /// Strip leading and trailing whitespace
    pub trim_whitespace:         bool,
    /// Replace `?` placeholders with a literal the validator accepts
    pub substitute_placeholders: bool,
    pub validator:               ValidatorCommand,
    /// Custom probe, [`CommandExistsProbe`] when unset
    pub dependency_probe:        Option<Arc<dyn DependencyProbe>>
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            add_terminator:          true,
            trim_whitespace:         true,
            substitute_placeholders: true,
            validator:               ValidatorCommand::default(),
            dependency_probe:        None
        }
    }
}

impl fmt::Debug for LintOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintOptions")
            .field("add_terminator", &self.add_terminator)
            .field("trim_whitespace", &self.trim_whitespace)
            .field("substitute_placeholders", &self.substitute_placeholders)
            .field("validator", &self.validator)
            .field("dependency_probe", &self.dependency_probe.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl LintOptions {
    #[must_use]
    pub fn add_terminator(mut self, enabled: bool) -> Self {
        self.add_terminator = enabled;
        self
    }

    #[must_use]
    pub fn trim_whitespace(mut self, enabled: bool) -> Self {
        self.trim_whitespace = enabled;
        self
    }

    #[must_use]
    pub fn substitute_placeholders(mut self, enabled: bool) -> Self {
        self.substitute_placeholders = enabled;
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: ValidatorCommand) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub fn with_probe(mut self, probe: impl DependencyProbe + 'static) -> Self {
        self.dependency_probe = Some(Arc::new(probe));
        self
    }

    /// Run the configured probe, or the default one, against `tool`.
    pub(crate) fn probe(&self, tool: &str) -> bool {
        match &self.dependency_probe {
            Some(probe) => probe.is_available(tool),
            None => CommandExistsProbe.is_available(tool)
        }
    }
}
