//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-syntax-lint.toml` in current directory
//! 4. `~/.config/sql-syntax-lint/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [lint]
//! add_terminator = true
//! trim_whitespace = true
//! substitute_placeholders = false
//!
//! [validator]
//! program = "/usr/lib/postgresql/16/bin/ecpg"
//! args = ["-o", "-", "-"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_LINT_VALIDATOR` | Validator program |
//! | `SQL_LINT_ADD_TERMINATOR` | `true`/`false` |
//! | `SQL_LINT_TRIM` | `true`/`false` |
//! | `SQL_LINT_PLACEHOLDERS` | `true`/`false` |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    linter::{DEFAULT_VALIDATOR, DEFAULT_VALIDATOR_ARGS, LintOptions, ValidatorCommand}
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lint:      LintSettings,
    #[serde(default)]
    pub validator: ValidatorSettings
}

/// Statement normalization switches
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintSettings {
    pub add_terminator:          bool,
    pub trim_whitespace:         bool,
    pub substitute_placeholders: bool
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            add_terminator:          true,
            trim_whitespace:         true,
            substitute_placeholders: true
        }
    }
}

/// External validator command
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    pub program: String,
    pub args:    Vec<String>
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_VALIDATOR.to_string(),
            args:    DEFAULT_VALIDATOR_ARGS.iter().map(|s| s.to_string()).collect()
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-syntax-lint.toml)
    /// 3. Config file in home directory (~/.config/sql-syntax-lint/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-syntax-lint")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Local config replaces the home one entirely
        let local_config = PathBuf::from(".sql-syntax-lint.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML document
    pub fn parse_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            config_error(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse_str(&content)
    }

    /// Override values from environment variables looked up through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<()> {
        if let Some(program) = lookup("SQL_LINT_VALIDATOR") {
            self.validator.program = program;
        }
        if let Some(value) = lookup("SQL_LINT_ADD_TERMINATOR") {
            self.lint.add_terminator = parse_bool("SQL_LINT_ADD_TERMINATOR", &value)?;
        }
        if let Some(value) = lookup("SQL_LINT_TRIM") {
            self.lint.trim_whitespace = parse_bool("SQL_LINT_TRIM", &value)?;
        }
        if let Some(value) = lookup("SQL_LINT_PLACEHOLDERS") {
            self.lint.substitute_placeholders = parse_bool("SQL_LINT_PLACEHOLDERS", &value)?;
        }
        Ok(())
    }

    /// Build linter options; the dependency probe is left at its default
    pub fn to_lint_options(&self) -> LintOptions {
        LintOptions::default()
            .add_terminator(self.lint.add_terminator)
            .trim_whitespace(self.lint.trim_whitespace)
            .substitute_placeholders(self.lint.substitute_placeholders)
            .with_validator(ValidatorCommand::new(
                self.validator.program.clone(),
                self.validator.args.iter().cloned()
            ))
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(config_error(format!(
            "Invalid boolean '{}' for {}",
            other, key
        )))
    }
}
