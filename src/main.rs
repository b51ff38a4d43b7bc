//! # SQL Syntax Lint
//!
//! Lint-style syntax checking for SQL that will be embedded in application
//! code.
//!
//! Statements are normalized (trimmed, `?` placeholders filled in, a
//! terminating `;` added), split on `;`, and each piece is fed to the
//! PostgreSQL `ecpg` preprocessor. Whatever `ecpg` rejects is reported.
//!
//! # Quick Start
//!
//! ```bash
//! # Check a statement given on the command line
//! sql-syntax-lint check SELECT name FROM users WHERE id = ?
//!
//! # Check a file, or stdin with "-"
//! sql-syntax-lint check -i queries.sql
//! cat queries.sql | sql-syntax-lint check -i - -f json
//!
//! # Is ecpg installed?
//! sql-syntax-lint probe
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_LINT_VALIDATOR`, `SQL_LINT_TRIM`, etc.)
//! 3. `.sql-syntax-lint.toml` in current directory
//! 4. `~/.config/sql-syntax-lint/config.toml`
//!
//! # Exit Codes
//!
//! - `0` - Every statement was accepted (validator warnings are printed but
//!   do not fail the run)
//! - `1` - At least one error diagnostic was reported
//! - `2` - The validator is missing or could not be run, or input was unreadable
//!
//! # Logging
//!
//! Logs go to stderr. `RUST_LOG` selects the level (`warn` by default);
//! `--verbose` overrides it with `debug`.

use std::process;

use clap::Parser;
use sql_syntax_lint::{
    app::{CheckParams, CommandOutput, run_check, run_probe},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult
};
use tokio::main;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(output) => {
            for line in &output.stdout {
                println!("{}", line);
            }
            process::exit(output.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> AppResult<CommandOutput> {
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            statement,
            input,
            add_terminator,
            trim,
            placeholders,
            validator,
            output_format,
            no_color
        } => {
            let params = CheckParams {
                statement,
                input,
                add_terminator,
                trim,
                placeholders,
                validator,
                output_format,
                no_color
            };
            run_check(params, config).await
        }
        Commands::Probe {
            validator
        } => Ok(run_probe(validator, config))
    }
}
