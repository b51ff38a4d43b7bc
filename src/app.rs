//! Application logic for the SQL Syntax Lint CLI.
//!
//! This module contains the command implementations separated from the
//! main entry point to enable testing.

mod check;
mod convert;
mod helpers;
mod types;

pub use check::{run_check, run_probe};
pub use convert::convert_format;
pub use helpers::{
    calculate_exit_code, create_output_options, read_statement_input, resolve_lint_options
};
pub use types::{CheckParams, CommandOutput};
