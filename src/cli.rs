use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// SQL Syntax Lint - Check embedded SQL statements with ecpg
#[derive(Parser, Debug)]
#[command(name = "sql-syntax-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check statements given as arguments, in a file, or on stdin
    Check {
        /// Statement words, joined with single spaces (ignored with --input)
        statement: Vec<String>,

        /// File to read statements from (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Append a semicolon when the statement lacks one
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        add_terminator: Option<bool>,

        /// Trim whitespace at head and tail of the statement
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        trim: Option<bool>,

        /// Fill `?` placeholders with sample data before checking
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        placeholders: Option<bool>,

        /// Validator program (defaults to ecpg)
        #[arg(long, env = "SQL_LINT_VALIDATOR")]
        validator: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },
    /// Report whether the validator can be found
    Probe {
        /// Validator program (defaults to ecpg)
        #[arg(long, env = "SQL_LINT_VALIDATOR")]
        validator: Option<String>
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
