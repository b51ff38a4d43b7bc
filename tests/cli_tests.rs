// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use clap::Parser;
use sql_syntax_lint::cli::{Cli, Commands, Format};

#[test]
fn test_check_statement_words() {
    let cli = Cli::try_parse_from(["sql-syntax-lint", "check", "SELECT", "1"]).unwrap();
    match cli.command {
        Commands::Check {
            statement,
            input,
            add_terminator,
            output_format,
            ..
        } => {
            assert_eq!(statement, vec!["SELECT", "1"]);
            assert!(input.is_none());
            assert!(add_terminator.is_none());
            assert!(matches!(output_format, Format::Text));
        }
        Commands::Probe { .. } => panic!("expected check")
    }
}

#[test]
fn test_check_boolean_switches_take_values() {
    let cli = Cli::try_parse_from([
        "sql-syntax-lint",
        "check",
        "--add-terminator",
        "false",
        "--trim",
        "true",
        "--placeholders",
        "false",
        "-i",
        "queries.sql"
    ])
    .unwrap();
    match cli.command {
        Commands::Check {
            add_terminator,
            trim,
            placeholders,
            input,
            ..
        } => {
            assert_eq!(add_terminator, Some(false));
            assert_eq!(trim, Some(true));
            assert_eq!(placeholders, Some(false));
            assert_eq!(input.unwrap().to_str(), Some("queries.sql"));
        }
        Commands::Probe { .. } => panic!("expected check")
    }
}

#[test]
fn test_check_output_format() {
    let cli = Cli::try_parse_from(["sql-syntax-lint", "check", "-f", "yaml", "SELECT 1"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Check {
            output_format: Format::Yaml,
            ..
        }
    ));
}

#[test]
fn test_invalid_boolean_rejected() {
    assert!(Cli::try_parse_from(["sql-syntax-lint", "check", "--trim", "maybe"]).is_err());
}

#[test]
fn test_verbose_is_global() {
    let cli = Cli::try_parse_from(["sql-syntax-lint", "probe", "-v"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_format_debug() {
    let format = Format::Json;
    let debug = format!("{:?}", format);
    assert!(debug.contains("Json"));
}
