// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_syntax_lint::error::{
    config_error, file_read_error, missing_dependency_error, validator_io_error,
    validator_pipe_error, validator_spawn_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/file.sql", io_error);
    let _msg = error.to_string();
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    let _msg = error.to_string();
}

#[test]
fn test_missing_dependency_error() {
    let error = missing_dependency_error("ecpg");
    let _msg = error.to_string();
}

#[test]
fn test_validator_spawn_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = validator_spawn_error("ecpg", io_error);
    let _msg = error.to_string();
}

#[test]
fn test_validator_pipe_error() {
    let error = validator_pipe_error("ecpg", "stdin");
    let _msg = error.to_string();
}

#[test]
fn test_validator_io_error() {
    let error = validator_io_error("ecpg", std::io::Error::other("broken pipe"));
    let _msg = error.to_string();
}

#[test]
fn test_error_types_are_different() {
    let dep_err = missing_dependency_error("ecpg");
    let pipe_err = validator_pipe_error("ecpg", "stdin");
    let config_err = config_error("test");
    assert!(!dep_err.to_string().is_empty());
    assert!(!pipe_err.to_string().is_empty());
    assert!(!config_err.to_string().is_empty());
}
