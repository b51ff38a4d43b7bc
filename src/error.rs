pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create error for a validator that is not installed or not on `PATH`
pub fn missing_dependency_error(tool: &str) -> AppError {
    AppError::service(format!(
        "'{}' is required to check statements but was not found; install the PostgreSQL \
         ecpg preprocessor (usually shipped with libecpg-dev or postgresql-devel) or point \
         --validator at an equivalent binary",
        tool
    ))
}

/// Create error for a validator process that could not be started
pub fn validator_spawn_error(program: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!(
        "Failed to start validator '{}': {}",
        program,
        describe_io(&source)
    ))
}

/// Create error for a missing stdio pipe on the validator process
pub fn validator_pipe_error(program: &str, stream: &str) -> AppError {
    AppError::internal(format!(
        "Validator '{}' was started without a {} pipe",
        program, stream
    ))
}

/// Create error for a failure while waiting on the validator process
pub fn validator_io_error(program: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!(
        "I/O error while running validator '{}': {}",
        program,
        describe_io(&source)
    ))
}

fn describe_io(err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("program not found ({})", err),
        std::io::ErrorKind::PermissionDenied => format!("permission denied ({})", err),
        _ => err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::*;

    #[test]
    fn test_describe_io_not_found() {
        let msg = describe_io(&Error::new(ErrorKind::NotFound, "gone"));
        assert!(msg.starts_with("program not found"));
    }

    #[test]
    fn test_describe_io_permission_denied() {
        let msg = describe_io(&Error::new(ErrorKind::PermissionDenied, "nope"));
        assert!(msg.starts_with("permission denied"));
    }

    #[test]
    fn test_describe_io_other() {
        let msg = describe_io(&Error::other("boom"));
        assert_eq!(msg, "boom");
    }
}
