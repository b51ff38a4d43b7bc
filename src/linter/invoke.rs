//! Runs the validator on one fragment.
//!
//! The fragment is written to the child's stdin from a separate task while
//! this task drains stdout and stderr, so neither side can block on a full
//! pipe buffer. The writer always drops stdin when it is done, which the
//! validator sees as end of input.

use std::process::Stdio;

use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, warn};

use super::{
    options::ValidatorCommand,
    types::{Fragment, RawOutput}
};
use crate::error::{AppResult, validator_io_error, validator_pipe_error, validator_spawn_error};

/// Spawn the validator, feed it `fragment` and collect everything it prints.
///
/// A non-zero exit is a normal outcome and is returned as output. Only a
/// failure to start or talk to the process is an error.
pub async fn invoke(validator: &ValidatorCommand, fragment: &Fragment) -> AppResult<RawOutput> {
    let mut child = Command::new(&validator.program)
        .args(&validator.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| validator_spawn_error(&validator.program, e))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| validator_pipe_error(&validator.program, "stdin"))?;

    let input = fragment.as_str().to_owned();
    let writer = tokio::spawn(async move {
        if let Err(e) = stdin.write_all(input.as_bytes()).await {
            // The validator may exit before reading everything.
            debug!(error = %e, "validator closed stdin early");
            return;
        }
        if let Err(e) = stdin.shutdown().await {
            debug!(error = %e, "failed to close validator stdin");
        }
    });

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| validator_io_error(&validator.program, e))?;

    if let Err(e) = writer.await {
        warn!(error = %e, "stdin writer task did not finish");
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(RawOutput {
        success: output.status.success(),
        exit_code: output.status.code(),
        text
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn fragment(text: &str) -> Fragment {
        Fragment::new(text.to_string())
    }

    fn sh(script: &str) -> ValidatorCommand {
        ValidatorCommand::new("sh", ["-c", script])
    }

    #[tokio::test]
    async fn test_fragment_reaches_stdin() {
        let out = invoke(&sh("cat"), &fragment("EXEC SQL SELECT 1;"))
            .await
            .unwrap();
        assert!(out.success);
        assert_eq!(out.exit_code, Some(0));
        assert_eq!(out.text, "EXEC SQL SELECT 1;");
    }

    #[tokio::test]
    async fn test_stderr_is_captured_after_stdout() {
        let out = invoke(&sh("cat >/dev/null; echo out; echo err >&2; exit 3"), &fragment("x"))
            .await
            .unwrap();
        assert!(!out.success);
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.text, "out\nerr\n");
    }

    #[tokio::test]
    async fn test_validator_ignoring_stdin_does_not_hang() {
        let long = format!("EXEC SQL SELECT '{}';", "x".repeat(256 * 1024));
        let out = invoke(&sh("echo done"), &fragment(&long)).await.unwrap();
        assert_eq!(out.text, "done\n");
    }

    #[tokio::test]
    async fn test_large_output_is_drained() {
        let long = format!("EXEC SQL SELECT '{}';", "y".repeat(512 * 1024));
        let out = invoke(&sh("cat; cat /dev/null >&2"), &fragment(&long))
            .await
            .unwrap();
        assert_eq!(out.text.len(), long.len());
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let validator = ValidatorCommand::new("someCommandThatDoesntExist", ["-o", "-", "-"]);
        assert!(invoke(&validator, &fragment("x")).await.is_err());
    }
}
