//! Process runner: the single place child processes are spawned.
//!
//! Platform executors build a [`CommandInvocation`] and hand it to a
//! [`ProcessRunner`]. Tests swap in a recording fake so no real process runs.

use std::process::{Command, Stdio};
use std::time::Instant;
use sysprobe_domain::{CommandInvocation, CommandOutcome, ToolError, truncate_output};
use tracing::debug;

/// Maximum output size (1 MiB)
pub const MAX_OUTPUT_SIZE: usize = 1024 * 1024;

/// Runs a command to completion and captures its combined output.
pub trait ProcessRunner: Send + Sync {
    /// Run synchronously. An `Err` means the process could not be started;
    /// a nonzero exit is still `Ok`.
    fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutcome, ToolError>;

    /// Whether `program` can be found on this machine
    fn is_available(&self, program: &str) -> bool;
}

/// [`ProcessRunner`] backed by `std::process`.
///
/// There is no timeout: a hung process blocks the session until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutcome, ToolError> {
        let start = Instant::now();
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ToolError::Execution {
                command: invocation.to_string(),
                exit_code: None,
                output: format!("Failed to spawn command: {}", e),
            })?;

        let exit_code = output.status.code();
        let combined = combine_output(&output.stdout, &output.stderr);
        debug!(
            command = %invocation,
            exit_code = ?exit_code,
            bytes = combined.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Command finished"
        );

        Ok(CommandOutcome::new(
            invocation.clone(),
            truncate_output(combined, MAX_OUTPUT_SIZE),
            exit_code,
        ))
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// stdout followed by stderr, lossily decoded.
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    let mut combined = String::with_capacity(stdout.len() + stderr.len() + 1);
    combined.push_str(&stdout);
    if !stderr.is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_output() {
        assert_eq!(combine_output(b"out\n", b""), "out\n");
        assert_eq!(combine_output(b"", b"err\n"), "err\n");
        assert_eq!(combine_output(b"out", b"err"), "out\nerr");
        assert_eq!(combine_output(b"out\n", b"err"), "out\nerr");
    }

    #[test]
    fn test_combine_output_lossy() {
        assert_eq!(combine_output(&[0x66, 0xff, 0x6f], b""), "f\u{fffd}o");
    }

    #[test]
    fn test_missing_program_is_execution_error() {
        let runner = SystemProcessRunner;
        let inv = CommandInvocation::new("sysprobe-definitely-not-a-real-binary");
        let err = runner.run(&inv).unwrap_err();
        assert!(matches!(err, ToolError::Execution { exit_code: None, .. }));
        assert!(!runner.is_available("sysprobe-definitely-not-a-real-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_real_process() {
        let runner = SystemProcessRunner;
        let outcome = runner
            .run(&CommandInvocation::new("sh").args(["-c", "echo hi; echo oops >&2; exit 3"]))
            .unwrap();
        assert_eq!(outcome.exit_code, Some(3));
        assert_eq!(outcome.output, "hi\noops\n");
    }
}
