//! Platform Executors
//!
//! One [`PlatformExecutor`] per operating system, selected once at startup by
//! [`select_executor`]. Every executor compiles on every target and talks to
//! the OS only through a [`ProcessRunner`], so all of them can be tested
//! anywhere.
//!
//! | Platform | Executor                     |
//! |----------|------------------------------|
//! | linux    | [`LinuxExecutor`]            |
//! | macos    | [`MacOsExecutor`]            |
//! | windows  | [`WindowsExecutor`]          |
//! | other    | [`UnsupportedExecutor`]      |

mod linux;
mod macos;
mod unix;
mod unsupported;
mod windows;

#[cfg(test)]
pub(crate) mod testing;

pub use linux::LinuxExecutor;
pub use macos::MacOsExecutor;
pub use unsupported::UnsupportedExecutor;
pub use windows::WindowsExecutor;

use crate::tools::command::ProcessRunner;
use std::sync::Arc;
use sysprobe_application::PlatformExecutor;
use sysprobe_domain::{CommandInvocation, NoMatch, Platform, ToolError, ToolName, classify};
use tracing::info;

/// Executor for `platform`, falling back to [`UnsupportedExecutor`].
pub fn select_executor(platform: Platform, runner: Arc<dyn ProcessRunner>) -> Arc<dyn PlatformExecutor> {
    info!(%platform, "Selecting platform executor");
    match platform {
        Platform::Linux => Arc::new(LinuxExecutor::new(runner)),
        Platform::MacOs => Arc::new(MacOsExecutor::new(runner)),
        Platform::Windows => Arc::new(WindowsExecutor::new(runner)),
        other => Arc::new(UnsupportedExecutor::new(other)),
    }
}

/// Shared plumbing: availability check, run, classify.
struct CommandContext {
    platform: Platform,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandContext {
    fn new(platform: Platform, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { platform, runner }
    }

    /// Run `invocation` on behalf of `tool` and classify the result.
    fn run(
        &self,
        tool: ToolName,
        invocation: CommandInvocation,
        no_match: Option<&NoMatch>,
    ) -> Result<String, ToolError> {
        if !self.runner.is_available(&invocation.program) {
            return Err(ToolError::unsupported(tool.as_str(), self.platform.as_str())
                .with_hint(format!("'{}' is not installed or not on PATH", invocation.program)));
        }
        let outcome = self.runner.run(&invocation)?;
        classify(outcome, no_match)
    }
}

/// Prefix `body` with a note that `requested` was served by another command.
fn substituted(requested: ToolName, platform: &Platform, invocation: &CommandInvocation, body: &str) -> String {
    format!(
        "Note: '{}' is not available on {}; ran `{}` instead.\n{}",
        requested, platform, invocation, body
    )
}

/// Sentence used when a port lookup finds nothing.
fn no_process_on_port(port: u32) -> String {
    format!("No processes found using port {}.", port)
}

const NO_MATCHING_PROCESSES: &str = "No matching processes found.";
const NO_MATCHING_FILES: &str = "No matching files found.";
const NO_MATCHING_LINES: &str = "No matching lines found.";

#[cfg(test)]
mod tests {
    use super::testing::FakeProcessRunner;
    use super::*;

    #[test]
    fn test_select_executor_by_platform() {
        let runner: Arc<dyn ProcessRunner> = Arc::new(FakeProcessRunner::new());
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            let executor = select_executor(platform.clone(), runner.clone());
            assert_eq!(executor.platform(), &platform);
        }

        let other = Platform::Other("plan9".to_string());
        let executor = select_executor(other.clone(), runner);
        assert_eq!(executor.platform(), &other);
        assert!(matches!(
            executor.ps("{}"),
            Err(ToolError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_missing_program_is_unsupported() {
        let runner = Arc::new(FakeProcessRunner::new().with_missing("pgrep"));
        let executor = LinuxExecutor::new(runner.clone());

        let err = executor.ps(r#"{"name": "nginx"}"#).unwrap_err();

        assert_eq!(
            err.to_string(),
            "'ps' is not supported on linux. 'pgrep' is not installed or not on PATH"
        );
        assert!(runner.invocations().is_empty());
    }
}
