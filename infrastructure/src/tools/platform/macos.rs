//! macOS executor: BSD userland. There is no `ss` or `wget` by default, so
//! those requests are served by `lsof` and `curl`.

use super::{
    CommandContext, NO_MATCHING_FILES, NO_MATCHING_LINES, NO_MATCHING_PROCESSES,
    no_process_on_port, substituted, unix,
};
use crate::tools::command::ProcessRunner;
use std::sync::Arc;
use sysprobe_application::PlatformExecutor;
use sysprobe_domain::tool::{FindArgs, GrepArgs, LsofArgs, PsArgs, SsArgs, WgetArgs, decode};
use sysprobe_domain::{CommandInvocation, NoMatch, Platform, ToolError, ToolName};

pub struct MacOsExecutor {
    ctx: CommandContext,
}

impl MacOsExecutor {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            ctx: CommandContext::new(Platform::MacOs, runner),
        }
    }
}

impl PlatformExecutor for MacOsExecutor {
    fn platform(&self) -> &Platform {
        &self.ctx.platform
    }

    fn ps(&self, arguments: &str) -> Result<String, ToolError> {
        let args: PsArgs = decode(arguments)?;
        let no_match = NoMatch::exit_code(1, NO_MATCHING_PROCESSES);

        if let Some(user) = args.user() {
            let inv = CommandInvocation::new("ps").arg("-U").arg(user);
            return self.ctx.run(ToolName::Ps, inv, Some(&no_match));
        }
        if let Some(name) = args.name() {
            let inv = CommandInvocation::new("pgrep").arg("-lf").arg(name);
            return self.ctx.run(ToolName::Ps, inv, Some(&no_match));
        }
        if let Some(pid) = args.pid {
            let inv = CommandInvocation::new("ps").arg("-p").arg(pid.to_string());
            return self.ctx.run(ToolName::Ps, inv, Some(&no_match));
        }
        self.ctx.run(ToolName::Ps, unix::ps_listing(&args), None)
    }

    fn find(&self, arguments: &str) -> Result<String, ToolError> {
        let args: FindArgs = decode(arguments)?;
        let no_match = NoMatch::empty_output(NO_MATCHING_FILES);
        self.ctx.run(ToolName::Find, unix::find(&args), Some(&no_match))
    }

    fn grep(&self, arguments: &str) -> Result<String, ToolError> {
        let args: GrepArgs = decode(arguments)?;
        let no_match = NoMatch::exit_code(1, NO_MATCHING_LINES);
        self.ctx.run(ToolName::Grep, unix::grep(&args), Some(&no_match))
    }

    fn wget(&self, arguments: &str) -> Result<String, ToolError> {
        let args: WgetArgs = decode(arguments)?;
        let mut inv = CommandInvocation::new("curl").arg("-fsSL");
        inv = match args.output_file() {
            Some(out) => inv.arg("-o").arg(out),
            None => inv.arg("-O"),
        };
        inv = inv.arg(args.url());

        self.ctx.run(ToolName::Wget, inv.clone(), None)?;
        Ok(substituted(
            ToolName::Wget,
            &self.ctx.platform,
            &inv,
            &args.success_message(),
        ))
    }

    fn ss(&self, arguments: &str) -> Result<String, ToolError> {
        let args: SsArgs = decode(arguments)?;
        let Some(port) = args.port() else {
            return Err(ToolError::unsupported(ToolName::Ss.as_str(), self.ctx.platform.as_str())
                .with_hint("Use 'lsof' with a port instead"));
        };

        let inv = CommandInvocation::new("lsof")
            .arg("-nP")
            .arg("-i")
            .arg(port_spec(args.protocol_flag(), port));
        let no_match = NoMatch::exit_code(1, no_process_on_port(port));
        let body = self.ctx.run(ToolName::Ss, inv.clone(), Some(&no_match))?;
        Ok(substituted(ToolName::Ss, &self.ctx.platform, &inv, &body))
    }

    fn lsof(&self, arguments: &str) -> Result<String, ToolError> {
        let args: LsofArgs = decode(arguments)?;
        let no_match = NoMatch::exit_code(1, NO_MATCHING_PROCESSES);
        let inv = unix::lsof(&args, |port| format!("TCP:{}", port));
        self.ctx.run(ToolName::Lsof, inv, Some(&no_match))
    }
}

/// lsof `-i` selector for an `ss` protocol flag.
fn port_spec(protocol_flag: Option<&str>, port: u32) -> String {
    match protocol_flag {
        Some("-t") => format!("TCP:{}", port),
        Some("-u") => format!("UDP:{}", port),
        _ => format!(":{}", port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::platform::testing::{FakeProcessRunner, argv};

    fn executor(runner: FakeProcessRunner) -> (MacOsExecutor, Arc<FakeProcessRunner>) {
        let runner = Arc::new(runner);
        (MacOsExecutor::new(runner.clone()), runner)
    }

    #[test]
    fn test_ps_uses_bsd_flags() {
        let (exec, runner) = executor(FakeProcessRunner::new());
        exec.ps(r#"{"user": "_www"}"#).unwrap();
        assert_eq!(runner.last_argv(), argv(&["ps", "-U", "_www"]));

        exec.ps(r#"{"name": "Finder"}"#).unwrap();
        assert_eq!(runner.last_argv(), argv(&["pgrep", "-lf", "Finder"]));
    }

    #[test]
    fn test_find_matches_linux_form() {
        let (exec, runner) = executor(FakeProcessRunner::new().with_response("./a.log\n", 0));
        assert_eq!(
            exec.find(r#"{"name": "a.log", "type": "f"}"#).unwrap(),
            "./a.log\n"
        );
        assert_eq!(
            runner.last_argv(),
            argv(&["find", ".", "-name", "a.log", "-type", "f"])
        );
    }

    #[test]
    fn test_wget_is_served_by_curl() {
        let (exec, runner) = executor(FakeProcessRunner::new());
        let out = exec
            .wget(r#"{"url": "https://example.com/f.zip", "output_file": "f.zip"}"#)
            .unwrap();

        assert_eq!(
            runner.last_argv(),
            argv(&["curl", "-fsSL", "-o", "f.zip", "https://example.com/f.zip"])
        );
        assert!(out.starts_with("Note: 'wget' is not available on macos; ran `curl"));
        assert!(out.ends_with("Successfully downloaded from https://example.com/f.zip to f.zip."));
    }

    #[test]
    fn test_wget_without_output_keeps_remote_name() {
        let (exec, runner) = executor(FakeProcessRunner::new());
        exec.wget(r#"{"url": "https://example.com/f.zip"}"#).unwrap();
        assert_eq!(
            runner.last_argv(),
            argv(&["curl", "-fsSL", "-O", "https://example.com/f.zip"])
        );
    }

    #[test]
    fn test_ss_with_port_uses_lsof() {
        let (exec, runner) = executor(FakeProcessRunner::new().with_response("", 1));
        let out = exec.ss(r#"{"port": 5432, "protocol": "tcp"}"#).unwrap();

        assert_eq!(runner.last_argv(), argv(&["lsof", "-nP", "-i", "TCP:5432"]));
        assert!(out.contains("ran `lsof -nP -i TCP:5432` instead"));
        assert!(out.ends_with("No processes found using port 5432."));
    }

    #[test]
    fn test_ss_without_port_is_unsupported() {
        let (exec, runner) = executor(FakeProcessRunner::new());
        let err = exec.ss(r#"{"options": ["-l"]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'ss' is not supported on macos. Use 'lsof' with a port instead"
        );
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_lsof_port_selector() {
        let (exec, runner) = executor(FakeProcessRunner::new());
        exec.lsof(r#"{"port": 3000}"#).unwrap();
        assert_eq!(runner.last_argv(), argv(&["lsof", "-i", "TCP:3000"]));
    }
}
