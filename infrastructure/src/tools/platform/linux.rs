//! Linux executor: procps, findutils, GNU grep, wget, iproute2 `ss`, lsof.

use super::{CommandContext, NO_MATCHING_LINES, NO_MATCHING_PROCESSES, NO_MATCHING_FILES, unix};
use crate::tools::command::ProcessRunner;
use std::sync::Arc;
use sysprobe_application::PlatformExecutor;
use sysprobe_domain::tool::{FindArgs, GrepArgs, LsofArgs, PsArgs, SsArgs, WgetArgs, decode};
use sysprobe_domain::{CommandInvocation, NoMatch, Platform, ToolError, ToolName};

pub struct LinuxExecutor {
    ctx: CommandContext,
}

impl LinuxExecutor {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            ctx: CommandContext::new(Platform::Linux, runner),
        }
    }
}

impl PlatformExecutor for LinuxExecutor {
    fn platform(&self) -> &Platform {
        &self.ctx.platform
    }

    fn ps(&self, arguments: &str) -> Result<String, ToolError> {
        let args: PsArgs = decode(arguments)?;
        let no_match = NoMatch::exit_code(1, NO_MATCHING_PROCESSES);

        if let Some(user) = args.user() {
            let inv = CommandInvocation::new("ps").arg("-u").arg(user);
            return self.ctx.run(ToolName::Ps, inv, Some(&no_match));
        }
        if let Some(name) = args.name() {
            let inv = CommandInvocation::new("pgrep").arg("-af").arg(name);
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
        let mut inv = CommandInvocation::new("wget");
        if let Some(out) = args.output_file() {
            inv = inv.arg("-O").arg(out);
        }
        inv = inv.arg(args.url());
        self.ctx.run(ToolName::Wget, inv, None)?;
        Ok(args.success_message())
    }

    fn ss(&self, arguments: &str) -> Result<String, ToolError> {
        let args: SsArgs = decode(arguments)?;
        let mut inv = CommandInvocation::new("ss");
        inv = match (args.options.is_empty(), args.protocol_flag()) {
            (false, flag) => inv.args(args.options.iter().cloned()).args(flag),
            (true, Some(flag)) => inv.arg("-an").arg(flag),
            (true, None) => inv.arg("-tan"),
        };
        if let Some(port) = args.port() {
            let port = format!(":{}", port);
            inv = inv.args(["(", "sport", "=", port.as_str(), "or", "dport", "=", port.as_str(), ")"]);
        }
        self.ctx.run(ToolName::Ss, inv, None)
    }

    fn lsof(&self, arguments: &str) -> Result<String, ToolError> {
        let args: LsofArgs = decode(arguments)?;
        let no_match = NoMatch::exit_code(1, NO_MATCHING_PROCESSES);
        let inv = unix::lsof(&args, |port| format!(":{}", port));
        self.ctx.run(ToolName::Lsof, inv, Some(&no_match))
    }
}
