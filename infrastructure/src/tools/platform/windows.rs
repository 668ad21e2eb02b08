//! Windows executor. Requests are served by `tasklist`, `dir`, `findstr`,
//! PowerShell and `netstat`; every substitution is noted in the output.

use super::{
    CommandContext, NO_MATCHING_FILES, NO_MATCHING_LINES, NO_MATCHING_PROCESSES,
    no_process_on_port, substituted,
};
use crate::tools::command::ProcessRunner;
use std::sync::Arc;
use sysprobe_application::PlatformExecutor;
use sysprobe_domain::tool::{FindArgs, GrepArgs, LsofArgs, PsArgs, SsArgs, WgetArgs, decode};
use sysprobe_domain::{CommandInvocation, NoMatch, Platform, ToolError, ToolName};

const TASKLIST_EMPTY_BANNER: &str = "INFO: No tasks";

pub struct WindowsExecutor {
    ctx: CommandContext,
}

impl WindowsExecutor {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            ctx: CommandContext::new(Platform::Windows, runner),
        }
    }

    /// `netstat -ano`, keeping only rows whose local or foreign address is on `port`.
    fn netstat_port(&self, requested: ToolName, port: u32, protocol: Option<&str>) -> Result<String, ToolError> {
        let mut inv = CommandInvocation::new("netstat").arg("-ano");
        if let Some(protocol) = protocol {
            inv = inv.arg("-p").arg(protocol);
        }
        let output = self.ctx.run(requested, inv.clone(), None)?;

        let rows = filter_netstat_rows(&output, port);
        let body = if rows.is_empty() {
            no_process_on_port(port)
        } else {
            rows.join("\n")
        };
        Ok(substituted(requested, &self.ctx.platform, &inv, &body))
    }
}

impl PlatformExecutor for WindowsExecutor {
    fn platform(&self) -> &Platform {
        &self.ctx.platform
    }

    fn ps(&self, arguments: &str) -> Result<String, ToolError> {
        let args: PsArgs = decode(arguments)?;
        let mut inv = CommandInvocation::new("tasklist")
            .args(args.options.iter().cloned())
            .arg("/FO")
            .arg("CSV");

        if let Some(user) = args.user() {
            inv = inv.arg("/FI").arg(format!("USERNAME eq {}", user));
        } else if let Some(name) = args.name() {
            inv = inv.arg("/FI").arg(format!("IMAGENAME eq {}", image_pattern(name)));
        } else if let Some(pid) = args.pid {
            inv = inv.arg("/FI").arg(format!("PID eq {}", pid));
        }

        let no_match = NoMatch::banner(TASKLIST_EMPTY_BANNER, NO_MATCHING_PROCESSES);
        let body = self.ctx.run(ToolName::Ps, inv.clone(), Some(&no_match))?;
        Ok(substituted(ToolName::Ps, &self.ctx.platform, &inv, &body))
    }

    fn find(&self, arguments: &str) -> Result<String, ToolError> {
        let args: FindArgs = decode(arguments)?;
        let mut inv = CommandInvocation::new("cmd").args(["/c", "dir", "/s", "/b"]);
        match args.kind() {
            Some("d") => inv = inv.arg("/a:d"),
            Some("f") => inv = inv.arg("/a:-d"),
            _ => {}
        }
        inv = inv.arg(join_windows_path(args.path(), args.name.trim()));

        let no_match = NoMatch::exit_code(1, NO_MATCHING_FILES);
        let mut body = self.ctx.run(ToolName::Find, inv.clone(), Some(&no_match))?;
        if args.maxdepth().is_some() {
            body = format!("Note: 'maxdepth' is ignored on windows.\n{}", body);
        }
        Ok(substituted(ToolName::Find, &self.ctx.platform, &inv, &body))
    }

    fn grep(&self, arguments: &str) -> Result<String, ToolError> {
        let args: GrepArgs = decode(arguments)?;
        let mut inv = CommandInvocation::new("findstr");
        if args.recursive {
            inv = inv.arg("/S");
        }
        if args.ignore_case {
            inv = inv.arg("/I");
        }
        inv = inv
            .arg("/R")
            .arg(format!("/C:{}", args.pattern))
            .args(args.files());

        let no_match = NoMatch::exit_code(1, NO_MATCHING_LINES);
        let output = self.ctx.run(ToolName::Grep, inv.clone(), Some(&no_match))?;
        let body = if args.count_only && output != NO_MATCHING_LINES {
            output.lines().filter(|l| !l.trim().is_empty()).count().to_string()
        } else {
            output
        };
        Ok(substituted(ToolName::Grep, &self.ctx.platform, &inv, &body))
    }

    fn wget(&self, arguments: &str) -> Result<String, ToolError> {
        let args: WgetArgs = decode(arguments)?;
        let out = args
            .output_file()
            .map(str::to_string)
            .unwrap_or_else(|| remote_file_name(args.url()));
        let script = format!(
            "Invoke-WebRequest -Uri '{}' -OutFile '{}'",
            powershell_quote(args.url()),
            powershell_quote(&out)
        );
        let inv = CommandInvocation::new("powershell")
            .arg("-NoProfile")
            .arg("-Command")
            .arg(script);

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
                .with_hint("Pass a port to inspect it with netstat"));
        };
        let protocol = match args.protocol_flag() {
            Some("-t") => Some("TCP"),
            Some("-u") => Some("UDP"),
            _ => None,
        };
        self.netstat_port(ToolName::Ss, port, protocol)
    }

    fn lsof(&self, arguments: &str) -> Result<String, ToolError> {
        let args: LsofArgs = decode(arguments)?;
        let Some(port) = args.port() else {
            return Err(ToolError::unsupported(ToolName::Lsof.as_str(), self.ctx.platform.as_str())
                .with_hint("Only port lookups are available; pass 'port'"));
        };
        self.netstat_port(ToolName::Lsof, port, None)
    }
}

/// `tasklist` image filter; bare names get a trailing wildcard.
fn image_pattern(name: &str) -> String {
    if name.contains('.') || name.contains('*') {
        name.to_string()
    } else {
        format!("{}*", name)
    }
}

fn join_windows_path(dir: &str, name: &str) -> String {
    if dir.ends_with('\\') || dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}\\{}", dir, name)
    }
}

/// Last path segment of `url`, without query or fragment.
fn remote_file_name(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let path = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);
    match path.split_once('/') {
        Some((_, tail)) => tail
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("download")
            .to_string(),
        None => "download".to_string(),
    }
}

fn powershell_quote(value: &str) -> String {
    value.replace('\'', "''")
}

/// Rows whose second or third column (local, foreign address) ends with `:port`.
fn filter_netstat_rows(output: &str, port: u32) -> Vec<&str> {
    let suffix = format!(":{}", port);
    output
        .lines()
        .filter(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            cols.len() >= 3 && (cols[1].ends_with(&suffix) || cols[2].ends_with(&suffix))
        })
        .collect()
}
