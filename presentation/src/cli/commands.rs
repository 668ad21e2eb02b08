//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for sysprobe
#[derive(Parser, Debug)]
#[command(name = "sysprobe")]
#[command(author, version, about = "System diagnostics agent - ask about processes, files and sockets")]
#[command(long_about = r#"
sysprobe is an interactive ReAct agent for system diagnostics.

Describe what you want to know in plain language. The model answers by
calling local tools (ps, find, grep, wget, ss, lsof); every call is shown
to you and only runs after you confirm it.

Configuration is loaded from (highest priority first):
1. Command-line options below
2. AGENT_API_KEY, AGENT_MODEL, AGENT_BASE_URL, AGENT_ALLOWED_TOOLS, AGENT_DENIED_TOOLS
3. --config <path>               Explicit config file
4. ./sysprobe.toml               Project-level config
5. ~/.config/sysprobe/config.toml   Global config

Example:
  sysprobe
  sysprobe --model deepseek-chat --deny wget
  sysprobe --allow ps,lsof -vv
"#)]
pub struct Cli {
    /// Model to send requests to
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Only allow these tools (comma-separated or repeated)
    #[arg(long, value_name = "TOOL", value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Never allow these tools (comma-separated or repeated)
    #[arg(long, value_name = "TOOL", value_delimiter = ',')]
    pub deny: Vec<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// `--allow` values, or `None` when the flag was not given.
    pub fn allow_override(&self) -> Option<Vec<String>> {
        (!self.allow.is_empty()).then(|| self.allow.clone())
    }

    /// `--deny` values, or `None` when the flag was not given.
    pub fn deny_override(&self) -> Option<Vec<String>> {
        (!self.deny.is_empty()).then(|| self.deny.clone())
    }
}
