//! Child-process invocations as plain values.
//!
//! Platform executors build a [`CommandInvocation`], a process runner turns
//! it into a [`CommandOutcome`], and [`classify`] maps that outcome to an
//! observation or a [`ToolError`] without touching the OS.

use super::value_objects::ToolError;
use std::fmt;

/// A command and its argv, before it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub invocation: CommandInvocation,
    /// stdout followed by stderr
    pub output: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn new(invocation: CommandInvocation, output: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            invocation,
            output: output.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// How a tool signals "nothing found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchSignal {
    /// A reserved nonzero exit code
    ExitCode(i32),
    /// Exit 0 with blank output
    EmptyOutput,
    /// Exit 0 with a fixed banner in the output
    Banner(&'static str),
}

/// A "no matches" rule and the sentence reported when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatch {
    pub signal: NoMatchSignal,
    pub message: String,
}

impl NoMatch {
    pub fn exit_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            signal: NoMatchSignal::ExitCode(code),
            message: message.into(),
        }
    }

    pub fn empty_output(message: impl Into<String>) -> Self {
        Self {
            signal: NoMatchSignal::EmptyOutput,
            message: message.into(),
        }
    }

    pub fn banner(banner: &'static str, message: impl Into<String>) -> Self {
        Self {
            signal: NoMatchSignal::Banner(banner),
            message: message.into(),
        }
    }

    fn matches(&self, outcome: &CommandOutcome) -> bool {
        match self.signal {
            NoMatchSignal::ExitCode(code) => outcome.exit_code == Some(code),
            NoMatchSignal::EmptyOutput => outcome.success() && outcome.output.trim().is_empty(),
            NoMatchSignal::Banner(banner) => outcome.success() && outcome.output.contains(banner),
        }
    }
}

/// Map a finished process to its observation text.
///
/// - the no-match rule fires: the rule's sentence
/// - exit 0: the captured output
/// - anything else: [`ToolError::Execution`] carrying the output
pub fn classify(outcome: CommandOutcome, no_match: Option<&NoMatch>) -> Result<String, ToolError> {
    if let Some(rule) = no_match
        && rule.matches(&outcome)
    {
        return Ok(rule.message.clone());
    }
    if outcome.success() {
        return Ok(outcome.output);
    }
    Err(ToolError::Execution {
        command: outcome.invocation.to_string(),
        exit_code: outcome.exit_code,
        output: outcome.output,
    })
}
