//! Recording fake process runner for executor tests.

use crate::tools::command::ProcessRunner;
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use sysprobe_domain::{CommandInvocation, CommandOutcome, ToolError};

/// Returns scripted `(output, exit_code)` pairs in order, then `("", 0)`.
pub(crate) struct FakeProcessRunner {
    responses: Mutex<VecDeque<(String, Option<i32>)>>,
    invocations: Mutex<Vec<CommandInvocation>>,
    missing: HashSet<String>,
}

impl FakeProcessRunner {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            invocations: Mutex::new(Vec::new()),
            missing: HashSet::new(),
        }
    }

    pub(crate) fn with_response(self, output: &str, exit_code: i32) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((output.to_string(), Some(exit_code)));
        self
    }

    pub(crate) fn with_missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub(crate) fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Program followed by its arguments, for the most recent run.
    pub(crate) fn last_argv(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .map(|inv| {
                std::iter::once(inv.program.clone())
                    .chain(inv.args.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutcome, ToolError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        let (output, exit_code) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((String::new(), Some(0)));
        Ok(CommandOutcome::new(invocation.clone(), output, exit_code))
    }

    fn is_available(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }
}

/// `["a", "b"]` as owned strings, for argv assertions.
pub(crate) fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
