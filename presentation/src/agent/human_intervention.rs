//! Console confirmation gate.
//!
//! Shown before every tool call:
//!
//! ```text
//! Do you want to execute this command? [Y/n]:
//! ```
//!
//! Only `n` / `no` decline; a blank line approves.

use async_trait::async_trait;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use sysprobe_application::{ConfirmationError, ConfirmationPort};
use sysprobe_domain::{HumanDecision, ToolCall};

pub const CONFIRMATION_PROMPT: &str = "Do you want to execute this command? [Y/n]: ";

enum ReplySource {
    Stdin,
    Reader(Mutex<Box<dyn BufRead + Send>>),
}

/// Reads yes/no answers line by line, from stdin or any [`BufRead`].
pub struct ConsoleConfirmation {
    source: ReplySource,
}

impl ConsoleConfirmation {
    pub fn stdin() -> Self {
        Self {
            source: ReplySource::Stdin,
        }
    }

    pub fn with_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            source: ReplySource::Reader(Mutex::new(Box::new(reader))),
        }
    }

    fn read_reply(&self) -> Result<String, ConfirmationError> {
        print!("{}", CONFIRMATION_PROMPT.yellow().bold());
        io::stdout()
            .flush()
            .map_err(|e| ConfirmationError::Io(format!("Failed to flush stdout: {}", e)))?;

        let mut reply = String::new();
        let read = match &self.source {
            ReplySource::Stdin => io::stdin().read_line(&mut reply),
            ReplySource::Reader(reader) => reader
                .lock()
                .map_err(|_| ConfirmationError::Io("input reader poisoned".to_string()))?
                .read_line(&mut reply),
        }
        .map_err(|e| ConfirmationError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            println!();
            return Err(ConfirmationError::Closed);
        }
        Ok(reply)
    }
}

#[async_trait]
impl ConfirmationPort for ConsoleConfirmation {
    async fn confirm(&self, _call: &ToolCall) -> Result<HumanDecision, ConfirmationError> {
        let decision = HumanDecision::from_reply(&self.read_reply()?);
        if !decision.is_approved() {
            println!("{}", "✗ Skipped".dimmed());
        }
        Ok(decision)
    }
}
