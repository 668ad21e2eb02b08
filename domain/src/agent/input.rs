//! Interpretation of what the human types.

use serde::{Deserialize, Serialize};

/// Outcome of the confirmation gate for one tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanDecision {
    Approve,
    Reject,
}

impl HumanDecision {
    /// Parse a reply to the yes/no prompt.
    ///
    /// Only `n` / `no` (any case, surrounding whitespace ignored) decline.
    /// Everything else, including a blank line, approves.
    pub fn from_reply(reply: &str) -> Self {
        let reply = reply.trim();
        if reply.eq_ignore_ascii_case("n") || reply.eq_ignore_ascii_case("no") {
            HumanDecision::Reject
        } else {
            HumanDecision::Approve
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, HumanDecision::Approve)
    }
}

/// `exit` or `quit`, any case.
pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}
