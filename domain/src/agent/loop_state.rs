//! States of the agent loop controller.

use serde::{Deserialize, Serialize};

/// Where the agent loop currently is.
///
/// ```text
/// AwaitingUserInput ──▶ AwaitingModelResponse ──▶ ConfirmingTool ──▶ ExecutingTool
///        ▲   │                 │   ▲                   ▲                  │
///        │   ▼                 │   └───────────────────┼──────────────────┤
///        │ SessionEnded        ▼                       └──────────────────┘
///        └────────────── TurnComplete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentLoopState {
    /// Waiting for the next line from the user (initial)
    AwaitingUserInput,
    /// Model client invoked with the full conversation
    AwaitingModelResponse,
    /// Asking the human to approve a pending tool call
    ConfirmingTool,
    /// Running an approved tool call
    ExecutingTool,
    /// Final answer emitted
    TurnComplete,
    /// Terminal
    SessionEnded,
}

impl AgentLoopState {
    pub fn as_str(&self) -> &str {
        match self {
            AgentLoopState::AwaitingUserInput => "awaiting_user_input",
            AgentLoopState::AwaitingModelResponse => "awaiting_model_response",
            AgentLoopState::ConfirmingTool => "confirming_tool",
            AgentLoopState::ExecutingTool => "executing_tool",
            AgentLoopState::TurnComplete => "turn_complete",
            AgentLoopState::SessionEnded => "session_ended",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentLoopState::SessionEnded)
    }
}

impl std::fmt::Display for AgentLoopState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_session_ended_is_terminal() {
        assert!(AgentLoopState::SessionEnded.is_terminal());
        assert!(!AgentLoopState::TurnComplete.is_terminal());
        assert!(!AgentLoopState::AwaitingUserInput.is_terminal());
    }

    #[test]
    fn test_serde_names_match_as_str() {
        let json = serde_json::to_string(&AgentLoopState::ConfirmingTool).unwrap();
        assert_eq!(json, "\"confirming_tool\"");
    }
}
