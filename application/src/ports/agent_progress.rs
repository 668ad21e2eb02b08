//! Agent loop progress port.
//!
//! [`AgentProgressNotifier`] is an **output port** that the presentation layer
//! implements to show the ReAct cycle to the user as it happens.
//!
//! # Example Implementation
//!
//! ```ignore
//! use sysprobe_application::ports::agent_progress::AgentProgressNotifier;
//!
//! struct MyProgress;
//!
//! impl AgentProgressNotifier for MyProgress {
//!     fn on_final_answer(&self, answer: &str) {
//!         println!("{}", answer);
//!     }
//! }
//! ```

use crate::ports::human_intervention::ConfirmationError;
use crate::ports::model_client::ModelError;
use sysprobe_domain::{AgentLoopState, Observation, ToolCall, ToolError};

/// Progress notifier for the agent loop.
///
/// All methods have default no-op implementations, so implementers only
/// need to override the callbacks they care about.
pub trait AgentProgressNotifier: Send + Sync {
    /// Called on every state machine transition
    fn on_state_change(&self, _state: &AgentLoopState) {}

    /// Called right before the model is invoked
    fn on_thinking_start(&self) {}

    /// Called when the model call returns, successfully or not
    fn on_thinking_end(&self) {}

    /// Called when an assistant message carries reasoning text alongside tool calls
    fn on_thought(&self, _thought: &str) {}

    /// Called before the confirmation prompt for a tool call
    fn on_tool_call(&self, _call: &ToolCall) {}

    /// Called when a tool call is declined
    fn on_tool_cancelled(&self, _call: &ToolCall) {}

    /// Called when an approved tool call fails
    fn on_tool_error(&self, _call: &ToolCall, _error: &ToolError) {}

    /// Called when an observation has been recorded
    fn on_observation(&self, _call: &ToolCall, _observation: &Observation) {}

    /// Called when the confirmation prompt could not be answered
    fn on_confirmation_failed(&self, _error: &ConfirmationError) {}

    /// Called with the final answer of a turn (scaffolding already removed)
    fn on_final_answer(&self, _answer: &str) {}

    /// Called when the model call fails
    fn on_model_error(&self, _error: &ModelError) {}
}
