//! Type definitions for the RunAgent use case.

use crate::ports::human_intervention::ConfirmationError;
use crate::ports::model_client::ModelError;
use crate::ports::user_input::InputError;
use thiserror::Error;

/// Errors that end a session early.
///
/// Model and tool failures never show up here: the loop recovers from them.
#[derive(Error, Debug)]
pub enum RunAgentError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// How one inner ReAct cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model answered without tool calls
    Answered(String),
    /// The model call failed or returned no choices
    ModelFailed(ModelError),
    /// The confirmation prompt could not be answered; pending calls were declined
    ConfirmationFailed(ConfirmationError),
}

/// What happened to one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Blank line; nothing sent to the model
    Ignored,
    /// Exit keyword
    Exit,
    /// A full turn ran
    Turn(TurnOutcome),
}

/// Counters for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunAgentOutput {
    /// User turns sent to the model
    pub turns: usize,
    /// Turns that ended with a final answer
    pub answered_turns: usize,
    /// Model calls that failed
    pub model_failures: usize,
    /// Tool calls approved and dispatched
    pub tool_calls_executed: usize,
    /// Tool calls declined or cancelled
    pub tool_calls_declined: usize,
}
