//! Run Agent use case
//!
//! The agent loop controller. It owns the [`Conversation`] and drives the
//! ReAct state machine:
//!
//! | State                   | On                          | Next                          |
//! |-------------------------|-----------------------------|-------------------------------|
//! | AwaitingUserInput       | exit keyword / end of input | SessionEnded                  |
//! |                         | blank line / Ctrl-C         | AwaitingUserInput             |
//! |                         | text                        | AwaitingModelResponse         |
//! | AwaitingModelResponse   | model error / no choices    | AwaitingUserInput             |
//! |                         | tool calls                  | ConfirmingTool (first call)   |
//! |                         | text only                   | TurnComplete                  |
//! | ConfirmingTool          | approve                     | ExecutingTool                 |
//! |                         | decline                     | next call or model            |
//! |                         | prompt failure              | AwaitingUserInput             |
//! | ExecutingTool           | observation recorded        | next call or model            |
//! | TurnComplete            |                             | AwaitingUserInput             |
//!
//! Everything runs on one control flow; tool calls from one assistant
//! message are confirmed and executed one at a time, in issue order.

mod hil;
mod types;

pub use types::{InputOutcome, RunAgentError, RunAgentOutput, TurnOutcome};

use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::human_intervention::ConfirmationPort;
use crate::ports::model_client::{ModelClient, ModelError};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::user_input::{UserInput, UserInputPort};
use std::sync::Arc;
use sysprobe_domain::{AgentLoopState, Conversation, Message, is_exit_keyword, strip_scaffolding};
use tracing::{debug, error, info};

/// Use case for running an interactive agent session
pub struct RunAgentUseCase {
    model_client: Arc<dyn ModelClient>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    confirmation: Arc<dyn ConfirmationPort>,
    conversation: Conversation,
    state: AgentLoopState,
    stats: RunAgentOutput,
}

impl RunAgentUseCase {
    /// Start a session whose conversation begins with `system_prompt`.
    pub fn new(
        model_client: Arc<dyn ModelClient>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        confirmation: Arc<dyn ConfirmationPort>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model_client,
            tool_executor,
            confirmation,
            conversation: Conversation::with_system_prompt(system_prompt),
            state: AgentLoopState::AwaitingUserInput,
            stats: RunAgentOutput::default(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> AgentLoopState {
        self.state
    }

    pub fn stats(&self) -> &RunAgentOutput {
        &self.stats
    }

    /// Run the outer loop until an exit keyword or end of input.
    pub async fn run_session(
        &mut self,
        input: &mut dyn UserInputPort,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<RunAgentOutput, RunAgentError> {
        info!(model = %self.model_client.model(), "Agent session started");

        while !self.state.is_terminal() {
            let read = match input.read_input() {
                Ok(read) => read,
                Err(e) => {
                    error!(error = %e, "Failed to read user input");
                    self.transition(AgentLoopState::SessionEnded, progress);
                    return Err(e.into());
                }
            };

            match read {
                UserInput::Line(line) => {
                    self.handle_input(&line, progress).await;
                }
                UserInput::Interrupted => {
                    debug!("Input interrupted, waiting for the next line");
                }
                UserInput::EndOfInput => {
                    self.transition(AgentLoopState::SessionEnded, progress);
                }
            }
        }

        info!(
            turns = self.stats.turns,
            tool_calls = self.stats.tool_calls_executed,
            "Agent session ended"
        );
        Ok(self.stats.clone())
    }

    /// Handle one line typed at the prompt.
    pub async fn handle_input(
        &mut self,
        line: &str,
        progress: &dyn AgentProgressNotifier,
    ) -> InputOutcome {
        let text = line.trim();
        if is_exit_keyword(text) {
            self.transition(AgentLoopState::SessionEnded, progress);
            return InputOutcome::Exit;
        }
        if text.is_empty() {
            return InputOutcome::Ignored;
        }

        self.conversation.append_user(text);
        self.stats.turns += 1;
        InputOutcome::Turn(self.run_turn(progress).await)
    }

    /// Inner ReAct cycle: call the model until it answers without tool calls.
    async fn run_turn(&mut self, progress: &dyn AgentProgressNotifier) -> TurnOutcome {
        loop {
            let message = match self.request_model_response(progress).await {
                Ok(message) => message,
                Err(e) => {
                    error!(error = %e, "Model call failed");
                    progress.on_model_error(&e);
                    self.stats.model_failures += 1;
                    self.transition(AgentLoopState::AwaitingUserInput, progress);
                    return TurnOutcome::ModelFailed(e);
                }
            };

            if !message.has_tool_calls() {
                let answer = strip_scaffolding(message.text_content()).to_string();
                self.conversation.append_assistant(message);
                progress.on_final_answer(&answer);
                self.stats.answered_turns += 1;
                self.transition(AgentLoopState::TurnComplete, progress);
                self.transition(AgentLoopState::AwaitingUserInput, progress);
                return TurnOutcome::Answered(answer);
            }

            let thought = message.text_content().trim();
            if !thought.is_empty() {
                progress.on_thought(thought);
            }
            debug!(tool_calls = message.tool_calls.len(), "Model requested tools");
            self.conversation.append_assistant(message);

            if let Err(e) = self.process_pending_tool_calls(progress).await {
                self.transition(AgentLoopState::AwaitingUserInput, progress);
                return TurnOutcome::ConfirmationFailed(e);
            }
        }
    }

    async fn request_model_response(
        &mut self,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<Message, ModelError> {
        self.transition(AgentLoopState::AwaitingModelResponse, progress);
        progress.on_thinking_start();
        let response = self
            .model_client
            .complete(self.conversation.snapshot(), self.tool_executor.tool_spec())
            .await;
        progress.on_thinking_end();
        response?.into_first_choice()
    }

    fn transition(&mut self, next: AgentLoopState, progress: &dyn AgentProgressNotifier) {
        debug!(from = %self.state, to = %next, "State transition");
        self.state = next;
        progress.on_state_change(&next);
    }
}
