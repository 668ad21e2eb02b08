//! Human-in-the-Loop handling for the RunAgent use case.
//!
//! Walks the tool calls of the latest assistant message one at a time:
//! confirm, then dispatch or record the cancellation, in issue order.

use super::RunAgentUseCase;
use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::human_intervention::ConfirmationError;
use sysprobe_domain::{AgentLoopState, HumanDecision, Observation, ToolCall};
use tracing::{info, warn};

impl RunAgentUseCase {
    /// Confirm and run every unanswered tool call of the latest assistant message.
    ///
    /// Returns `Err` when the confirmation prompt itself fails. In that case
    /// the failing call and every later one are recorded as cancelled.
    pub(super) async fn process_pending_tool_calls(
        &mut self,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<(), ConfirmationError> {
        while let Some(call) = self.conversation.pending_tool_calls().first().cloned() {
            self.transition(AgentLoopState::ConfirmingTool, progress);
            progress.on_tool_call(&call);

            match self.confirmation.confirm(&call).await {
                Ok(HumanDecision::Approve) => {
                    self.transition(AgentLoopState::ExecutingTool, progress);
                    self.execute_tool_call(&call, progress).await;
                }
                Ok(HumanDecision::Reject) => {
                    info!(tool = %call.name, "Tool call declined by user");
                    self.record_cancelled(&call, progress);
                }
                Err(e) => {
                    warn!(tool = %call.name, error = %e, "Confirmation failed, cancelling remaining tool calls");
                    progress.on_confirmation_failed(&e);
                    self.cancel_pending(progress);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    async fn execute_tool_call(&mut self, call: &ToolCall, progress: &dyn AgentProgressNotifier) {
        let result = self.tool_executor.execute(call).await;
        if let Err(e) = &result {
            progress.on_tool_error(call, e);
        }
        self.stats.tool_calls_executed += 1;
        self.record_observation(call, Observation::from(result), progress);
    }

    fn record_cancelled(&mut self, call: &ToolCall, progress: &dyn AgentProgressNotifier) {
        progress.on_tool_cancelled(call);
        self.stats.tool_calls_declined += 1;
        self.record_observation(call, Observation::cancelled(), progress);
    }

    fn cancel_pending(&mut self, progress: &dyn AgentProgressNotifier) {
        let pending = self.conversation.pending_tool_calls().to_vec();
        for call in &pending {
            self.record_cancelled(call, progress);
        }
    }

    fn record_observation(
        &mut self,
        call: &ToolCall,
        observation: Observation,
        progress: &dyn AgentProgressNotifier,
    ) {
        progress.on_observation(call, &observation);
        self.conversation
            .append_tool_observation(&call.id, observation.into_string());
    }
}
