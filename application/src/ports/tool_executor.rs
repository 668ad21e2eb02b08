//! Tool Executor port
//!
//! Defines the interface the agent loop uses to run an approved tool call.

use async_trait::async_trait;
use sysprobe_domain::{ToolCall, ToolError, ToolSpec};

/// Port for tool execution
///
/// Every failure comes back as a [`ToolError`]; the caller renders it into
/// an observation. Implementations never retry.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Execute a tool call synchronously (blocking)
    fn execute_sync(&self, call: &ToolCall) -> Result<String, ToolError>;

    /// Execute a tool call
    ///
    /// Default implementation runs [`execute_sync`](Self::execute_sync) in
    /// place: the session is strictly sequential.
    async fn execute(&self, call: &ToolCall) -> Result<String, ToolError> {
        self.execute_sync(call)
    }
}
