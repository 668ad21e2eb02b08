//! Tool Dispatcher use case
//!
//! Routes one approved tool call through the security policy and on to the
//! platform executor selected at startup:
//!
//! 1. [`ToolPolicy::decide`] — a denial returns [`ToolError::Policy`] and no
//!    executor is touched
//! 2. catalog lookup — names outside the catalog return [`ToolError::UnknownTool`]
//! 3. [`PlatformExecutor::run`] — the executor decodes arguments and runs the command
//!
//! Failures are returned as-is. The dispatcher never retries.

use crate::ports::platform_executor::PlatformExecutor;
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use std::sync::Arc;
use sysprobe_domain::{
    PolicyDecision, PolicyDenial, ToolCall, ToolError, ToolName, ToolPolicy, ToolSpec,
};
use tracing::{debug, info, warn};

pub struct ToolDispatcher {
    policy: ToolPolicy,
    executor: Arc<dyn PlatformExecutor>,
    tool_spec: ToolSpec,
}

impl ToolDispatcher {
    pub fn new(policy: ToolPolicy, executor: Arc<dyn PlatformExecutor>, tool_spec: ToolSpec) -> Self {
        Self {
            policy,
            executor,
            tool_spec,
        }
    }

    pub fn policy(&self) -> &ToolPolicy {
        &self.policy
    }

    /// Dispatch one tool call.
    pub fn dispatch(&self, call: &ToolCall) -> Result<String, ToolError> {
        let reason = match self.policy.decide(&call.name) {
            PolicyDecision::Allowed => None,
            PolicyDecision::DeniedByBlacklist => Some(PolicyDenial::Blacklisted),
            PolicyDecision::DeniedNotInWhitelist => Some(PolicyDenial::NotWhitelisted),
        };
        if let Some(reason) = reason {
            warn!(tool = %call.name, %reason, "Tool call rejected by policy");
            return Err(ToolError::Policy {
                tool: call.name.clone(),
                reason,
            });
        }

        let tool = self
            .tool_spec
            .contains(&call.name)
            .then(|| call.name.parse::<ToolName>().ok())
            .flatten()
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;

        info!(
            tool = %tool,
            platform = %self.executor.platform(),
            "Dispatching tool call"
        );
        let result = self.executor.run(tool, &call.arguments);
        match &result {
            Ok(output) => debug!(tool = %tool, bytes = output.len(), "Tool call succeeded"),
            Err(e) => warn!(tool = %tool, code = e.code(), error = %e, "Tool call failed"),
        }
        result
    }
}

#[async_trait]
impl ToolExecutorPort for ToolDispatcher {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    fn execute_sync(&self, call: &ToolCall) -> Result<String, ToolError> {
        self.dispatch(call)
    }
}
