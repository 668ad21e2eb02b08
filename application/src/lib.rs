//! Application layer for sysprobe
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgentSettings;
pub use ports::{
    agent_progress::AgentProgressNotifier,
    human_intervention::{ConfirmationError, ConfirmationPort},
    model_client::{ModelClient, ModelError, ModelResponse},
    platform_executor::PlatformExecutor,
    tool_executor::ToolExecutorPort,
    user_input::{InputError, UserInput, UserInputPort},
};
pub use use_cases::dispatch_tool::ToolDispatcher;
pub use use_cases::run_agent::{
    InputOutcome, RunAgentError, RunAgentOutput, RunAgentUseCase, TurnOutcome,
};
