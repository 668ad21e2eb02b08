//! Domain layer for sysprobe
//!
//! This crate contains the core rules of the agent: the conversation log,
//! the tool security policy, typed tool arguments, and the pure
//! classification of process results. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## ReAct cycle
//!
//! The model alternates Thought → Action (tool call) → Observation until it
//! answers without requesting a tool. Every step is appended to a
//! [`Conversation`].
//!
//! ## Security policy
//!
//! [`policy::decide`] gates every tool name: deny always wins, and an empty
//! allow list means "no restriction".

pub mod agent;
pub mod conversation;
pub mod core;
pub mod policy;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentLoopState, HumanDecision, is_exit_keyword, strip_scaffolding};
pub use conversation::{Conversation, Message, Role, ToolCall};
pub use self::core::{platform::Platform, string::truncate_output};
pub use policy::{PolicyDecision, ToolPolicy};
pub use prompt::AgentPromptTemplate;
pub use tool::{
    CommandInvocation, CommandOutcome, NoMatch, Observation, PolicyDenial, ToolArguments,
    ToolDefinition, ToolError, ToolName, ToolParameter, ToolSpec, classify,
};
