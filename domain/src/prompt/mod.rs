//! Prompt domain
//!
//! The system prompt that frames every session as a ReAct cycle.

pub mod agent;

pub use agent::AgentPromptTemplate;
