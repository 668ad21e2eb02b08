//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod agent_progress;
pub mod human_intervention;
pub mod model_client;
pub mod platform_executor;
pub mod tool_executor;
pub mod user_input;
