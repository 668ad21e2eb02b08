//! Application-level configuration.
//!
//! - [`AgentSettings`] — the process-wide settings the agent loop consumes,
//!   produced by the infrastructure config loader

pub mod settings;

pub use settings::AgentSettings;
