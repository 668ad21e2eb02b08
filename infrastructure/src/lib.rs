//! Infrastructure layer for sysprobe
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration loading, the OpenAI-compatible model
//! client, the tool catalog and the per-OS platform executors.

pub mod config;
pub mod openai;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, ConfigOverrides, ConfigSources, FileConfig};
pub use openai::OpenAiCompatibleClient;
pub use tools::{
    JsonSchemaToolConverter, ProcessRunner, SystemProcessRunner, default_tool_spec,
    select_executor,
};
