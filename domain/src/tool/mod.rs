//! Tool domain module
//!
//! Everything the agent knows about its six diagnostic tools without
//! touching the operating system.
//!
//! ```text
//! ToolCall.arguments ──decode──▶ PsArgs / FindArgs / ...
//!                                     │  (platform executor)
//!                                     ▼
//!                              CommandInvocation ──run──▶ CommandOutcome
//!                                                              │ classify
//!                                                              ▼
//!                                              Result<String, ToolError> ──▶ Observation
//! ```
//!
//! # Key Types
//!
//! - [`ToolName`] — the closed set of tool names
//! - [`ToolSpec`] — the Command Descriptor Catalog offered to the model
//! - [`arguments`] — typed per-tool arguments, validated at decode time
//! - [`CommandInvocation`] / [`CommandOutcome`] — a child process as a value
//! - [`classify`] — pure exit-code classification
//! - [`ToolError`] / [`Observation`] — the per-call failure taxonomy and its rendering

pub mod arguments;
pub mod entities;
pub mod invocation;
pub mod value_objects;

pub use arguments::{FindArgs, GrepArgs, LsofArgs, PsArgs, SsArgs, ToolArguments, WgetArgs, decode};
pub use entities::{ToolDefinition, ToolName, ToolParameter, ToolSpec};
pub use invocation::{CommandInvocation, CommandOutcome, NoMatch, NoMatchSignal, classify};
pub use value_objects::{Observation, PolicyDenial, ToolError};
