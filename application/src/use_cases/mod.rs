//! Use cases (application services)
//!
//! - [`dispatch_tool`] — security policy + routing to the platform executor
//! - [`run_agent`] — the interactive ReAct loop controller

pub mod dispatch_tool;
pub mod run_agent;
