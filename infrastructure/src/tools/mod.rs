//! Diagnostic tools offered to the model
//!
//! - `catalog`: the six tool definitions (name, description, parameters)
//! - `schema`: JSON Schema rendering of the catalog for the chat API
//! - `command`: the process runner every executor spawns through
//! - `platform`: one executor per operating system

pub mod catalog;
pub mod command;
pub mod platform;
pub mod schema;

pub use command::{ProcessRunner, SystemProcessRunner};
pub use platform::{
    LinuxExecutor, MacOsExecutor, UnsupportedExecutor, WindowsExecutor, select_executor,
};
pub use schema::JsonSchemaToolConverter;

use sysprobe_domain::ToolSpec;

/// The catalog in the order it is offered to the model: ps, find, grep,
/// wget, ss, lsof.
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(catalog::ps_definition())
        .register(catalog::find_definition())
        .register(catalog::grep_definition())
        .register(catalog::wget_definition())
        .register(catalog::ss_definition())
        .register(catalog::lsof_definition())
}
