//! Platform Executor port
//!
//! One implementation per operating system, all with the same six
//! capabilities. Each capability takes the raw JSON arguments of a tool
//! call, runs the matching command synchronously, and returns the
//! observation text or a [`ToolError`].
//!
//! The implementation is chosen once at startup and injected into the
//! [`ToolDispatcher`](crate::use_cases::dispatch_tool::ToolDispatcher), which
//! never branches on the platform itself.

use sysprobe_domain::{Platform, ToolError, ToolName};

pub trait PlatformExecutor: Send + Sync {
    /// Platform this executor targets
    fn platform(&self) -> &Platform;

    /// List processes
    fn ps(&self, arguments: &str) -> Result<String, ToolError>;

    /// Search the file system by name
    fn find(&self, arguments: &str) -> Result<String, ToolError>;

    /// Search file contents
    fn grep(&self, arguments: &str) -> Result<String, ToolError>;

    /// Download a URL
    fn wget(&self, arguments: &str) -> Result<String, ToolError>;

    /// Socket statistics
    fn ss(&self, arguments: &str) -> Result<String, ToolError>;

    /// Open files and the processes holding them
    fn lsof(&self, arguments: &str) -> Result<String, ToolError>;

    /// Route to the capability for `tool`.
    fn run(&self, tool: ToolName, arguments: &str) -> Result<String, ToolError> {
        match tool {
            ToolName::Ps => self.ps(arguments),
            ToolName::Find => self.find(arguments),
            ToolName::Grep => self.grep(arguments),
            ToolName::Wget => self.wget(arguments),
            ToolName::Ss => self.ss(arguments),
            ToolName::Lsof => self.lsof(arguments),
        }
    }
}
