//! Executor for operating systems without a dedicated implementation.

use sysprobe_application::PlatformExecutor;
use sysprobe_domain::{Platform, ToolError, ToolName};

/// Every capability reports [`ToolError::Unsupported`] without spawning anything.
pub struct UnsupportedExecutor {
    platform: Platform,
}

impl UnsupportedExecutor {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn unsupported(&self, tool: ToolName) -> Result<String, ToolError> {
        Err(ToolError::unsupported(tool.as_str(), self.platform.as_str()))
    }
}

impl PlatformExecutor for UnsupportedExecutor {
    fn platform(&self) -> &Platform {
        &self.platform
    }

    fn ps(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Ps)
    }

    fn find(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Find)
    }

    fn grep(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Grep)
    }

    fn wget(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Wget)
    }

    fn ss(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Ss)
    }

    fn lsof(&self, _arguments: &str) -> Result<String, ToolError> {
        self.unsupported(ToolName::Lsof)
    }
}
