//! Operating system the agent is running on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target platform for tool execution, detected once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Any OS without a dedicated executor, by its `std::env::consts::OS` name
    Other(String),
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name() {
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
        assert_eq!(
            Platform::from_os_name("freebsd"),
            Platform::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_current_round_trips() {
        assert_eq!(Platform::current().as_str(), std::env::consts::OS);
    }
}
