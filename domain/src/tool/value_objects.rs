//! Tool domain value objects — the per-call error taxonomy and the
//! normalized [`Observation`] fed back to the model.
//!
//! Every [`ToolError`] is recoverable: the agent loop renders it into an
//! Observation so the model can react. None of them end the turn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder recorded instead of an empty observation.
pub const EMPTY_OBSERVATION: &str = "(No output)";

/// Observation recorded when the human declines a tool call.
pub const CANCELLED_OBSERVATION: &str = "User cancelled the execution of this tool.";

/// Why the security policy rejected a tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDenial {
    Blacklisted,
    NotWhitelisted,
}

impl std::fmt::Display for PolicyDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyDenial::Blacklisted => write!(f, "is in the configured blacklist"),
            PolicyDenial::NotWhitelisted => write!(f, "is not in the configured whitelist"),
        }
    }
}

/// Error that occurred while dispatching or executing one tool call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Malformed argument JSON or a violated required-field constraint
    #[error("invalid arguments for '{tool}': {message}")]
    Argument { tool: String, message: String },

    /// Rejected by the allow/deny policy; no executor was invoked
    #[error("tool '{tool}' {reason}")]
    Policy { tool: String, reason: PolicyDenial },

    /// The process could not be started, or exited with an unexpected code
    #[error("command '{command}' failed ({}): {}", exit_label(.exit_code), output_label(.output))]
    Execution {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    /// The capability has no equivalent on this platform
    #[error("'{capability}' is not supported on {platform}{}", hint_label(.hint))]
    Unsupported {
        capability: String,
        platform: String,
        hint: Option<String>,
    },

    /// The name is not in the Command Descriptor Catalog
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit status {}", code),
        None => "did not exit normally".to_string(),
    }
}

fn output_label(output: &str) -> &str {
    let trimmed = output.trim();
    if trimmed.is_empty() { "(no output)" } else { trimmed }
}

fn hint_label(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(". {}", hint),
        None => String::new(),
    }
}

impl ToolError {
    pub fn argument(tool: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::Argument {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn unsupported(capability: impl Into<String>, platform: impl Into<String>) -> Self {
        ToolError::Unsupported {
            capability: capability.into(),
            platform: platform.into(),
            hint: None,
        }
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            ToolError::Unsupported {
                capability,
                platform,
                ..
            } => ToolError::Unsupported {
                capability,
                platform,
                hint: Some(hint.into()),
            },
            other => other,
        }
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::Argument { .. } => "INVALID_ARGUMENT",
            ToolError::Policy { .. } => "PERMISSION_DENIED",
            ToolError::Execution { .. } => "EXECUTION_FAILED",
            ToolError::Unsupported { .. } => "UNSUPPORTED",
            ToolError::UnknownTool(_) => "NOT_FOUND",
        }
    }
}

/// Normalized text result of one tool call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation(String);

impl Observation {
    /// Wrap tool output, substituting [`EMPTY_OBSERVATION`] for empty text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self(EMPTY_OBSERVATION.to_string())
        } else {
            Self(text)
        }
    }

    /// Observation for a tool call the human declined.
    pub fn cancelled() -> Self {
        Self(CANCELLED_OBSERVATION.to_string())
    }

    /// Render a tool failure so the model can see it.
    pub fn from_error(error: &ToolError) -> Self {
        Self::new(format!("Error: {}", error))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Result<String, ToolError>> for Observation {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(output) => Observation::new(output),
            Err(e) => Observation::from_error(&e),
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_observation_gets_placeholder() {
        assert_eq!(Observation::new("").as_str(), EMPTY_OBSERVATION);
        assert_eq!(Observation::new("x").as_str(), "x");
        assert_eq!(Observation::from(Ok(String::new())).as_str(), EMPTY_OBSERVATION);
    }

    #[test]
    fn test_cancelled_observation_text() {
        assert_eq!(
            Observation::cancelled().as_str(),
            "User cancelled the execution of this tool."
        );
    }

    #[test]
    fn test_policy_error_names_reason() {
        let blacklisted = ToolError::Policy {
            tool: "wget".to_string(),
            reason: PolicyDenial::Blacklisted,
        };
        let not_whitelisted = ToolError::Policy {
            tool: "wget".to_string(),
            reason: PolicyDenial::NotWhitelisted,
        };
        assert_eq!(
            blacklisted.to_string(),
            "tool 'wget' is in the configured blacklist"
        );
        assert_eq!(
            not_whitelisted.to_string(),
            "tool 'wget' is not in the configured whitelist"
        );
    }

    #[test]
    fn test_execution_error_display() {
        let err = ToolError::Execution {
            command: "grep foo missing.txt".to_string(),
            exit_code: Some(2),
            output: "grep: missing.txt: No such file or directory\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command 'grep foo missing.txt' failed (exit status 2): grep: missing.txt: No such file or directory"
        );

        let killed = ToolError::Execution {
            command: "ps".to_string(),
            exit_code: None,
            output: String::new(),
        };
        assert!(killed.to_string().contains("did not exit normally"));
        assert!(killed.to_string().contains("(no output)"));
    }

    #[test]
    fn test_unsupported_with_hint() {
        let err = ToolError::unsupported("ss", "windows").with_hint("Use 'lsof' with a port");
        assert_eq!(
            err.to_string(),
            "'ss' is not supported on windows. Use 'lsof' with a port"
        );
        assert_eq!(err.code(), "UNSUPPORTED");
    }

    #[test]
    fn test_error_observation_is_prefixed() {
        let obs = Observation::from_error(&ToolError::UnknownTool("rm".to_string()));
        assert_eq!(obs.as_str(), "Error: unknown tool: rm");
    }
}
