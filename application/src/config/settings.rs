//! Settings handed to the agent at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use sysprobe_domain::ToolPolicy;

/// Process-wide settings, fixed for the lifetime of a session.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Empty means "no restriction"
    pub allowed_tools: BTreeSet<String>,
    pub denied_tools: BTreeSet<String>,
}

impl AgentSettings {
    /// Security policy bound to this session's allow/deny lists.
    pub fn policy(&self) -> ToolPolicy {
        ToolPolicy::new(
            self.allowed_tools.iter().cloned(),
            self.denied_tools.iter().cloned(),
        )
    }

    /// API key with all but the last four characters masked.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

impl std::fmt::Debug for AgentSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentSettings")
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("allowed_tools", &self.allowed_tools)
            .field("denied_tools", &self.denied_tools)
            .finish()
    }
}
