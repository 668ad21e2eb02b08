//! Tool security policy — allow/deny gating of tool names.
//!
//! [`decide`] is a pure function over a tool name and two name sets.
//! Rules, in priority order:
//!
//! 1. A name in the deny list is always rejected, even if it is also allowed.
//! 2. A non-empty allow list rejects every name it does not contain.
//! 3. Everything else is allowed.
//!
//! An empty allow list means "no restriction", not "deny everything".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of evaluating the policy for one tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDecision {
    Allowed,
    DeniedByBlacklist,
    DeniedNotInWhitelist,
}

impl PolicyDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allowed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PolicyDecision::Allowed => "allowed",
            PolicyDecision::DeniedByBlacklist => "denied_by_blacklist",
            PolicyDecision::DeniedNotInWhitelist => "denied_not_in_whitelist",
        }
    }
}

impl std::fmt::Display for PolicyDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluate the allow/deny rules for `name`.
pub fn decide(name: &str, allow: &BTreeSet<String>, deny: &BTreeSet<String>) -> PolicyDecision {
    if deny.contains(name) {
        return PolicyDecision::DeniedByBlacklist;
    }
    if !allow.is_empty() && !allow.contains(name) {
        return PolicyDecision::DeniedNotInWhitelist;
    }
    PolicyDecision::Allowed
}

/// Allow and deny lists fixed for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPolicy {
    allow: BTreeSet<String>,
    deny: BTreeSet<String>,
}

impl ToolPolicy {
    pub fn new(
        allow: impl IntoIterator<Item = impl Into<String>>,
        deny: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy that allows every tool.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn decide(&self, name: &str) -> PolicyDecision {
        decide(name, &self.allow, &self.deny)
    }

    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allow
    }

    pub fn denied(&self) -> &BTreeSet<String> {
        &self.deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 7] = ["ps", "find", "grep", "wget", "ss", "lsof", "rm"];

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deny_wins_over_allow() {
        for name in NAMES {
            let decision = decide(name, &set(&NAMES), &set(&[name]));
            assert_eq!(decision, PolicyDecision::DeniedByBlacklist, "{}", name);
        }
    }

    #[test]
    fn test_empty_lists_allow_everything() {
        for name in NAMES {
            assert_eq!(decide(name, &set(&[]), &set(&[])), PolicyDecision::Allowed);
        }
    }

    #[test]
    fn test_non_empty_allow_list_rejects_others() {
        let allow = set(&["ps", "find"]);
        for name in ["grep", "wget", "ss", "lsof"] {
            assert_eq!(
                decide(name, &allow, &set(&[])),
                PolicyDecision::DeniedNotInWhitelist
            );
        }
        assert_eq!(decide("ps", &allow, &set(&[])), PolicyDecision::Allowed);
    }

    #[test]
    fn test_empty_allow_list_still_honours_deny() {
        let deny = set(&["wget"]);
        assert_eq!(
            decide("wget", &set(&[]), &deny),
            PolicyDecision::DeniedByBlacklist
        );
        assert_eq!(decide("ps", &set(&[]), &deny), PolicyDecision::Allowed);
    }

    #[test]
    fn test_tool_policy_binds_lists() {
        let policy = ToolPolicy::new(["ps", "find"], Vec::<String>::new());
        assert_eq!(policy.decide("wget"), PolicyDecision::DeniedNotInWhitelist);
        assert!(policy.decide("ps").is_allowed());
        assert!(ToolPolicy::unrestricted().decide("anything").is_allowed());
    }
}
