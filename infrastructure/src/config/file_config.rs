//! Raw configuration data types
//!
//! These structs mirror the TOML file and the `AGENT_` environment keys.
//! They are converted into [`AgentSettings`] once every source is merged.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use sysprobe_application::AgentSettings;
use sysprobe_domain::ToolName;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_MODEL: &str = "deepseek-coder";
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("no API key configured: set AGENT_API_KEY or `api_key` in a config file")]
    MissingApiKey,

    #[error("model name cannot be empty")]
    EmptyModel,

    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

/// Merged configuration as read from files and environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Array or comma-separated string
    #[serde(deserialize_with = "tool_list")]
    pub allowed_tools: Vec<String>,
    #[serde(deserialize_with = "tool_list")]
    pub denied_tools: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            allowed_tools: ToolName::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            denied_tools: Vec::new(),
        }
    }
}

impl FileConfig {
    /// Validate and convert into the settings the agent runs with.
    pub fn into_settings(self) -> Result<AgentSettings, ConfigError> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let model = self.model.trim().to_string();
        if model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        let allowed_tools = normalize_tools("allowed_tools", self.allowed_tools);
        let denied_tools = normalize_tools("denied_tools", self.denied_tools);

        Ok(AgentSettings {
            api_key,
            model,
            base_url: self.base_url.trim().trim_end_matches('/').to_string(),
            allowed_tools,
            denied_tools,
        })
    }
}

/// Trim, drop blanks, and warn about names no tool answers to.
fn normalize_tools(field: &str, names: Vec<String>) -> BTreeSet<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .inspect(|n| {
            if n.parse::<ToolName>().is_err() {
                warn!(field, tool = %n, "Unknown tool name in configuration");
            }
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToolListValue {
    List(Vec<String>),
    Csv(String),
}

fn tool_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ToolListValue>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ToolListValue::List(list)) => list,
        Some(ToolListValue::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> FileConfig {
        FileConfig {
            api_key: "sk-test".to_string(),
            ..FileConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.model, "deepseek-coder");
        assert_eq!(config.base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.allowed_tools, vec!["ps", "find", "grep", "wget", "ss", "lsof"]);
        assert!(config.denied_tools.is_empty());
    }

    #[test]
    fn test_missing_api_key() {
        let err = FileConfig::default().into_settings().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let config = FileConfig {
            api_key: "   ".to_string(),
            ..FileConfig::default()
        };
        assert!(matches!(config.into_settings(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_model() {
        let config = FileConfig {
            model: " ".to_string(),
            ..with_key()
        };
        assert!(matches!(config.into_settings(), Err(ConfigError::EmptyModel)));
    }

    #[test]
    fn test_into_settings_normalizes() {
        let config = FileConfig {
            base_url: "http://localhost:8000/v1/".to_string(),
            allowed_tools: vec![" ps".to_string(), "".to_string(), "grep ".to_string()],
            denied_tools: vec!["wget".to_string()],
            ..with_key()
        };
        let settings = config.into_settings().unwrap();
        assert_eq!(settings.base_url, "http://localhost:8000/v1");
        assert_eq!(
            settings.allowed_tools.into_iter().collect::<Vec<_>>(),
            vec!["grep", "ps"]
        );
        assert!(settings.denied_tools.contains("wget"));
    }

    #[test]
    fn test_tool_list_accepts_csv_and_array() {
        let config: FileConfig = toml::from_str(
            r#"
            allowed_tools = "ps, find"
            denied_tools = ["wget"]
            "#,
        )
        .unwrap();
        assert_eq!(config.allowed_tools, vec!["ps", " find"]);
        assert_eq!(config.denied_tools, vec!["wget"]);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
