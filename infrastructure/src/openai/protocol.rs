//! Chat-completions wire types.
//!
//! The shapes follow the OpenAI `/chat/completions` API, which DeepSeek and
//! other compatible providers accept unchanged.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sysprobe_domain::{Message, Role, ToolCall};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub kind: String,
    pub function: WireFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunction {
    pub name: String,
    /// JSON-encoded argument object. Some providers send the object itself.
    #[serde(default, deserialize_with = "arguments_string")]
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
pub struct WireChoice {
    pub message: WireMessage,
}

fn function_type() -> String {
    "function".to_string()
}

fn arguments_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => "{}".to_string(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        let tool_calls = message.has_tool_calls().then(|| {
            message
                .tool_calls
                .iter()
                .map(|call| WireToolCall {
                    id: call.id.clone(),
                    kind: function_type(),
                    function: WireFunction {
                        name: call.name.clone(),
                        arguments: call.arguments.clone(),
                    },
                })
                .collect()
        });
        Self {
            role: message.role,
            content: message.content.clone(),
            tool_calls,
            tool_call_id: message.tool_call_id.clone(),
        }
    }
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        let tool_calls: Vec<ToolCall> = wire
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .filter(|call| !call.function.name.trim().is_empty())
            .enumerate()
            .map(|(idx, call)| {
                let id = if call.id.trim().is_empty() {
                    format!("tool_call_{}", idx + 1)
                } else {
                    call.id
                };
                ToolCall::new(id, call.function.name, call.function.arguments)
            })
            .collect();

        Message {
            role: wire.role,
            content: wire.content,
            tool_calls,
            tool_call_id: wire.tool_call_id,
        }
    }
}
