//! JSON Schema tool converter.
//!
//! Turns catalog entries into the `tools` array of a chat-completions
//! request: `{"type": "function", "function": {name, description, parameters}}`.

use serde_json::{Map, Value, json};
use sysprobe_domain::{ToolDefinition, ToolParameter, ToolSpec};

/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"integer"` → `"integer"`
/// - `"number"` → `"number"`
/// - `"boolean"` → `"boolean"`
/// - `"array"` → `"array"` of strings
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    pub fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let properties: Map<String, Value> = tool
            .parameters
            .iter()
            .map(|param| (param.name.clone(), parameter_schema(param)))
            .collect();
        let required: Vec<&str> = tool.required_parameters().map(|p| p.name.as_str()).collect();

        json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }

    /// Every tool, in catalog order.
    pub fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        spec.all().map(|t| self.tool_to_schema(t)).collect()
    }
}

fn parameter_schema(param: &ToolParameter) -> Value {
    let schema_type = match param.param_type.as_str() {
        "integer" => "integer",
        "number" => "number",
        "boolean" => "boolean",
        "array" => "array",
        _ => "string",
    };

    let mut prop = Map::new();
    prop.insert("type".to_string(), json!(schema_type));
    prop.insert("description".to_string(), json!(param.description));
    if schema_type == "array" {
        prop.insert("items".to_string(), json!({"type": "string"}));
    }
    if !param.allowed_values.is_empty() {
        prop.insert("enum".to_string(), json!(param.allowed_values));
    }
    Value::Object(prop)
}
