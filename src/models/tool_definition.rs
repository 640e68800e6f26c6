use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool declared to the model in every chat-completion request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the argument object.
    pub parameters: Value,
    #[serde(default)]
    pub strict: bool,
}

impl ToolDefinition {
    /// A function tool whose arguments must follow `parameters` exactly.
    pub fn strict_function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
                strict: true,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_function_serializes_as_openai_tool() {
        let tool = ToolDefinition::strict_function(
            "list_events",
            "List events.",
            json!({"type": "object", "properties": {}}),
        );
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({
                "type": "function",
                "function": {
                    "name": "list_events",
                    "description": "List events.",
                    "parameters": {"type": "object", "properties": {}},
                    "strict": true
                }
            })
        );
        assert_eq!(tool.name(), "list_events");
    }
}
