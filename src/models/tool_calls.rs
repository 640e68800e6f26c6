use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object, exactly as produced by the model.
    pub arguments: String,
}

/// One tool invocation requested by the model in an assistant message.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatMessageToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: FunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

impl ChatMessageToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Decodes the argument string into a JSON value.
    pub fn parsed_arguments(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.function.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arguments_are_decoded_from_string() {
        let call = ChatMessageToolCall::new("call_1", "cancel_event", r#"{"email":"a@b.com"}"#);
        assert_eq!(call.parsed_arguments().unwrap(), json!({"email": "a@b.com"}));
    }

    #[test]
    fn test_malformed_arguments_are_an_error() {
        let call = ChatMessageToolCall::new("call_1", "list_events", "{not json");
        assert!(call.parsed_arguments().is_err());
    }

    #[test]
    fn test_missing_type_defaults_to_function() {
        let call: ChatMessageToolCall = serde_json::from_value(json!({
            "id": "call_2",
            "function": {"name": "list_events", "arguments": "{}"}
        }))
        .unwrap();
        assert_eq!(call.call_type, "function");
    }
}
