use serde::{Deserialize, Serialize};

pub use super::content::ChatCompletionMessage;
use super::tool_definition::ToolDefinition;
use super::usage::Usage;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,
}

impl ChatCompletion {
    /// The message of the first choice; only one choice is ever requested.
    pub fn into_first_message(self) -> Option<ChatCompletionMessage> {
        self.choices.into_iter().next().map(|choice| choice.message)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletionChoice {
    pub index: u32,
    pub message: ChatCompletionMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}
