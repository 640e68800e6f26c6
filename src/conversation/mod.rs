pub mod orchestrator;
pub mod prompt;

use thiserror::Error;

use crate::providers::ProviderError;

pub use orchestrator::Orchestrator;
pub use prompt::{default_system_prompt, ensure_system_prompt};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid arguments for tool call {call_id} ({tool}): {source}")]
    ToolArguments {
        call_id: String,
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Conversation must contain at least one message")]
    EmptyTranscript,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
