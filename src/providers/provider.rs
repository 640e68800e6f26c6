use async_trait::async_trait;
use thiserror::Error;

use crate::models::chat::{ChatCompletion, ChatCompletionRequest};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Model endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("Model endpoint returned HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    #[error("Model response contained no choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::ParseError(e.to_string())
        } else {
            ProviderError::Unavailable(e.to_string())
        }
    }
}

/// A chat-completion backend the conversation is sent to.
#[async_trait]
pub trait Provider: Send + Sync {
    fn r#type(&self) -> String;

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError>;
}
