use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::models::ModelConfig;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::providers::provider::{Provider, ProviderError};

pub struct OpenAIProvider {
    config: ModelConfig,
    http_client: Client,
}

impl OpenAIProvider {
    pub fn new(config: &ModelConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            config: config.clone(),
            http_client,
        })
    }

    fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    fn r#type(&self) -> String {
        "openai".to_string()
    }

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError> {
        debug!(
            model = %payload.model,
            messages = payload.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(self.chat_completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request error: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(status = status.as_u16(), "OpenAI API returned an error");
            return Err(ProviderError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}
