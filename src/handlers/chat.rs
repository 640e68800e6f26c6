use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    conversation::{ChatError, ensure_system_prompt},
    models::content::{ChatCompletionMessage, Role},
    state::AppState,
};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatRequest {
    pub messages: Vec<IncomingMessage>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct IncomingMessage {
    pub role: Role,
    pub content: String,
}

impl From<IncomingMessage> for ChatCompletionMessage {
    fn from(message: IncomingMessage) -> Self {
        ChatCompletionMessage::new(message.role, message.content)
    }
}

/// Either `{"reply": ...}` or `{"error": ...}`; always sent with HTTP 200.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Error { error: String },
}

impl ChatResponse {
    fn error(error: impl ToString) -> Json<Self> {
        Json(ChatResponse::Error {
            error: error.to_string(),
        })
    }
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected chat request body");
            return ChatResponse::error(ChatError::InvalidRequest(rejection.body_text()));
        }
    };

    if request.messages.is_empty() {
        return ChatResponse::error(ChatError::InvalidRequest(
            "messages must contain at least one entry".to_string(),
        ));
    }

    let mut transcript: Vec<ChatCompletionMessage> =
        request.messages.into_iter().map(Into::into).collect();
    if ensure_system_prompt(&mut transcript, Utc::now().year()) {
        info!("Inserted default system prompt");
    }

    match state.orchestrator.reply(transcript).await {
        Ok(reply) => {
            info!(reply_len = reply.len(), "Chat reply ready");
            Json(ChatResponse::Reply { reply })
        }
        Err(e) => {
            error!(error = %e, "Chat request failed");
            ChatResponse::error(e)
        }
    }
}
