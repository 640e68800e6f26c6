use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ChatError;
use crate::models::chat::ChatCompletionRequest;
use crate::models::content::ChatCompletionMessage;
use crate::models::tool_calls::ChatMessageToolCall;
use crate::models::tool_definition::ToolDefinition;
use crate::providers::{Provider, ProviderError};
use crate::tools::{ToolDispatcher, tool_definitions};

/// Runs one conversation turn: a model call, at most one round of tool
/// execution, and a final model call that sees the tool results.
pub struct Orchestrator {
    provider: Arc<dyn Provider>,
    dispatcher: ToolDispatcher,
    model: String,
    tools: Vec<ToolDefinition>,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn Provider>,
        dispatcher: ToolDispatcher,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            dispatcher,
            model: model.into(),
            tools: tool_definitions(),
        }
    }

    pub async fn reply(
        &self,
        mut transcript: Vec<ChatCompletionMessage>,
    ) -> Result<String, ChatError> {
        if transcript.is_empty() {
            return Err(ChatError::EmptyTranscript);
        }

        info!(
            provider = %self.provider.r#type(),
            model = %self.model,
            messages = transcript.len(),
            "Calling model"
        );
        let message = self.complete(&transcript, Some(0.0)).await?;

        let tool_calls = match message.tool_calls.clone() {
            Some(calls) if !calls.is_empty() => calls,
            _ => return Ok(reply_text(message)),
        };

        transcript.push(message);
        self.run_tool_calls(&mut transcript, &tool_calls).await?;

        info!(
            tool_calls = tool_calls.len(),
            "Calling model with tool results"
        );
        let final_message = self.complete(&transcript, None).await?;
        if final_message.has_tool_calls() {
            warn!("Model requested further tools after the dispatch round; they are not executed");
        }

        Ok(reply_text(final_message))
    }

    /// Executes the tool calls in the order the model returned them, appending
    /// one tool result per call. A failing tool yields an error string and
    /// does not stop the rest of the batch.
    async fn run_tool_calls(
        &self,
        transcript: &mut Vec<ChatCompletionMessage>,
        tool_calls: &[ChatMessageToolCall],
    ) -> Result<(), ChatError> {
        for tool_call in tool_calls {
            let args = tool_call
                .parsed_arguments()
                .map_err(|source| ChatError::ToolArguments {
                    call_id: tool_call.id.clone(),
                    tool: tool_call.name().to_string(),
                    source,
                })?;

            info!(tool = %tool_call.name(), call_id = %tool_call.id, "Calling tool");
            let outcome = self.dispatcher.dispatch(tool_call.name(), &args).await;
            debug!(
                call_id = %tool_call.id,
                success = outcome.is_success(),
                result = %outcome,
                "Tool result"
            );

            transcript.push(ChatCompletionMessage::tool_result(
                tool_call.id.clone(),
                outcome.into_text(),
            ));
        }
        Ok(())
    }

    async fn complete(
        &self,
        transcript: &[ChatCompletionMessage],
        temperature: Option<f32>,
    ) -> Result<ChatCompletionMessage, ChatError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: transcript.to_vec(),
            temperature,
            tools: self.tools.clone(),
        };

        let completion = self.provider.chat_completions(request).await?;
        debug!(
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "Model usage"
        );
        completion
            .into_first_message()
            .ok_or(ChatError::Provider(ProviderError::EmptyResponse))
    }
}

/// The text handed back to the caller. A refusal stands in for missing
/// content; an empty reply is logged since nothing else explains it.
fn reply_text(message: ChatCompletionMessage) -> String {
    if let Some(text) = message.text_content() {
        return text;
    }
    match message.refusal {
        Some(refusal) => {
            warn!(refusal = %refusal, "Model refused to answer");
            refusal
        }
        None => {
            warn!("Model reply has no content");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingResponses;
    use crate::models::chat::{ChatCompletion, ChatCompletionChoice};
    use crate::models::content::Role;
    use crate::models::usage::Usage;
    use crate::scheduling::{
        BookingConfirmation, BookingList, SchedulingClient, SchedulingError,
    };
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<ChatCompletion, ProviderError>>>,
        requests: Mutex<Vec<ChatCompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<ChatCompletion, ProviderError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<ChatCompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn r#type(&self) -> String {
            "scripted".to_string()
        }

        async fn chat_completions(
            &self,
            payload: ChatCompletionRequest,
        ) -> Result<ChatCompletion, ProviderError> {
            self.requests.lock().unwrap().push(payload);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected model call")
        }
    }

    struct EmptyCalendar;

    #[async_trait]
    impl SchedulingClient for EmptyCalendar {
        async fn create(
            &self,
            _start: &str,
            _responses: BookingResponses,
            _time_zone: &str,
            _language: &str,
        ) -> Result<BookingConfirmation, SchedulingError> {
            Err(SchedulingError::HttpError {
                action: "book event",
                status: 500,
                body: "down".to_string(),
            })
        }

        async fn list(&self) -> Result<BookingList, SchedulingError> {
            Ok(BookingList::default())
        }

        async fn cancel_booking(&self, _booking_id: i64) -> Result<(), SchedulingError> {
            Ok(())
        }
    }

    fn completion(message: ChatCompletionMessage) -> Result<ChatCompletion, ProviderError> {
        Ok(ChatCompletion {
            id: "chatcmpl-test".to_string(),
            object: Some("chat.completion".to_string()),
            created: None,
            model: "gpt-4o".to_string(),
            choices: vec![ChatCompletionChoice {
                index: 0,
                message,
                finish_reason: None,
            }],
            usage: Usage::default(),
            system_fingerprint: None,
        })
    }

    fn tool_call(id: &str, name: &str, arguments: &str) -> ChatMessageToolCall {
        ChatMessageToolCall::new(id, name, arguments)
    }

    fn requesting_tools(calls: Vec<ChatMessageToolCall>) -> ChatCompletionMessage {
        ChatCompletionMessage {
            role: Role::Assistant,
            content: None,
            name: None,
            tool_calls: Some(calls),
            tool_call_id: None,
            refusal: None,
        }
    }

    fn orchestrator(provider: Arc<ScriptedProvider>) -> Orchestrator {
        Orchestrator::new(
            provider,
            ToolDispatcher::new(Arc::new(EmptyCalendar)),
            "gpt-4o",
        )
    }

    fn transcript() -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage::system("system"),
            ChatCompletionMessage::user("What's booked?"),
        ]
    }

    #[tokio::test]
    async fn test_reply_without_tool_calls_is_returned_verbatim() {
        let provider = ScriptedProvider::new(vec![completion(ChatCompletionMessage::assistant(
            "  Nothing booked yet.\n",
        ))]);

        let reply = orchestrator(provider.clone())
            .reply(transcript())
            .await
            .unwrap();

        assert_eq!(reply, "  Nothing booked yet.\n");
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.0));
        assert_eq!(requests[0].tools.len(), 3);
        assert_eq!(requests[0].messages, transcript());
    }

    #[tokio::test]
    async fn test_refusal_is_returned_when_content_is_missing() {
        let refused = ChatCompletionMessage {
            content: None,
            refusal: Some("I can't help with that.".to_string()),
            ..ChatCompletionMessage::assistant("")
        };
        let provider = ScriptedProvider::new(vec![completion(refused)]);

        let reply = orchestrator(provider).reply(transcript()).await.unwrap();
        assert_eq!(reply, "I can't help with that.");
    }

    #[tokio::test]
    async fn test_missing_content_without_refusal_is_empty_reply() {
        let empty = ChatCompletionMessage {
            content: None,
            ..ChatCompletionMessage::assistant("")
        };
        let provider = ScriptedProvider::new(vec![completion(empty)]);

        let reply = orchestrator(provider).reply(transcript()).await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_each_tool_call_gets_a_matching_result_before_second_call() {
        let provider = ScriptedProvider::new(vec![
            completion(requesting_tools(vec![
                tool_call("call_1", "list_events", "{}"),
                tool_call("call_2", "not_a_tool", "{}"),
                tool_call("call_3", "list_events", "{}"),
            ])),
            completion(ChatCompletionMessage::assistant("You have no events.")),
        ]);

        let reply = orchestrator(provider.clone())
            .reply(transcript())
            .await
            .unwrap();
        assert_eq!(reply, "You have no events.");

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].temperature, None);

        let messages = &requests[1].messages;
        assert_eq!(messages.len(), 2 + 1 + 3);
        assert!(messages[2].has_tool_calls());

        let results: Vec<(Option<&str>, Option<String>)> = messages[3..]
            .iter()
            .map(|m| {
                assert_eq!(m.role, Role::Tool);
                (m.tool_call_id.as_deref(), m.text_content())
            })
            .collect();
        assert_eq!(
            results,
            vec![
                (Some("call_1"), Some("No events found.".to_string())),
                (Some("call_2"), Some("Function not found.".to_string())),
                (Some("call_3"), Some("No events found.".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_tool_does_not_abort_the_batch() {
        let book_args = r#"{"start": "2025-03-25T13:00:00Z", "responses": {"name": "Ann", "email": "a@b.com", "smsReminderNumber": null, "location": {"value": "Zoom", "optionValue": ""}}, "timeZone": "UTC", "language": "en"}"#;
        let provider = ScriptedProvider::new(vec![
            completion(requesting_tools(vec![
                tool_call("call_book", "book_event", book_args),
                tool_call("call_list", "list_events", "{}"),
            ])),
            completion(ChatCompletionMessage::assistant("Booking failed, sorry.")),
        ]);

        orchestrator(provider.clone())
            .reply(transcript())
            .await
            .unwrap();

        let messages = &provider.requests()[1].messages;
        assert_eq!(
            messages[3].text_content().as_deref(),
            Some("Failed to book event. Status code: 500, Error: down")
        );
        assert_eq!(messages[4].tool_call_id.as_deref(), Some("call_list"));
    }

    #[tokio::test]
    async fn test_tools_requested_by_the_second_response_are_not_executed() {
        let mut second = requesting_tools(vec![tool_call("call_again", "list_events", "{}")]);
        second.content = Some(crate::models::content::ChatMessageContent::String(
            "Let me check again.".to_string(),
        ));
        let provider = ScriptedProvider::new(vec![
            completion(requesting_tools(vec![tool_call("call_1", "list_events", "{}")])),
            completion(second),
        ]);

        let reply = orchestrator(provider.clone())
            .reply(transcript())
            .await
            .unwrap();

        assert_eq!(reply, "Let me check again.");
        assert_eq!(provider.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_tool_arguments_fail_the_turn() {
        let provider = ScriptedProvider::new(vec![completion(requesting_tools(vec![tool_call(
            "call_bad",
            "cancel_event",
            "{not json",
        )]))]);

        let err = orchestrator(provider.clone())
            .reply(transcript())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::ToolArguments { ref call_id, .. } if call_id == "call_bad"));
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated() {
        let provider = ScriptedProvider::new(vec![Err(ProviderError::HttpError {
            status: 401,
            body: "invalid api key".to_string(),
        })]);

        let err = orchestrator(provider).reply(transcript()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model endpoint returned HTTP 401: invalid api key"
        );
    }

    #[tokio::test]
    async fn test_response_without_choices_is_an_error() {
        let provider = ScriptedProvider::new(vec![Ok(ChatCompletion {
            id: "chatcmpl-empty".to_string(),
            object: None,
            created: None,
            model: "gpt-4o".to_string(),
            choices: vec![],
            usage: Usage::default(),
            system_fingerprint: None,
        })]);

        let err = orchestrator(provider).reply(transcript()).await.unwrap_err();
        assert!(matches!(err, ChatError::Provider(ProviderError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_empty_transcript_is_rejected() {
        let provider = ScriptedProvider::new(vec![]);
        let err = orchestrator(provider.clone())
            .reply(Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::EmptyTranscript));
        assert!(provider.requests().is_empty());
    }
}
