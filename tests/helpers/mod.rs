#![allow(dead_code)]

use assistant_lib::config::models::{Config, ModelConfig, SchedulingConfig, ServerConfig};
use serde_json::{Value, json};

pub const CAL_API_KEY: &str = "cal_test_key";
pub const OPENAI_API_KEY: &str = "sk-test";

// ---------------------------------------------------------------------------
// Config builders
// ---------------------------------------------------------------------------

pub fn scheduling_config(base_url: &str) -> SchedulingConfig {
    SchedulingConfig {
        api_key: CAL_API_KEY.to_string(),
        base_url: base_url.to_string(),
        event_type_id: 2114431,
        api_version: "2024-08-13".to_string(),
    }
}

pub fn test_config(model_base_url: &str, scheduling_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            request_timeout_secs: 5,
            ..ServerConfig::default()
        },
        model: ModelConfig {
            api_key: OPENAI_API_KEY.to_string(),
            base_url: model_base_url.to_string(),
            model: "gpt-4o".to_string(),
        },
        scheduling: scheduling_config(scheduling_base_url),
    }
}

// ---------------------------------------------------------------------------
// Provider response builders
// ---------------------------------------------------------------------------

pub fn completion_with_content(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1742900000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

pub fn completion_with_tool_call(id: &str, name: &str, arguments: Value) -> Value {
    json!({
        "id": "chatcmpl-tools",
        "object": "chat.completion",
        "created": 1742900000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": id,
                    "type": "function",
                    "function": {"name": name, "arguments": arguments.to_string()}
                }]
            },
            "finish_reason": "tool_calls"
        }]
    })
}

pub fn bookings_listing(bookings: Vec<Value>) -> Value {
    json!({"status": "success", "data": bookings})
}

pub fn booking(id: i64, start: &str, attendee_email: &str) -> Value {
    json!({
        "id": id,
        "uid": format!("uid-{id}"),
        "title": "Intro call",
        "start": start,
        "end": start,
        "status": "accepted",
        "attendees": [{"name": "Attendee", "email": attendee_email, "timeZone": "UTC"}],
        "hosts": [{"name": "Host", "email": "host@example.com"}]
    })
}
