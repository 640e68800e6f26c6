use serde::{Deserialize, Serialize};

use super::constants::*;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_cors_origins() -> Vec<String> {
    vec![DEFAULT_CORS_ORIGIN.to_string()]
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_model_base_url() -> String {
    DEFAULT_MODEL_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_scheduling_base_url() -> String {
    DEFAULT_SCHEDULING_BASE_URL.to_string()
}

fn default_event_type_id() -> u64 {
    DEFAULT_EVENT_TYPE_ID
}

fn default_api_version() -> String {
    DEFAULT_SCHEDULING_API_VERSION.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub scheduling: SchedulingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Chat-completion endpoint the conversation is forwarded to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Cal.com account the booking tools act on.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_scheduling_base_url")]
    pub base_url: String,
    #[serde(default = "default_event_type_id")]
    pub event_type_id: u64,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}
