use std::env;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_MODEL_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_SCHEDULING_BASE_URL: &str = "https://api.cal.com";
pub const DEFAULT_EVENT_TYPE_ID: u64 = 2114431;
pub const DEFAULT_SCHEDULING_API_VERSION: &str = "2024-08-13";

/// Every booking created by the assistant lasts this long.
pub const BOOKING_DURATION_MINUTES: i64 = 15;

pub fn default_config_path() -> Option<String> {
    env::var("CONFIG_FILE_PATH").ok().filter(|p| !p.is_empty())
}
