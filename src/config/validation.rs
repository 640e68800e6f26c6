use super::models::Config;

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validates a Config before the server starts.
/// Returns Ok(()) if valid, or Err(Vec<String>) with a list of error messages if invalid.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.server.port == 0 {
        errors.push("Server port must be greater than 0.".to_string());
    }
    if config.server.request_timeout_secs == 0 {
        errors.push("Request timeout must be at least one second.".to_string());
    }

    if config.model.api_key.trim().is_empty() {
        errors.push("Model API key is not set (OPENAI_API_KEY).".to_string());
    }
    if !is_http_url(&config.model.base_url) {
        errors.push(format!(
            "Model base URL '{}' must start with http:// or https://.",
            config.model.base_url
        ));
    }
    if config.model.model.trim().is_empty() {
        errors.push("Model identifier must not be empty.".to_string());
    }

    if config.scheduling.api_key.trim().is_empty() {
        errors.push("Scheduling API key is not set (CAL_API_KEY).".to_string());
    }
    if !is_http_url(&config.scheduling.base_url) {
        errors.push(format!(
            "Scheduling base URL '{}' must start with http:// or https://.",
            config.scheduling.base_url
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
