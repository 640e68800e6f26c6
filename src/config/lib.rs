use std::env;

use thiserror::Error;
use tracing::debug;

use super::constants::*;
use super::models::{Config, ModelConfig, SchedulingConfig, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingVariable(String),

    #[error("Unterminated '${{' in config near: {0}")]
    UnterminatedVariable(String),

    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}

/// Loads a YAML config file, substituting `${VAR}` references in string
/// values from the environment. Comments and keys are never expanded, and a
/// substituted value stays a string.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let mut document: serde_yaml::Value = serde_yaml::from_str(&contents)?;
    resolve_env_refs(&mut document)?;
    let config: Config = serde_yaml::from_value(document)?;
    Ok(config)
}

fn resolve_env_refs(value: &mut serde_yaml::Value) -> Result<(), ConfigError> {
    match value {
        serde_yaml::Value::String(text) if text.contains("${") => {
            *text = expand_env_vars(text)?;
        }
        serde_yaml::Value::Sequence(items) => {
            for item in items {
                resolve_env_refs(item)?;
            }
        }
        serde_yaml::Value::Mapping(mapping) => {
            for (_, item) in mapping.iter_mut() {
                resolve_env_refs(item)?;
            }
        }
        serde_yaml::Value::Tagged(tagged) => resolve_env_refs(&mut tagged.value)?,
        _ => {}
    }
    Ok(())
}

fn expand_env_vars(text: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| {
            ConfigError::UnterminatedVariable(after.chars().take(32).collect())
        })?;
        let name = &after[..end];
        debug!("Resolving environment variable: {}", name);
        let value =
            env::var(name).map_err(|_| ConfigError::MissingVariable(name.to_string()))?;
        expanded.push_str(&value);
        rest = &after[end + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}

impl Config {
    /// Builds the configuration from process environment variables, falling
    /// back to defaults for everything except the API keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cors_origins = env_or("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGIN)
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            server: ServerConfig {
                port: env_parsed("PORT", DEFAULT_PORT)?,
                cors_origins,
                request_timeout_secs: env_parsed(
                    "REQUEST_TIMEOUT_SECS",
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
            },
            model: ModelConfig {
                api_key: env_or("OPENAI_API_KEY", ""),
                base_url: env_or("OPENAI_BASE_URL", DEFAULT_MODEL_BASE_URL),
                model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            },
            scheduling: SchedulingConfig {
                api_key: env_or("CAL_API_KEY", ""),
                base_url: env_or("CAL_BASE_URL", DEFAULT_SCHEDULING_BASE_URL),
                event_type_id: env_parsed("CAL_EVENT_TYPE_ID", DEFAULT_EVENT_TYPE_ID)?,
                api_version: env_or("CAL_API_VERSION", DEFAULT_SCHEDULING_API_VERSION),
            },
        })
    }
}
