use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::llm::anthropic::AnthropicModel;

/// Runtime configuration, read from the environment at startup.
///
/// Secrets (the provider API key and the access token) are consumed as opaque
/// strings and never parsed.
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub anthropic_api_key: String,
    pub access_token: String,
    pub model: AnthropicModel,
    pub max_tokens: u32,
    pub system_prompt: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8080"),
            static_dir: PathBuf::from(try_load::<String>("STATIC_DIR", "static")),
            anthropic_api_key: read_secret("ANTHROPIC_API_KEY"),
            access_token: read_secret("CONSULT_ACCESS_TOKEN"),
            model: try_load("ANTHROPIC_MODEL", "haiku"),
            max_tokens: try_load("MAX_TOKENS", "1024"),
            system_prompt: env::var("CONSULT_SYSTEM_PROMPT").ok(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(key: &str) -> String {
    env::var(key)
        .map_err(|e| {
            warn!("Failed to read {key}: {e}");
        })
        .expect("Secrets misconfigured!")
}
