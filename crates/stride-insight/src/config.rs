use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::InsightError;

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_BASE_URL: &str = "GROQ_BASE_URL";
pub const ENV_MODEL: &str = "GROQ_MODEL";
pub const ENV_TEMPERATURE: &str = "GROQ_TEMPERATURE";
pub const ENV_MAX_TOKENS: &str = "GROQ_MAX_TOKENS";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-maverick-17b-128e-instruct";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Connection settings for the text-generation service. Fixed at startup.
#[derive(Clone)]
pub struct InsightConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key: Option<String>,
}

/// Redacted config info safe to log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key_hint: Option<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for InsightConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &self.api_key.as_deref().map(redact_api_key))
            .finish()
    }
}

impl InsightConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, InsightError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset keys fall
    /// back to the defaults; an empty API key counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InsightError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(ENV_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let model = lookup(ENV_MODEL).unwrap_or(defaults.model);
        let temperature = match lookup(ENV_TEMPERATURE) {
            Some(raw) => raw.trim().parse::<f32>().map_err(|e| {
                InsightError::Config(format!("{ENV_TEMPERATURE}={raw:?}: {e}"))
            })?,
            None => defaults.temperature,
        };
        let max_tokens = match lookup(ENV_MAX_TOKENS) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                InsightError::Config(format!("{ENV_MAX_TOKENS}={raw:?}: {e}"))
            })?,
            None => defaults.max_tokens,
        };
        let api_key = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty());

        if api_key.is_none() {
            error!("{ENV_API_KEY} is not set; insight requests are disabled");
        }

        Ok(Self {
            base_url,
            model,
            temperature,
            max_tokens,
            api_key,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            api_key_hint: self.api_key.as_deref().map(redact_api_key),
        }
    }
}

fn redact_api_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
