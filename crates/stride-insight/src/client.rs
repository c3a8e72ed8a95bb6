//! Chat-completion client for an OpenAI-compatible text-generation service.
//!
//! Two endpoints are used:
//!
//! - `GET {base_url}/models`: model discovery, diagnostics only.
//! - `POST {base_url}/chat/completions`: a single user message in, the
//!   first choice's message content out.
//!
//! Every call checks for an API key before touching the transport, so a
//! missing key fails fast with [`InsightError::MissingCredential`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::InsightConfig;
use crate::error::InsightError;
use crate::prompts;
use crate::transport::{HttpResponse, Transport, UreqTransport};

// ── Types ────────────────────────────────────────────────────────────────────

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in a chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Handle to the text-generation service. Cloning is cheap and clones share
/// the underlying transport.
#[derive(Clone)]
pub struct InsightClient {
    config: Arc<InsightConfig>,
    transport: Arc<dyn Transport>,
}

impl InsightClient {
    /// Client over the default `ureq` transport.
    pub fn new(config: InsightConfig) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(config: InsightConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    pub(crate) fn credential(&self) -> Result<&str, InsightError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(InsightError::MissingCredential)
    }

    /// List the model identifiers the service exposes.
    pub fn list_models(&self) -> Result<Vec<String>, InsightError> {
        let key = self.credential()?;
        let url = format!("{}/models", self.config.base_url);

        let response = check_status(self.transport.get(&url, key)?)?;
        let models: ModelList = serde_json::from_str(&response.body)
            .map_err(|e| InsightError::ResponseParse(format!("model list: {e}")))?;

        let ids: Vec<String> = models.data.into_iter().map(|m| m.id).collect();
        info!(count = ids.len(), "listed available models");
        Ok(ids)
    }

    /// Send `prompt` as a single user message and return the reply text.
    pub fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        let key = self.credential()?;
        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: ChatRole::User,
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        let body = serde_json::to_string(&request)?;

        debug!(model = %self.config.model, prompt, "sending chat completion");

        let response = self
            .transport
            .post_json(&url, key, &body)
            .inspect_err(|e| warn!(error = %e, "chat completion request failed"))?;
        let response = check_status(response)?;

        let text = extract_reply(&response.body)?;
        info!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            reply_len = text.len(),
            "chat completion received"
        );
        Ok(text)
    }

    /// Round-trip a fixed probe prompt. Any failure reads as "not connected".
    pub fn test_connection(&self) -> bool {
        match self.complete(prompts::CONNECTION_PROBE) {
            Ok(reply) => {
                let ok = reply.contains(prompts::CONNECTION_PROBE_REPLY);
                info!(ok, "connection probe answered");
                ok
            }
            Err(e) => {
                warn!(error = %e, "connection probe failed");
                false
            }
        }
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, InsightError> {
    if response.is_success() {
        return Ok(response);
    }
    warn!(
        status = response.status,
        status_text = %response.status_text,
        body = %response.body,
        "service returned an error status"
    );
    Err(InsightError::Service {
        status: response.status,
        status_text: response.status_text,
        body: response.body,
    })
}

/// Read `choices[0].message.content` from a chat-completion body.
fn extract_reply(body: &str) -> Result<String, InsightError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| InsightError::ResponseParse(format!("chat completion: {e}")))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| InsightError::ResponseParse("no message in response".to_string()))
}
