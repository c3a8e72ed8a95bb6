use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("API key is missing: set GROQ_API_KEY")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned {status} {status_text}: {body}")]
    Service {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("insight task failed: {0}")]
    Join(String),
}

impl InsightError {
    /// Whether a manual retry can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Service { .. })
    }
}
