//! HTTP plumbing behind the insight client.
//!
//! The client talks to the service through the [`Transport`] trait so the
//! request/response contract can be exercised without a network. Non-2xx
//! statuses come back as ordinary [`HttpResponse`]s; only failures to reach
//! the service at all are errors here.

use tracing::debug;

use crate::error::InsightError;

/// A fully-read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP operations used by the insight client.
pub trait Transport: Send + Sync {
    /// `GET url` with a bearer token.
    fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, InsightError>;

    /// `POST url` with a bearer token and a JSON body.
    fn post_json(&self, url: &str, bearer: &str, body: &str)
    -> Result<HttpResponse, InsightError>;
}

/// Production transport backed by a `ureq` agent.
///
/// No timeout is configured: a request stays outstanding until the server
/// answers or the connection drops.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, InsightError> {
        debug!(url, "GET");
        let response = self
            .agent
            .get(url)
            .header("Authorization", &format!("Bearer {bearer}"))
            .call()
            .map_err(|e| InsightError::Transport(e.to_string()))?;
        read_response(response)
    }

    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &str,
    ) -> Result<HttpResponse, InsightError> {
        debug!(url, body_len = body.len(), "POST");
        let response = self
            .agent
            .post(url)
            .header("Authorization", &format!("Bearer {bearer}"))
            .header("Content-Type", "application/json")
            .send(body)
            .map_err(|e| InsightError::Transport(e.to_string()))?;
        read_response(response)
    }
}

fn read_response(
    mut response: ureq::http::Response<ureq::Body>,
) -> Result<HttpResponse, InsightError> {
    let status = response.status();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| InsightError::Transport(e.to_string()))?;
    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}
