#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use stride_core::models::goal::{Goal, GoalDraft};
use stride_insight::client::InsightClient;
use stride_insight::config::InsightConfig;
use stride_insight::error::InsightError;
use stride_insight::transport::{HttpResponse, Transport};

/// A recorded outbound request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub bearer: String,
    pub body: Option<String>,
}

/// Scripted transport: pops canned responses in order and records requests.
/// With an empty script every call answers with `fallback`.
pub struct FakeTransport {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<Recorded>>,
    script: Mutex<VecDeque<Result<HttpResponse, InsightError>>>,
    fallback: Option<HttpResponse>,
}

impl FakeTransport {
    pub fn scripted(responses: Vec<Result<HttpResponse, InsightError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(responses.into()),
            fallback: None,
        })
    }

    pub fn always(response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            fallback: Some(response),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.requests.lock().expect("lock").last().cloned()
    }

    fn answer(&self, recorded: Recorded) -> Result<HttpResponse, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().expect("lock").push(recorded);
        if let Some(next) = self.script.lock().expect("lock").pop_front() {
            return next;
        }
        self.fallback
            .clone()
            .ok_or_else(|| InsightError::Transport("script exhausted".to_string()))
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, InsightError> {
        self.answer(Recorded {
            method: "GET",
            url: url.to_string(),
            bearer: bearer.to_string(),
            body: None,
        })
    }

    fn post_json(&self, url: &str, bearer: &str, body: &str) -> Result<HttpResponse, InsightError> {
        self.answer(Recorded {
            method: "POST",
            url: url.to_string(),
            bearer: bearer.to_string(),
            body: Some(body.to_string()),
        })
    }
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        status_text: "OK".to_string(),
        body: body.to_string(),
    }
}

/// A chat-completion body whose first choice carries `content`.
pub fn completion(content: &str) -> HttpResponse {
    ok(&serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
    .to_string())
}

pub fn config() -> InsightConfig {
    InsightConfig {
        base_url: "https://llm.test/v1".to_string(),
        ..InsightConfig::default()
    }
    .with_api_key("sk-test-0123456789")
}

pub fn client(transport: Arc<FakeTransport>) -> InsightClient {
    InsightClient::with_transport(config(), transport)
}

pub fn goal() -> Goal {
    Goal::from_draft(
        GoalDraft {
            goal: "Run 5k".to_string(),
            motivation: "health".to_string(),
            consequences: "none".to_string(),
            benefits: "fitness".to_string(),
        },
        jiff::Timestamp::UNIX_EPOCH,
    )
}
