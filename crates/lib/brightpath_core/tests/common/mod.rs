//! In-process mock of the upstream conversational service.
//!
//! Each path gets a scripted status/body; unscripted paths answer 404.
//! Every request is recorded so tests can assert which candidates were hit.
//!
//! Shared with the `brightpath_api` integration tests via `#[path]`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

pub const BOT_ID: &str = "bot-123";
pub const CHAT: &str = "/v1/chat";
pub const CONVERSE: &str = "/v1/bots/bot-123/converse";
pub const WEBCHAT: &str = "/v1/bots/bot-123/mod/webchat/messages";

#[derive(Clone)]
pub struct Scripted {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
    pub drop_connection: bool,
}

impl Scripted {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.into(),
            delay: None,
            drop_connection: false,
        }
    }

    /// Records the hit, then closes the socket without answering.
    pub fn dropped() -> Self {
        Self {
            drop_connection: true,
            ..Self::new(200, "")
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Default)]
struct MockState {
    scripts: HashMap<String, Scripted>,
    hits: Mutex<Vec<Hit>>,
}

pub struct MockUpstream {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockUpstream {
    /// Binds an ephemeral port and serves the scripted responses.
    pub async fn start(scripts: &[(&str, Scripted)]) -> Self {
        let state = Arc::new(MockState {
            scripts: scripts
                .iter()
                .map(|(path, s)| (path.to_string(), s.clone()))
                .collect(),
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(mock_handler)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock upstream serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().expect("hits lock").clone()
    }

    pub fn hit_paths(&self) -> Vec<String> {
        self.hits().into_iter().map(|h| h.path).collect()
    }
}

async fn mock_handler(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    state.hits.lock().expect("hits lock").push(Hit {
        path: uri.path().to_owned(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });

    match state.scripts.get(uri.path()) {
        Some(script) => {
            if let Some(delay) = script.delay {
                tokio::time::sleep(delay).await;
            }
            if script.drop_connection {
                // Unwinds the per-connection task, so hyper drops the socket.
                std::panic::resume_unwind(Box::new("scripted connection drop"));
            }
            (script.status, script.body.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no script").into_response(),
    }
}

/// Returns an address nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}
