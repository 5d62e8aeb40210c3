#![allow(dead_code)]

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use tokio::net::TcpListener;

/// One request as seen by the simulated webhook.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

struct WebhookState {
    status: StatusCode,
    reply: &'static str,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local webhook endpoint that answers every POST with a fixed response.
pub struct MockWebhook {
    pub url: String,
    state: Arc<WebhookState>,
}

impl MockWebhook {
    pub async fn start(status: StatusCode, reply: &'static str) -> Self {
        let state = Arc::new(WebhookState {
            status,
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/webhooks/123/secret-token", post(record))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app.into_make_service()).await });

        Self {
            url: format!("http://{addr}/webhooks/123/secret-token"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<Arc<WebhookState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        query,
        content_type,
        body,
    });

    (state.status, state.reply)
}

/// URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/webhooks/123/secret-token")
}

pub fn write_changelog(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("CHANGES.md");
    std::fs::write(&path, contents).unwrap();
    path
}
