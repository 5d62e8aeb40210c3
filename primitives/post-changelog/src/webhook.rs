use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{error::PostError, payload::ChangelogPayload};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A webhook endpoint plus the thread that messages are routed to.
#[derive(Debug, Clone)]
pub struct Webhook {
    client: Client,
    url: String,
    thread_id: String,
}

impl Webhook {
    /// Creates a webhook target. The URL is not validated here; a malformed
    /// URL surfaces as a transport error when posting.
    pub fn new(url: impl Into<String>, thread_id: impl Into<String>) -> Result<Self, PostError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            thread_id: thread_id.into(),
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    /// Sends one POST with the payload as JSON. No retries.
    pub async fn post(&self, payload: &ChangelogPayload) -> Result<StatusCode, PostError> {
        debug!(
            thread_id = %self.thread_id,
            bytes = payload.content().len(),
            "posting changelog"
        );

        let response = self
            .client
            .post(&self.url)
            .query(&[("thread_id", self.thread_id.as_str())])
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "webhook accepted changelog");
            return Ok(status);
        }

        // The body is diagnostic only; an unreadable one is reported as empty.
        let body = response.text().await.unwrap_or_default();
        Err(PostError::Delivery { status, body })
    }
}
