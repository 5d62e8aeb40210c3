//! Post Changelog - Webhook Changelog Poster
//!
//! Reads a changelog fragment from disk and posts it as a single message to a
//! webhook, routed to one conversation thread via the `thread_id` query
//! parameter.
//!
//! Changelog files are optional in a release pipeline, so a missing or blank
//! file is a successful skip. A rejected or failed delivery is an error.
//!
//! # Usage
//!
//! ```bash
//! post-changelog https://hooks.example.com/webhooks/123/token 987654 CHANGES.md
//! ```
//!
//! # Request
//!
//! `POST <webhook-url>?thread_id=<thread-id>` with the JSON body
//! `{"content": "<trimmed file text>"}`.

pub mod cli;
pub mod error;
pub mod payload;
pub mod webhook;

use std::path::Path;

use reqwest::StatusCode;

pub use crate::{
    error::PostError,
    payload::{ChangelogPayload, SkipReason, read_changelog},
    webhook::Webhook,
};

/// How a run finished when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The webhook accepted the changelog.
    Posted { status: StatusCode },
    /// Nothing was sent.
    Skipped(SkipReason),
}

impl Outcome {
    /// Process exit code for this outcome. Skips are successes.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Reads the changelog at `path` and posts it to `webhook`.
///
/// At most one request is made, and none at all when the file is skipped.
pub async fn post_changelog(webhook: &Webhook, path: &Path) -> Result<Outcome, PostError> {
    let payload = match read_changelog(path).await? {
        Ok(payload) => payload,
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };

    let status = webhook.post(&payload).await?;
    Ok(Outcome::Posted { status })
}
