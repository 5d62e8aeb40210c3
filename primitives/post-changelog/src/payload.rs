use std::{
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::error::PostError;

/// Message body sent to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogPayload {
    content: String,
}

impl ChangelogPayload {
    /// Builds a payload from raw file text, or `None` when only whitespace remains.
    ///
    /// A byte order mark counts as whitespace.
    pub fn from_text(text: &str) -> Option<Self> {
        let content = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if content.is_empty() {
            return None;
        }

        Some(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Why a run finished without posting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingFile(PathBuf),
    EmptyFile(PathBuf),
}

/// Reads the changelog at `path`.
///
/// A missing or blank file is not an error: changelog fragments are optional
/// in the pipeline, so those cases come back as `Err(SkipReason)` inside `Ok`.
pub async fn read_changelog(
    path: &Path,
) -> Result<Result<ChangelogPayload, SkipReason>, PostError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(Err(SkipReason::MissingFile(path.to_path_buf())));
        }
        Err(source) => {
            return Err(PostError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    Ok(ChangelogPayload::from_text(&text)
        .ok_or_else(|| SkipReason::EmptyFile(path.to_path_buf())))
}
