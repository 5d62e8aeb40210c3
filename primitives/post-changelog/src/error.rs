use std::{error::Error as StdError, fmt, io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// Failures that end a run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum PostError {
    /// The changelog file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The webhook answered with a non-success status.
    #[error("webhook responded with {status}: {body}")]
    Delivery { status: StatusCode, body: String },

    /// The request never produced a response.
    #[error("failed to reach webhook: {0}")]
    Transport(#[source] reqwest::Error),
}

impl PostError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Renders the error followed by its chain of causes.
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

impl From<reqwest::Error> for PostError {
    fn from(err: reqwest::Error) -> Self {
        // Webhook URLs carry their credentials in the path.
        Self::Transport(err.without_url())
    }
}

/// Display adapter that prints an error with its `source()` chain.
#[derive(Debug)]
pub struct Report<'a>(&'a PostError);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        // Read and Transport already inline their direct source.
        let mut cause = self.0.source().and_then(|e| e.source());
        while let Some(err) = cause {
            write!(f, ": {err}")?;
            cause = err.source();
        }

        Ok(())
    }
}
