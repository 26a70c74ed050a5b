//! Source API error types.

use thiserror::Error;

/// Errors that can occur while reading from the source forge.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed or returned a non-success status.
    #[error("Gitea API error: {0}")]
    Http(#[from] reqwest::Error),

    /// The HTTP client could not be built.
    #[error("Failed to build Gitea client: {0}")]
    Client(String),
}
