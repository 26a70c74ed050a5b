//! Destination API error types.

use thiserror::Error;

/// Errors that can occur while writing to the destination forge.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// GitHub API or transport error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The destination answered with a status the operation cannot accept.
    #[error("GitHub API returned status {status} while trying to {operation}")]
    UnexpectedStatus { operation: String, status: u16 },

    /// The response body did not have the expected shape.
    #[error("Unexpected GitHub response (status {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The configured issues URL cannot be used as an API base.
    #[error("Invalid GitHub issues URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}
