//! Writing issues to the destination forge.

mod error;
mod github;

pub use error::DestinationError;
pub use github::GitHubClient;

use async_trait::async_trait;
use serde::Serialize;

/// Payload for creating a destination issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,

    /// Composed issue body, including the provenance footer.
    pub body: String,
}

/// An issue accepted by the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Destination-assigned issue number.
    pub number: u64,

    /// Parsed `x-ratelimit-remaining` header of the create response, if present.
    pub rate_limit_remaining: Option<u64>,
}

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The issue was created.
    Created(CreatedIssue),

    /// The destination refused the request with 403 or 429.
    RateLimited {
        /// Message from the response body, if any.
        message: Option<String>,
    },
}

/// A forge that issues can be checked, created and closed on.
#[async_trait]
pub trait IssueDestination: Send + Sync {
    /// Returns true if an issue with `number` already exists.
    async fn issue_exists(&self, number: u64) -> Result<bool, DestinationError>;

    /// Creates an issue.
    async fn create_issue(&self, issue: &NewIssue) -> Result<CreateOutcome, DestinationError>;

    /// Sets the state of issue `number` to closed.
    async fn close_issue(&self, number: u64) -> Result<(), DestinationError>;
}
