//! GitHub issues client built on octocrab's raw request API.
//!
//! The typed octocrab builders hide status codes and headers, both of which
//! drive the migration (existence is a bare 200, throttling is 403/429 plus
//! `x-ratelimit-remaining`), so requests go through `_get`/`_post`/`_patch`.

use super::{CreateOutcome, CreatedIssue, DestinationError, IssueDestination, NewIssue};
use crate::types::IssueState;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// Header carrying the number of requests left in the current window.
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Statuses GitHub uses to reject a request for rate-limit reasons.
const RATE_LIMITED_STATUSES: [u16; 2] = [403, 429];

/// Body of a successful create response; only the number is needed.
#[derive(Deserialize)]
struct CreatedIssueResponse {
    number: u64,
}

/// Body of a GitHub error response.
#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

#[derive(Serialize)]
struct StateUpdate {
    state: IssueState,
}

/// Client for the issues endpoint of a single GitHub repository.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    issues_path: String,
}

impl GitHubClient {
    /// Creates a client for the issues API at `issues_url`.
    ///
    /// The client talks to the origin of `issues_url` and issues requests
    /// against its path, so GitHub Enterprise hosts work unchanged.
    ///
    /// octocrab's own retry layer is disabled: every request is sent once and
    /// throttled creates are retried by the migrator after its fixed delay.
    ///
    /// # Arguments
    ///
    /// * `issues_url` - Issues API URL, e.g. `https://api.github.com/repos/owner/repo/issues`
    /// * `token` - GitHub token, sent as a bearer credential
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError`] if the URL has no usable origin or the
    /// octocrab client cannot be built.
    pub fn new(issues_url: &Url, token: &str) -> Result<Self, DestinationError> {
        let origin = issues_url.origin();
        if !origin.is_tuple() {
            return Err(DestinationError::InvalidUrl {
                url: issues_url.to_string(),
                message: "URL has no scheme and host".to_string(),
            });
        }

        let octocrab = Octocrab::builder()
            .base_uri(origin.ascii_serialization())?
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self {
            octocrab,
            issues_path: issues_url.path().trim_end_matches('/').to_string(),
        })
    }

    fn issue_route(&self, number: u64) -> String {
        format!("{}/{}", self.issues_path, number)
    }
}

#[async_trait]
impl IssueDestination for GitHubClient {
    async fn issue_exists(&self, number: u64) -> Result<bool, DestinationError> {
        let route = self.issue_route(number);
        let response = self.octocrab._get(&route).await?;
        let status = response.status().as_u16();

        debug!(number, status, "Checked destination issue");
        Ok(status == 200)
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreateOutcome, DestinationError> {
        let response = self
            .octocrab
            ._post(self.issues_path.as_str(), Some(issue))
            .await?;

        let status = response.status().as_u16();
        let remaining = parse_remaining(
            response
                .headers()
                .get(RATE_LIMIT_REMAINING_HEADER)
                .and_then(|value| value.to_str().ok()),
        );
        let body = self.octocrab.body_to_string(response).await?;

        if RATE_LIMITED_STATUSES.contains(&status) {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|error| error.message);
            return Ok(CreateOutcome::RateLimited { message });
        }

        let created: CreatedIssueResponse = serde_json::from_str(&body)
            .map_err(|source| DestinationError::MalformedResponse { status, source })?;

        Ok(CreateOutcome::Created(CreatedIssue {
            number: created.number,
            rate_limit_remaining: remaining,
        }))
    }

    async fn close_issue(&self, number: u64) -> Result<(), DestinationError> {
        let route = self.issue_route(number);
        let update = StateUpdate {
            state: IssueState::Closed,
        };
        let response = self.octocrab._patch(&route, Some(&update)).await?;

        if !response.status().is_success() {
            return Err(DestinationError::UnexpectedStatus {
                operation: format!("close issue #{number}"),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

/// Parses the remaining-requests header value.
///
/// A blank value counts as zero. Any other value that is not a whole number
/// is logged and treated as absent.
fn parse_remaining(value: Option<&str>) -> Option<u64> {
    let value = value?.trim();
    if value.is_empty() {
        return Some(0);
    }
    match value.parse() {
        Ok(remaining) => Some(remaining),
        Err(_) => {
            warn!(value, "Ignoring unparseable {RATE_LIMIT_REMAINING_HEADER} header");
            None
        }
    }
}
