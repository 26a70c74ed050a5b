//! Gitea API client.

use super::{IssueSource, SourceError};
use crate::types::{SourceComment, SourceIssue};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Timeout applied to every source request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for a single Gitea repository.
///
/// Works against Gitea, Forgejo and Codeberg, which share the same v1 API.
#[derive(Clone)]
pub struct GiteaClient {
    client: reqwest::Client,
    repo_url: String,
}

impl GiteaClient {
    /// Creates a client for the repository API at `repo_url`.
    ///
    /// # Arguments
    ///
    /// * `repo_url` - Repository API URL, e.g. `https://git.example.com/api/v1/repos/owner/repo`
    /// * `token` - Gitea access token
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Client`] if the token is not a valid header value
    /// or the HTTP client cannot be built.
    pub fn new(repo_url: &Url, token: &str) -> Result<Self, SourceError> {
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| SourceError::Client(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self {
            client,
            repo_url: repo_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one page of a listing and deserializes it.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/{}", self.repo_url, path);
        debug!(url = %url, page, "Requesting source page");

        let items = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(items)
    }
}

#[async_trait]
impl IssueSource for GiteaClient {
    async fn issues_page(&self, page: u32) -> Result<Vec<SourceIssue>, SourceError> {
        self.get_page("issues", page, &[("state", "all")]).await
    }

    async fn comments_page(&self, page: u32) -> Result<Vec<SourceComment>, SourceError> {
        self.get_page("issues/comments", page, &[]).await
    }
}
