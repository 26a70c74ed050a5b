//! Migration configuration.
//!
//! All settings are gathered into a [`MigrationConfig`] that is validated once
//! at construction and then handed to the [`Runner`](crate::Runner).

mod error;

pub use error::ConfigError;

use crate::rate_limit::RateLimitPolicy;
use tracing::debug;
use url::Url;

/// Environment variable holding the source repository API URL.
pub const GITEA_REPO_URL_ENV: &str = "GITEA_REPO_URL";

/// Environment variable holding the source API token.
pub const GITEA_TOKEN_ENV: &str = "GITEA_TOKEN";

/// Environment variable holding the destination issues API URL.
pub const GITHUB_ISSUE_API_URL_ENV: &str = "GITHUB_ISSUE_API_URL";

/// Environment variable holding the destination API token.
pub const GITHUB_API_KEY_ENV: &str = "GITHUB_API_KEY";

/// Validated configuration for a migration run.
#[derive(Clone)]
pub struct MigrationConfig {
    /// Source repository API URL, e.g. `https://git.example.com/api/v1/repos/owner/repo`.
    source_repo_url: Url,
    /// Source API token.
    source_token: String,
    /// Destination issues API URL, e.g. `https://api.github.com/repos/owner/repo/issues`.
    dest_issue_api_url: Url,
    /// Destination API token.
    dest_token: String,
    /// Whether to preview issues without creating them.
    dry_run: bool,
    /// Delays and limits applied when the destination throttles us.
    rate_limit: RateLimitPolicy,
}

// Tokens stay out of debug output.
impl std::fmt::Debug for MigrationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationConfig")
            .field("source_repo_url", &self.source_repo_url.as_str())
            .field("dest_issue_api_url", &self.dest_issue_api_url.as_str())
            .field("dry_run", &self.dry_run)
            .field("rate_limit", &self.rate_limit)
            .finish_non_exhaustive()
    }
}

impl MigrationConfig {
    /// Creates and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is empty or a URL
    /// cannot be parsed.
    pub fn new(
        source_repo_url: &str,
        source_token: &str,
        dest_issue_api_url: &str,
        dest_token: &str,
    ) -> Result<Self, ConfigError> {
        let source_repo_url = parse_url(GITEA_REPO_URL_ENV, source_repo_url)?;
        let source_token = require_non_empty(GITEA_TOKEN_ENV, source_token)?;
        let dest_issue_api_url = parse_url(GITHUB_ISSUE_API_URL_ENV, dest_issue_api_url)?;
        let dest_token = require_non_empty(GITHUB_API_KEY_ENV, dest_token)?;

        debug!(
            source = %source_repo_url,
            destination = %dest_issue_api_url,
            "Configuration validated"
        );

        Ok(Self {
            source_repo_url,
            source_token,
            dest_issue_api_url,
            dest_token,
            dry_run: false,
            rate_limit: RateLimitPolicy::default(),
        })
    }

    /// Builds a configuration from the `GITEA_*` and `GITHUB_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] if a variable is unset, or a
    /// validation error if a value is empty or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            &env_var(GITEA_REPO_URL_ENV)?,
            &env_var(GITEA_TOKEN_ENV)?,
            &env_var(GITHUB_ISSUE_API_URL_ENV)?,
            &env_var(GITHUB_API_KEY_ENV)?,
        )
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets a custom rate-limit policy.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the policy allows zero create attempts.
    pub fn with_rate_limit_policy(mut self, policy: RateLimitPolicy) -> Result<Self, ConfigError> {
        if policy.max_create_attempts == 0 {
            return Err(ConfigError::ValidationError {
                key: "max-create-attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.rate_limit = policy;
        Ok(self)
    }

    /// Returns the source repository API URL.
    pub fn source_repo_url(&self) -> &Url {
        &self.source_repo_url
    }

    /// Returns the source API token.
    pub fn source_token(&self) -> &str {
        &self.source_token
    }

    /// Returns the destination issues API URL.
    pub fn dest_issue_api_url(&self) -> &Url {
        &self.dest_issue_api_url
    }

    /// Returns the destination API token.
    pub fn dest_token(&self) -> &str {
        &self.dest_token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the rate-limit policy.
    pub fn rate_limit(&self) -> &RateLimitPolicy {
        &self.rate_limit
    }
}

fn env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVariable {
        name: name.to_string(),
    })
}

fn require_non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}

/// Parses a URL and drops any trailing slash so paths can be appended.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let value = require_non_empty(key, value)?;
    let url = Url::parse(value.trim_end_matches('/')).map_err(|e| ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("not a valid URL ({e}): {value}"),
    })?;

    if url.host_str().is_none() {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("URL has no host: {value}"),
        });
    }

    Ok(url)
}
