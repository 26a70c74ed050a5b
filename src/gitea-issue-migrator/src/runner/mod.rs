//! Orchestrates a full migration run.

mod error;

pub use error::RunnerError;

use crate::config::MigrationConfig;
use crate::destination::{GitHubClient, IssueDestination};
use crate::migrator::IssueMigrator;
use crate::source::{collect_comments, collect_issues, GiteaClient, IssueSource};
use crate::summary::RunSummary;
use tracing::{info, warn};

/// Orchestrates a migration from a Gitea repository to a GitHub repository.
pub struct Runner {
    source: GiteaClient,
    migrator: IssueMigrator<GitHubClient>,
}

impl Runner {
    /// Builds a runner and its API clients from the provided configuration.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either API client cannot be built.
    pub fn new(config: &MigrationConfig) -> Result<Self, RunnerError> {
        let source = GiteaClient::new(config.source_repo_url(), config.source_token())?;
        let destination = GitHubClient::new(config.dest_issue_api_url(), config.dest_token())?;
        let migrator = IssueMigrator::new(destination, config.rate_limit().clone())
            .with_dry_run(config.dry_run());

        Ok(Self { source, migrator })
    }

    /// Executes the full migration.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; issues before it stay migrated.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        run_migration(&self.source, &self.migrator).await
    }
}

/// Collects every issue and comment from `source` and migrates the issues in
/// ascending number order, one at a time.
///
/// # Errors
///
/// Returns the first error encountered; issues before it stay migrated.
pub async fn run_migration<S, D>(
    source: &S,
    migrator: &IssueMigrator<D>,
) -> Result<RunSummary, RunnerError>
where
    S: IssueSource + ?Sized,
    D: IssueDestination,
{
    let mut summary = RunSummary::new(migrator.is_dry_run());

    info!("Collecting source issues");
    let issues = collect_issues(source).await?;
    info!("Collecting source comments");
    let comments = collect_comments(source).await?;

    summary.issues_discovered = issues.len();
    summary.comments_discovered = comments.len();

    if issues.is_empty() {
        warn!("No issues found at source");
        return Ok(summary);
    }

    warn!("Existing destination issues are matched by number; the destination should start empty");

    for (index, issue) in issues.iter().enumerate() {
        info!(
            number = issue.number,
            position = index + 1,
            total = issues.len(),
            state = issue.state.as_str(),
            "Migrating issue"
        );
        let outcome = migrator.migrate(issue, &comments).await?;
        info!(number = issue.number, outcome = outcome.as_str(), "Issue done");
        summary.record_outcome(&outcome);
    }

    info!(
        processed = summary.issues_processed(),
        created = summary.issues_created,
        closed = summary.issues_closed,
        skipped = summary.issues_skipped,
        previewed = summary.issues_previewed,
        "Migration complete"
    );
    Ok(summary)
}
