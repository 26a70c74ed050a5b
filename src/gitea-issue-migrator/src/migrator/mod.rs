//! Per-issue migration.
//!
//! This module moves one source issue to the destination:
//! 1. Skips the issue if its number already exists at the destination
//! 2. Composes the body with the provenance footer and quoted comments
//! 3. Creates the issue, retrying while the destination rate limits us
//! 4. Closes the new issue if the source issue is closed
//! 5. Pauses if the destination reports few remaining requests
//!
//! The existence check assumes source issue N lands as destination issue N,
//! which only holds for an initially empty destination migrated in order.

mod body;
mod error;
mod outcome;

pub use body::compose_body;
pub use error::MigrateError;
pub use outcome::MigrationOutcome;

use crate::comments::comments_for_issue;
use crate::destination::{CreateOutcome, CreatedIssue, IssueDestination, NewIssue};
use crate::rate_limit::{wait_before_retry, wait_if_needed, RateLimitPolicy};
use crate::types::{SourceComment, SourceIssue};
use tracing::{debug, info, info_span, Instrument};

/// Migrates source issues to a destination one at a time.
pub struct IssueMigrator<D> {
    destination: D,
    policy: RateLimitPolicy,
    dry_run: bool,
}

impl<D: IssueDestination> IssueMigrator<D> {
    /// Creates a migrator writing to `destination`.
    pub fn new(destination: D, policy: RateLimitPolicy) -> Self {
        Self {
            destination,
            policy,
            dry_run: false,
        }
    }

    /// Enables dry-run mode: existence is still checked, nothing is written.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns whether dry-run mode is enabled.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the destination this migrator writes to.
    pub fn destination(&self) -> &D {
        &self.destination
    }

    /// Migrates a single issue.
    ///
    /// # Arguments
    ///
    /// * `issue` - Source issue to migrate
    /// * `all_comments` - Every source comment; those for `issue` are quoted in the body
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError`] if a destination request fails, the close
    /// update is rejected, or creation stays rate limited for every allowed attempt.
    pub async fn migrate(
        &self,
        issue: &SourceIssue,
        all_comments: &[SourceComment],
    ) -> Result<MigrationOutcome, MigrateError> {
        let span = info_span!("migrate_issue", number = issue.number);

        async {
            if self.destination.issue_exists(issue.number).await? {
                info!("Issue already exists at destination, skipping");
                return Ok(MigrationOutcome::Skipped);
            }

            let comments = comments_for_issue(issue.number, all_comments);
            let new_issue = NewIssue {
                title: issue.title.clone(),
                body: compose_body(issue, &comments),
            };

            if self.dry_run {
                info!(
                    title = %new_issue.title,
                    comments = comments.len(),
                    closed = issue.is_closed(),
                    "[DRY RUN] Would create issue"
                );
                debug!(body = %new_issue.body, "[DRY RUN] Composed body");
                return Ok(MigrationOutcome::Previewed);
            }

            let created = self.create_with_retry(issue.number, &new_issue).await?;
            info!(
                destination_number = created.number,
                comments = comments.len(),
                "Copied issue"
            );

            let closed = issue.is_closed();
            if closed {
                self.destination.close_issue(created.number).await?;
                info!(destination_number = created.number, "Set issue to closed");
            }

            if let Some(remaining) = created.rate_limit_remaining {
                wait_if_needed(remaining, &self.policy).await;
            }

            Ok(MigrationOutcome::Created {
                number: created.number,
                closed,
            })
        }
        .instrument(span)
        .await
    }

    /// Creates the issue, waiting a fixed delay after each rate-limited attempt.
    async fn create_with_retry(
        &self,
        source_number: u64,
        new_issue: &NewIssue,
    ) -> Result<CreatedIssue, MigrateError> {
        let mut attempt = 1;

        loop {
            match self.destination.create_issue(new_issue).await? {
                CreateOutcome::Created(created) => return Ok(created),
                CreateOutcome::RateLimited { message } => {
                    if attempt >= self.policy.max_create_attempts {
                        return Err(MigrateError::RateLimitExhausted {
                            issue: source_number,
                            attempts: attempt,
                        });
                    }
                    wait_before_retry(&self.policy, attempt, message.as_deref()).await;
                    attempt += 1;
                }
            }
        }
    }
}
