//! Run summary types.

use crate::migrator::MigrationOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of issues found at the source.
    pub issues_discovered: usize,

    /// Number of comments found at the source.
    pub comments_discovered: usize,

    /// Number of issues created at the destination.
    pub issues_created: usize,

    /// Number of created issues that were closed afterwards.
    pub issues_closed: usize,

    /// Number of issues skipped because they already existed.
    pub issues_skipped: usize,

    /// Number of issues previewed in a dry run.
    pub issues_previewed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the outcome of one issue.
    pub fn record_outcome(&mut self, outcome: &MigrationOutcome) {
        match outcome {
            MigrationOutcome::Skipped => self.issues_skipped += 1,
            MigrationOutcome::Created { closed, .. } => {
                self.issues_created += 1;
                if *closed {
                    self.issues_closed += 1;
                }
            }
            MigrationOutcome::Previewed => self.issues_previewed += 1,
        }
    }

    /// Returns the number of issues that received an outcome.
    #[must_use]
    pub fn issues_processed(&self) -> usize {
        self.issues_created + self.issues_skipped + self.issues_previewed
    }
}
