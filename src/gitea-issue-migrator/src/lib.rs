#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod comments;
pub mod config;
pub mod destination;
pub mod migrator;
pub mod pagination;
pub mod rate_limit;
pub mod runner;
pub mod source;
pub mod summary;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use comments::{comments_for_issue, parent_issue_number};
pub use config::{ConfigError, MigrationConfig};
pub use destination::{
    CreateOutcome, CreatedIssue, DestinationError, GitHubClient, IssueDestination, NewIssue,
};
pub use migrator::{compose_body, IssueMigrator, MigrateError, MigrationOutcome};
pub use pagination::fetch_all_pages;
pub use rate_limit::{wait_before_retry, wait_if_needed, RateLimitPolicy};
pub use runner::{run_migration, Runner, RunnerError};
pub use source::{collect_comments, collect_issues, GiteaClient, IssueSource, SourceError};
pub use summary::RunSummary;
pub use types::{Asset, IssueState, SourceComment, SourceIssue};
