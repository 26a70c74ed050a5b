//! Issue migration error types.

use crate::destination::DestinationError;
use thiserror::Error;

/// Errors that abort the migration of an issue, and with it the run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Writing to the destination failed.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// Creation stayed rate limited for every allowed attempt.
    #[error("Issue #{issue} still rate limited after {attempts} create attempts")]
    RateLimitExhausted { issue: u64, attempts: u32 },
}
