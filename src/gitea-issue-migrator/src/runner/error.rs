//! Runner error types.

/// Errors that can abort a migration run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Source API errors, including client initialization.
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    /// Destination API client initialization errors.
    #[error(transparent)]
    Destination(#[from] crate::destination::DestinationError),

    /// Errors migrating an individual issue.
    #[error(transparent)]
    Migrate(#[from] crate::migrator::MigrateError),
}
