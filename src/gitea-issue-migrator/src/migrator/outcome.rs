//! Per-issue migration outcomes.

/// What happened to a single source issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// An issue with the same number already exists at the destination.
    Skipped,

    /// The issue was created at the destination.
    Created {
        /// Destination-assigned issue number.
        number: u64,
        /// Whether the destination issue was closed afterwards.
        closed: bool,
    },

    /// Dry run: the issue would have been created.
    Previewed,
}

impl MigrationOutcome {
    /// Returns the outcome as a short string for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Created { closed: false, .. } => "created",
            Self::Created { closed: true, .. } => "created_closed",
            Self::Previewed => "previewed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_outcomes_report_close() {
        let open = MigrationOutcome::Created {
            number: 4,
            closed: false,
        };
        let closed = MigrationOutcome::Created {
            number: 5,
            closed: true,
        };

        assert_eq!(open.as_str(), "created");
        assert_eq!(closed.as_str(), "created_closed");
        assert_eq!(MigrationOutcome::Skipped.as_str(), "skipped");
        assert_eq!(MigrationOutcome::Previewed.as_str(), "previewed");
    }
}
