//! Associates comments with the issue they belong to.

use crate::types::SourceComment;
use lazy_regex::regex_captures;

/// Extracts the issue number from a comment's parent issue reference.
///
/// Returns `None` if the reference has no `/issues/<digits>` segment or the
/// digits do not fit in a `u64`.
#[must_use]
pub fn parent_issue_number(parent_issue_ref: &str) -> Option<u64> {
    let (_, digits) = regex_captures!(r"/issues/(\d+)", parent_issue_ref)?;
    digits.parse().ok()
}

/// Returns the comments belonging to `issue_number`, in input order.
///
/// Comments whose reference cannot be parsed never match.
#[must_use]
pub fn comments_for_issue(issue_number: u64, all_comments: &[SourceComment]) -> Vec<&SourceComment> {
    all_comments
        .iter()
        .filter(|comment| parent_issue_number(&comment.parent_issue_ref) == Some(issue_number))
        .collect()
}
