//! Destination issue body composition.

use crate::types::{SourceComment, SourceIssue};

/// Line separator used throughout the provenance footer.
const LINE_BREAK: &str = "\r\n";

/// Composes the destination body for `issue`.
///
/// The source body is followed by a blank line and a quoted footer: a
/// provenance link back to the source issue, an "Original Comments" header,
/// then one `- author: body` bullet per comment or `(none)` when there are none.
#[must_use]
pub fn compose_body(issue: &SourceIssue, comments: &[&SourceComment]) -> String {
    let comment_lines = if comments.is_empty() {
        "> (none)".to_string()
    } else {
        comments
            .iter()
            .map(|comment| format!("> - {}: {}", comment.author, comment.body))
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
    };

    let footer = [
        format!("> *Imported from Gitea: {}*", issue.url),
        "> Original Comments:".to_string(),
        comment_lines,
    ]
    .join(LINE_BREAK);

    format!("{}{LINE_BREAK}{LINE_BREAK}{footer}", issue.body)
}
