//! Reading issues and comments from the source forge.
//!
//! [`IssueSource`] is the page-level seam; [`collect_issues`] and
//! [`collect_comments`] drain it with [`fetch_all_pages`].

mod error;
mod gitea;

pub use error::SourceError;
pub use gitea::GiteaClient;

use crate::pagination::fetch_all_pages;
use crate::types::{SourceComment, SourceIssue};
use async_trait::async_trait;
use tracing::info;

/// A forge that lists issues and comments one page at a time.
///
/// Pages are 1-based; an empty page marks the end of a listing.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Lists one page of issues, open and closed.
    async fn issues_page(&self, page: u32) -> Result<Vec<SourceIssue>, SourceError>;

    /// Lists one page of the repository-wide comment listing.
    async fn comments_page(&self, page: u32) -> Result<Vec<SourceComment>, SourceError>;
}

/// Collects every issue from the source, sorted by ascending issue number.
///
/// # Errors
///
/// Returns [`SourceError`] if any page request fails.
pub async fn collect_issues<S>(source: &S) -> Result<Vec<SourceIssue>, SourceError>
where
    S: IssueSource + ?Sized,
{
    let mut issues = fetch_all_pages(|page| source.issues_page(page)).await?;
    issues.sort_by_key(|issue| issue.number);

    info!(count = issues.len(), "Collected source issues");
    Ok(issues)
}

/// Collects every comment from the source as one flat list.
///
/// # Errors
///
/// Returns [`SourceError`] if any page request fails.
pub async fn collect_comments<S>(source: &S) -> Result<Vec<SourceComment>, SourceError>
where
    S: IssueSource + ?Sized,
{
    let comments = fetch_all_pages(|page| source.comments_page(page)).await?;

    info!(count = comments.len(), "Collected source comments");
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueState;

    /// Serves fixed pages; any page past the end is empty.
    struct PagedSource {
        issue_pages: Vec<Vec<SourceIssue>>,
        comment_pages: Vec<Vec<SourceComment>>,
    }

    #[async_trait]
    impl IssueSource for PagedSource {
        async fn issues_page(&self, page: u32) -> Result<Vec<SourceIssue>, SourceError> {
            Ok(self
                .issue_pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }

        async fn comments_page(&self, page: u32) -> Result<Vec<SourceComment>, SourceError> {
            Ok(self
                .comment_pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }
    }

    fn issue(number: u64) -> SourceIssue {
        SourceIssue {
            title: format!("Issue {number}"),
            body: String::new(),
            number,
            url: format!("https://git.example.com/acme/app/issues/{number}"),
            state: IssueState::Open,
            assets: Vec::new(),
        }
    }

    fn comment(body: &str) -> SourceComment {
        SourceComment {
            author: "alice".to_string(),
            body: body.to_string(),
            parent_issue_ref: "https://git.example.com/acme/app/issues/1".to_string(),
        }
    }

    #[tokio::test]
    async fn issues_are_sorted_across_pages() {
        let source = PagedSource {
            issue_pages: vec![vec![issue(4), issue(3)], vec![issue(1), issue(2)]],
            comment_pages: Vec::new(),
        };

        let issues = collect_issues(&source).await.unwrap();

        let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn comments_keep_page_order() {
        let source = PagedSource {
            issue_pages: Vec::new(),
            comment_pages: vec![vec![comment("a"), comment("b")], vec![comment("c")]],
        };

        let comments = collect_comments(&source).await.unwrap();

        let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["a", "b", "c"]);
    }
}
