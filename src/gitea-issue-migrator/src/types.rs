//! Core types for the issue migrator.
//!
//! This module contains the data read from the source forge:
//! - [`SourceIssue`] - An issue as listed by the Gitea API
//! - [`SourceComment`] - A comment from the repository-wide comment listing
//! - [`Asset`] - An attachment on an issue
//!
//! Everything here is immutable once fetched; the migrator only reads it.

use serde::{Deserialize, Deserializer, Serialize};

/// Open/closed state of a source issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Issue is open.
    Open,

    /// Issue is closed.
    Closed,
}

impl IssueState {
    /// Returns the state as the lowercase string used by both forges.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// An issue fetched from the source repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceIssue {
    /// Issue title.
    pub title: String,

    /// Issue body (markdown). Empty when the source has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    /// Source-assigned issue number.
    pub number: u64,

    /// Web URL of the issue on the source forge, used as the provenance link.
    #[serde(rename = "html_url")]
    pub url: String,

    /// Open/closed state.
    pub state: IssueState,

    /// Attachments. Carried for completeness; not re-uploaded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
}

impl SourceIssue {
    /// Returns true if the issue is closed at the source.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

/// An attachment on a source issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// Direct download URL.
    #[serde(rename = "browser_download_url")]
    pub download_url: String,

    /// File name.
    pub name: String,
}

/// A comment fetched from the source repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceComment {
    /// Username of the comment author.
    #[serde(rename = "user", deserialize_with = "username")]
    pub author: String,

    /// Comment body (markdown).
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    /// URL of the issue the comment belongs to, e.g. `https://git.example.com/owner/repo/issues/5`.
    #[serde(rename = "issue_url")]
    pub parent_issue_ref: String,
}

/// Deserializes `null` into the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flattens the nested `user` object down to its username.
fn username<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct User {
        username: String,
    }

    Ok(User::deserialize(deserializer)?.username)
}
