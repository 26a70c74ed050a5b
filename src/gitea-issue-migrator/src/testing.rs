//! In-memory forges and factories for unit tests.

use crate::destination::{
    CreateOutcome, CreatedIssue, DestinationError, IssueDestination, NewIssue,
};
use crate::source::{IssueSource, SourceError};
use crate::types::{IssueState, SourceComment, SourceIssue};
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Create an open SourceIssue with default test values.
pub fn issue(number: u64) -> SourceIssue {
    SourceIssue {
        title: format!("Issue {number}"),
        body: format!("Body of issue {number}"),
        number,
        url: format!("https://git.example.com/acme/app/issues/{number}"),
        state: IssueState::Open,
        assets: Vec::new(),
    }
}

/// Create a closed SourceIssue with default test values.
pub fn closed_issue(number: u64) -> SourceIssue {
    SourceIssue {
        state: IssueState::Closed,
        ..issue(number)
    }
}

/// Create a SourceComment on `issue_number`.
pub fn comment(issue_number: u64, author: &str, body: &str) -> SourceComment {
    SourceComment {
        author: author.to_string(),
        body: body.to_string(),
        parent_issue_ref: format!("https://git.example.com/acme/app/issues/{issue_number}"),
    }
}

/// Source serving one page of issues and one page of comments.
pub struct FakeSource {
    pub issues: Vec<SourceIssue>,
    pub comments: Vec<SourceComment>,
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn issues_page(&self, page: u32) -> Result<Vec<SourceIssue>, SourceError> {
        Ok(if page == 1 { self.issues.clone() } else { Vec::new() })
    }

    async fn comments_page(&self, page: u32) -> Result<Vec<SourceComment>, SourceError> {
        Ok(if page == 1 { self.comments.clone() } else { Vec::new() })
    }
}

/// A request observed by [`FakeDestination`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Exists(u64),
    Create(NewIssue),
    Close(u64),
}

#[derive(Default)]
struct DestinationState {
    existing: HashSet<u64>,
    scripted: VecDeque<CreateOutcome>,
    next_number: u64,
    remaining: Option<u64>,
    fail_close: bool,
    calls: Vec<Call>,
}

/// Destination that numbers issues sequentially and records every call.
///
/// Scripted create outcomes are returned first; once they run out, creates
/// succeed with the next free number.
#[derive(Default)]
pub struct FakeDestination {
    state: Mutex<DestinationState>,
}

impl FakeDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks issue numbers as already present.
    pub fn with_existing(self, numbers: &[u64]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.existing.extend(numbers);
            state.next_number = numbers.iter().copied().max().unwrap_or(0);
        }
        self
    }

    /// Queues outcomes for upcoming create calls.
    pub fn with_scripted(self, outcomes: Vec<CreateOutcome>) -> Self {
        self.state.lock().unwrap().scripted.extend(outcomes);
        self
    }

    /// Sets the remaining-requests value reported by successful creates.
    pub fn with_remaining(self, remaining: u64) -> Self {
        self.state.lock().unwrap().remaining = Some(remaining);
        self
    }

    /// Makes every close request fail.
    pub fn failing_close(self) -> Self {
        self.state.lock().unwrap().fail_close = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn create_calls(&self) -> Vec<NewIssue> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Create(issue) => Some(issue),
                _ => None,
            })
            .collect()
    }

    pub fn close_calls(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Close(number) => Some(number),
                _ => None,
            })
            .collect()
    }
}

pub fn rate_limited() -> CreateOutcome {
    CreateOutcome::RateLimited {
        message: Some("API rate limit exceeded".to_string()),
    }
}

#[async_trait]
impl IssueDestination for FakeDestination {
    async fn issue_exists(&self, number: u64) -> Result<bool, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Exists(number));
        Ok(state.existing.contains(&number))
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreateOutcome, DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(issue.clone()));

        if let Some(outcome) = state.scripted.pop_front() {
            return Ok(outcome);
        }

        state.next_number += 1;
        let number = state.next_number;
        state.existing.insert(number);
        Ok(CreateOutcome::Created(CreatedIssue {
            number,
            rate_limit_remaining: state.remaining,
        }))
    }

    async fn close_issue(&self, number: u64) -> Result<(), DestinationError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Close(number));

        if state.fail_close {
            return Err(DestinationError::UnexpectedStatus {
                operation: format!("close issue #{number}"),
                status: 500,
            });
        }
        Ok(())
    }
}
