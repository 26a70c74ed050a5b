//! Rate limiting utilities for the destination API.
//!
//! The destination signals throttling in two ways: a 403/429 status on issue
//! creation, and a shrinking `x-ratelimit-remaining` header. This module holds
//! the fixed delays used for both.

use std::time::Duration;
use tracing::{info, warn};

/// Delay before retrying a rate-limited issue creation.
const CREATE_RETRY_DELAY_SECS: u64 = 3;

/// Rate-limited create attempts allowed before giving up on an issue.
const MAX_CREATE_ATTEMPTS: u32 = 20;

/// Remaining requests below which we pause before the next issue.
const MIN_REMAINING_THRESHOLD: u64 = 10;

/// Pause applied when remaining requests drop below the threshold.
const LOW_REMAINING_DELAY_SECS: u64 = 10;

/// Delays and limits applied when the destination throttles requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Fixed delay between rate-limited create attempts.
    pub create_retry_delay: Duration,

    /// Total create attempts (including the first) before failing the issue.
    pub max_create_attempts: u32,

    /// Remaining-request count below which [`wait_if_needed`] pauses.
    pub low_remaining_threshold: u64,

    /// Pause applied by [`wait_if_needed`].
    pub low_remaining_delay: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            create_retry_delay: Duration::from_secs(CREATE_RETRY_DELAY_SECS),
            max_create_attempts: MAX_CREATE_ATTEMPTS,
            low_remaining_threshold: MIN_REMAINING_THRESHOLD,
            low_remaining_delay: Duration::from_secs(LOW_REMAINING_DELAY_SECS),
        }
    }
}

/// Waits out a rate-limited create attempt.
///
/// # Arguments
///
/// * `policy` - Active rate-limit policy
/// * `attempt` - The attempt that was just rejected (1-based)
/// * `message` - Message returned by the destination, if any
pub async fn wait_before_retry(policy: &RateLimitPolicy, attempt: u32, message: Option<&str>) {
    warn!(
        attempt,
        max_attempts = policy.max_create_attempts,
        message = message.unwrap_or(""),
        wait_ms = policy.create_retry_delay.as_millis() as u64,
        "Rate limit exceeded, waiting"
    );
    tokio::time::sleep(policy.create_retry_delay).await;
}

/// Waits if the remaining request count is low, returning true if we waited.
///
/// # Arguments
///
/// * `remaining` - Value of the `x-ratelimit-remaining` header
/// * `policy` - Active rate-limit policy
pub async fn wait_if_needed(remaining: u64, policy: &RateLimitPolicy) -> bool {
    info!(remaining, "Requests remain before being rate limited");

    if remaining >= policy.low_remaining_threshold {
        return false;
    }

    info!(
        remaining,
        wait_ms = policy.low_remaining_delay.as_millis() as u64,
        "Rate limit low, pausing"
    );
    tokio::time::sleep(policy.low_remaining_delay).await;
    true
}
