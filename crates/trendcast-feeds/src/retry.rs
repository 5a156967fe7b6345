//! Retry with exponential back-off and jitter for feed requests.
//!
//! Only transport-level and 5xx failures are retried. Parse errors and 4xx
//! responses come back immediately since a second attempt would see the same
//! body.

use std::future::Future;
use std::time::Duration;

use crate::error::FeedError;

/// Cap on a single un-jittered back-off sleep.
pub const MAX_BACKOFF_MS: u64 = 30_000;

/// Un-jittered sleep before retry number `retry` (1-based).
///
/// Doubles from `base_ms` and is capped at [`MAX_BACKOFF_MS`]. The actual
/// sleep lands within ±25 % of this value.
#[must_use]
pub fn backoff_delay_ms(retry: u32, base_ms: u64) -> u64 {
    let exponent = retry.saturating_sub(1).min(10);
    base_ms.saturating_mul(1u64 << exponent).min(MAX_BACKOFF_MS)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn with_jitter(delay_ms: u64) -> Duration {
    let factor = rand::random::<f64>() * 0.5 + 0.75;
    Duration::from_millis((delay_ms as f64 * factor) as u64)
}

/// Returns `true` for errors that are worth retrying after a back-off delay.
pub(crate) fn is_retriable(err: &FeedError) -> bool {
    match err {
        FeedError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        FeedError::Xml(_) | FeedError::Deserialize { .. } | FeedError::Timeout { .. } => false,
    }
}

/// Runs `operation` for `feed`, retrying transient failures up to
/// `max_retries` times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    feed: &str,
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, FeedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FeedError>>,
{
    let mut retries = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if retries >= max_retries || !is_retriable(&err) {
            return Err(err);
        }

        retries += 1;
        let delay = with_jitter(backoff_delay_ms(retries, backoff_base_ms));
        tracing::warn!(
            feed,
            retry = retries,
            max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "transient feed error, retrying after back-off"
        );
        tokio::time::sleep(delay).await;
    }
}
