//! Per-request fan-out over configured feeds.

use std::time::Duration;

use futures::future::join_all;
use trendcast_core::{AppConfig, FeedSpec};
use trendcast_feeds::{backoff_delay_ms, FeedClient, FeedClientSettings, FeedError, RawSignal};

use crate::aggregator::aggregate;
use crate::types::Topic;

/// Fetches every configured feed and aggregates the result into topics.
///
/// Holds no per-request state, so one instance can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: FeedClient,
    feeds: Vec<FeedSpec>,
    feed_deadline: Duration,
    max_topics: usize,
}

impl Pipeline {
    /// `feed_deadline` bounds one feed end to end, retries included.
    #[must_use]
    pub fn new(
        client: FeedClient,
        feeds: Vec<FeedSpec>,
        feed_deadline: Duration,
        max_topics: usize,
    ) -> Self {
        Self {
            client,
            feeds,
            feed_deadline,
            max_topics,
        }
    }

    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig, feeds: Vec<FeedSpec>) -> Result<Self, FeedError> {
        let client = FeedClient::new(&FeedClientSettings::from_app_config(config))?;
        let deadline = feed_deadline(
            config.feed_timeout_secs,
            config.feed_max_retries,
            config.feed_retry_backoff_base_ms,
        );
        Ok(Self::new(client, feeds, deadline, config.max_topics))
    }

    #[must_use]
    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    /// Fetch all feeds concurrently and return the ranked topic list.
    ///
    /// Continues past individual feed failures and timeouts, logging
    /// warnings. Returns an empty `Vec` if every feed fails.
    pub async fn fetch_trending_topics(&self) -> Vec<Topic> {
        let fetches = self.feeds.iter().map(|feed| self.fetch_one(feed));
        let signals: Vec<RawSignal> = join_all(fetches).await.into_iter().flatten().collect();

        let topics = aggregate(signals, self.max_topics);
        tracing::info!(
            feeds = self.feeds.len(),
            topics = topics.len(),
            "fetched trending topics"
        );
        topics
    }

    async fn fetch_one(&self, feed: &FeedSpec) -> Vec<RawSignal> {
        let result = tokio::time::timeout(self.feed_deadline, self.client.fetch_raw_signals(feed))
            .await
            .unwrap_or_else(|_| {
                Err(FeedError::Timeout {
                    feed: feed.id.clone(),
                    timeout_secs: self.feed_deadline.as_secs(),
                })
            });

        match result {
            Ok(signals) => signals,
            Err(e) => {
                tracing::warn!(
                    feed = %feed.id,
                    kind = %feed.kind,
                    error = %e,
                    "feed unavailable, skipping"
                );
                Vec::new()
            }
        }
    }
}

/// Time one feed may take across every attempt: each request may use the full
/// request timeout, and each retry sleeps at most its jittered back-off.
#[must_use]
pub fn feed_deadline(
    request_timeout_secs: u64,
    max_retries: u32,
    backoff_base_ms: u64,
) -> Duration {
    let attempts = u64::from(max_retries) + 1;
    let requests = Duration::from_secs(request_timeout_secs.saturating_mul(attempts));
    let backoff_ms: u64 = (1..=max_retries)
        .map(|retry| {
            let delay = backoff_delay_ms(retry, backoff_base_ms);
            // Upper edge of the +25% jitter band.
            delay.saturating_add(delay / 4)
        })
        .sum();
    requests + Duration::from_millis(backoff_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_without_retries_is_one_request() {
        assert_eq!(feed_deadline(8, 0, 500), Duration::from_secs(8));
    }

    #[test]
    fn deadline_leaves_room_for_every_retry() {
        // 3 requests of 8s, then back-offs of 500ms and 1000ms plus jitter headroom.
        assert_eq!(
            feed_deadline(8, 2, 500),
            Duration::from_secs(24) + Duration::from_millis(625 + 1250)
        );
        assert!(feed_deadline(8, 2, 500) > Duration::from_secs(8));
    }

    #[test]
    fn deadline_caps_each_backoff() {
        // 4 requests of 1s, then three back-offs capped at 30s plus 25% headroom.
        assert_eq!(
            feed_deadline(1, 3, 60_000),
            Duration::from_secs(4) + Duration::from_millis(3 * 37_500)
        );
    }
}
