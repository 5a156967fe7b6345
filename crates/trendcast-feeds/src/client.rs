//! HTTP client that fetches and parses one configured feed.

use std::time::Duration;

use trendcast_core::{AppConfig, FeedKind, FeedSpec};

use crate::error::FeedError;
use crate::retry::retry_with_backoff;
use crate::sources::{parse_hacker_news, parse_reddit_listing, parse_rss_feed};
use crate::types::RawSignal;

/// Transport and retry settings for [`FeedClient`].
#[derive(Debug, Clone)]
pub struct FeedClientSettings {
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl FeedClientSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            user_agent: config.feed_user_agent.clone(),
            request_timeout_secs: config.feed_timeout_secs,
            max_retries: config.feed_max_retries,
            retry_backoff_base_ms: config.feed_retry_backoff_base_ms,
        }
    }
}

/// Fetches raw trending-topic signals from configured feeds.
///
/// One instance is shared across requests; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl FeedClient {
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: &FeedClientSettings) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: settings.max_retries,
            retry_backoff_base_ms: settings.retry_backoff_base_ms,
        })
    }

    /// Fetch and parse one feed.
    ///
    /// Transient HTTP failures are retried with back-off before giving up.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] when the feed stays unreachable, answers with a
    /// non-2xx status, or returns a body the adapter cannot parse.
    pub async fn fetch_raw_signals(&self, feed: &FeedSpec) -> Result<Vec<RawSignal>, FeedError> {
        let body = retry_with_backoff(
            &feed.id,
            self.max_retries,
            self.retry_backoff_base_ms,
            || self.get_body(&feed.url),
        )
        .await?;

        let signals = match feed.kind {
            FeedKind::HackerNews => parse_hacker_news(&body, &feed.id)?,
            FeedKind::Reddit => parse_reddit_listing(&body, &feed.id)?,
            FeedKind::Rss => parse_rss_feed(&body, &feed.id)?,
        };

        tracing::debug!(
            feed = %feed.id,
            kind = %feed.kind,
            count = signals.len(),
            "fetched feed signals"
        );

        Ok(signals)
    }

    async fn get_body(&self, url: &str) -> Result<String, FeedError> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
