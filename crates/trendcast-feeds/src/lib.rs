//! Feed adapters for trendcast.
//!
//! Pulls raw trending-topic candidates from Hacker News, Reddit listings and
//! RSS feeds, maps native engagement onto a shared 0..100 scale, and tags each
//! item with canonical AI keywords. Transient failures are retried here; the
//! aggregation layer above never retries.

pub mod client;
pub mod error;
pub mod score;
pub mod text;
pub mod types;
pub mod vocabulary;

mod retry;
mod sources;

pub use client::{FeedClient, FeedClientSettings};
pub use error::FeedError;
pub use retry::{backoff_delay_ms, MAX_BACKOFF_MS};
pub use types::RawSignal;
