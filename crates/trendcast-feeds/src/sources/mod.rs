//! Per-kind response parsers.
//!
//! Each parser turns one response body into [`RawSignal`]s tagged with the
//! feed id. Network access lives in [`crate::client`]; these are pure.

mod hacker_news;
mod reddit;
mod rss;

pub(crate) use hacker_news::parse_hacker_news;
pub(crate) use reddit::parse_reddit_listing;
pub(crate) use rss::parse_rss_feed;

use crate::text::{collapse_whitespace, truncate_chars};
use crate::types::RawSignal;
use crate::vocabulary::extract_keywords;

/// Maximum signals kept from one feed response.
pub(crate) const MAX_SIGNALS_PER_FEED: usize = 30;

/// Longest description carried forward from a feed item.
const MAX_DESCRIPTION_CHARS: usize = 280;

/// Build a [`RawSignal`], normalizing text and deriving keyword tags.
///
/// Returns `None` when the title is blank.
pub(crate) fn build_signal(
    source: &str,
    title: &str,
    description: &str,
    url: String,
    raw_score: f64,
    extra_tags: &[String],
) -> Option<RawSignal> {
    let title = collapse_whitespace(title);
    if title.is_empty() {
        return None;
    }
    let description = truncate_chars(&collapse_whitespace(description), MAX_DESCRIPTION_CHARS);

    let mut tags = extract_keywords(&format!("{title} {description}"));
    for tag in extra_tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Some(RawSignal {
        source: source.to_string(),
        title,
        description,
        url,
        raw_score,
        tags,
    })
}
