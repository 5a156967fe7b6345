//! Reddit listing (`/r/{sub}/hot.json`) parser.

use serde::Deserialize;

use crate::error::FeedError;
use crate::score::engagement_score;
use crate::types::RawSignal;

use super::{build_signal, MAX_SIGNALS_PER_FEED};

const REDDIT_ORIGIN: &str = "https://www.reddit.com";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
    url: Option<String>,
    ups: Option<u64>,
    num_comments: Option<u64>,
    link_flair_text: Option<String>,
    #[serde(default)]
    stickied: bool,
}

/// Parse a Reddit listing response.
///
/// Stickied moderator posts are skipped. The post flair, when present, is
/// carried as an extra tag.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] if the body is not a listing.
pub(crate) fn parse_reddit_listing(
    body: &str,
    feed_id: &str,
) -> Result<Vec<RawSignal>, FeedError> {
    let listing: Listing = serde_json::from_str(body).map_err(|e| FeedError::Deserialize {
        context: format!("reddit listing ({feed_id})"),
        source: e,
    })?;

    let signals = listing
        .data
        .children
        .into_iter()
        .filter(|post| !post.data.stickied)
        .filter_map(|post| to_signal(post.data, feed_id))
        .take(MAX_SIGNALS_PER_FEED)
        .collect();

    Ok(signals)
}

fn to_signal(post: PostData, feed_id: &str) -> Option<RawSignal> {
    let title = post.title?;
    let url = match (post.permalink, post.url) {
        (Some(permalink), _) if !permalink.is_empty() => format!("{REDDIT_ORIGIN}{permalink}"),
        (_, Some(url)) if !url.is_empty() => url,
        _ => return None,
    };
    let engagement = post
        .ups
        .unwrap_or(0)
        .saturating_add(post.num_comments.unwrap_or(0));
    let flair: Vec<String> = post.link_flair_text.into_iter().collect();

    build_signal(
        feed_id,
        &title,
        post.selftext.as_deref().unwrap_or(""),
        url,
        engagement_score(engagement),
        &flair,
    )
}
