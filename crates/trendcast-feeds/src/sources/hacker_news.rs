//! Hacker News search API (Algolia) parser.

use serde::Deserialize;

use crate::error::FeedError;
use crate::score::engagement_score;
use crate::types::RawSignal;

use super::{build_signal, MAX_SIGNALS_PER_FEED};

const ITEM_URL_PREFIX: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    url: Option<String>,
    points: Option<u64>,
    num_comments: Option<u64>,
    story_text: Option<String>,
}

/// Parse an Algolia HN search response.
///
/// Stories without a title are skipped. Self posts (no external `url`) link to
/// the HN item page.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] if the body is not a search response.
pub(crate) fn parse_hacker_news(body: &str, feed_id: &str) -> Result<Vec<RawSignal>, FeedError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| FeedError::Deserialize {
            context: format!("hacker news search ({feed_id})"),
            source: e,
        })?;

    let signals = response
        .hits
        .into_iter()
        .filter_map(|hit| {
            let title = hit.title?;
            let url = hit
                .url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| format!("{ITEM_URL_PREFIX}{}", hit.object_id));
            let engagement = hit
                .points
                .unwrap_or(0)
                .saturating_add(hit.num_comments.unwrap_or(0));
            let description = hit
                .story_text
                .as_deref()
                .map(crate::text::strip_html)
                .unwrap_or_default();
            build_signal(
                feed_id,
                &title,
                &description,
                url,
                engagement_score(engagement),
                &[],
            )
        })
        .take(MAX_SIGNALS_PER_FEED)
        .collect();

    Ok(signals)
}
