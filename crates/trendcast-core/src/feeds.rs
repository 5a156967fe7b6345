use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Wire format a feed speaks. Selects the adapter in `trendcast-feeds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    HackerNews,
    Reddit,
    Rss,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::HackerNews => write!(f, "hacker_news"),
            FeedKind::Reddit => write!(f, "reddit"),
            FeedKind::Rss => write!(f, "rss"),
        }
    }
}

/// One configured trending-topic feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSpec {
    /// Stable identifier, recorded as the `source` of every signal it yields.
    pub id: String,
    pub kind: FeedKind,
    /// Fully-qualified request URL including any query string.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedsFile {
    pub feeds: Vec<FeedSpec>,
}

/// Load and validate the feed list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_feeds(path: &Path) -> Result<FeedsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeedsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_feeds(&content)
}

fn parse_feeds(content: &str) -> Result<FeedsFile, ConfigError> {
    let feeds_file: FeedsFile = serde_yaml::from_str(content)?;
    validate_feeds(&feeds_file)?;
    Ok(feeds_file)
}

fn validate_feeds(feeds_file: &FeedsFile) -> Result<(), ConfigError> {
    if feeds_file.feeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one feed must be configured".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for feed in &feeds_file.feeds {
        if feed.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "feed id must be non-empty".to_string(),
            ));
        }

        if !(feed.url.starts_with("https://") || feed.url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "feed '{}' has invalid url '{}'; must start with http:// or https://",
                feed.id, feed.url
            )));
        }

        if !seen_ids.insert(feed.id.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate feed id: '{}'",
                feed.id
            )));
        }
    }

    Ok(())
}
