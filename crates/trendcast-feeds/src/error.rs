use thiserror::Error;

/// Reasons a single feed can be unavailable for the current request.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network, TLS, or non-2xx HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The response body did not match the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("feed {feed} timed out after {timeout_secs}s")]
    Timeout { feed: String, timeout_secs: u64 },
}
