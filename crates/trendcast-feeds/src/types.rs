/// One trending-topic candidate as returned by a feed adapter.
///
/// Transient: consumed by the aggregator and not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSignal {
    /// Id of the feed that produced this signal.
    pub source: String,
    pub title: String,
    /// Plain-text summary. Empty when the feed carries none.
    pub description: String,
    pub url: String,
    /// Engagement mapped onto `[0, 100]`; see [`crate::score`].
    pub raw_score: f64,
    /// Canonical lower-case keywords.
    pub tags: Vec<String>,
}
