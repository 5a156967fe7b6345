//! Maps feed-native engagement onto the shared `[0, 100]` topic scale.

/// Engagement count that maps to a score of 100.
pub const ENGAGEMENT_CEILING: u64 = 5_000;

/// Score for feeds without engagement data, by position in the feed.
const POSITION_TOP_SCORE: f64 = 90.0;
const POSITION_STEP: f64 = 4.0;
const POSITION_FLOOR: f64 = 10.0;

/// Log-scaled engagement score in `[0, 100]`.
///
/// Votes and comments follow a long-tail distribution, so a linear scale would
/// flatten everything except the front page. `0` engagement scores `0.0`;
/// anything at or above [`ENGAGEMENT_CEILING`] scores `100.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_score(engagement: u64) -> f64 {
    let n = engagement as f64;
    let ceiling = ENGAGEMENT_CEILING as f64;
    let score = (n + 1.0).log10() / (ceiling + 1.0).log10() * 100.0;
    round_one_decimal(score.clamp(0.0, 100.0))
}

/// Rank-based score for feeds that only expose ordering (RSS).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn position_score(index: usize) -> f64 {
    (POSITION_TOP_SCORE - POSITION_STEP * index as f64).max(POSITION_FLOOR)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
