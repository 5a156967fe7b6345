//! Topic aggregation: normalize, deduplicate and rank raw feed signals.

use std::collections::{BTreeSet, HashMap};

use sha2::{Digest, Sha256};
use trendcast_feeds::text::collapse_whitespace;
use trendcast_feeds::RawSignal;

use crate::types::Topic;

/// Hex characters kept from the SHA-256 topic digest.
const TOPIC_ID_LEN: usize = 16;

/// Topic under construction while signals are being merged.
struct Draft {
    key: String,
    title: String,
    description: String,
    url: String,
    sources: Vec<String>,
    score: f64,
    keywords: BTreeSet<String>,
}

/// Merge raw signals from every feed into a ranked, bounded topic list.
///
/// Signals whose titles normalize to the same key collapse into one topic: the
/// score is the highest contributing score, keywords are unioned, and `source`
/// is the first contributor. Ranking is by descending score; the sort is
/// stable so ties keep first-seen order. At most `max_topics` are returned.
///
/// An empty input yields an empty list, which callers treat as "no data".
#[must_use]
pub fn aggregate(signals: Vec<RawSignal>, max_topics: usize) -> Vec<Topic> {
    let mut drafts: Vec<Draft> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for signal in signals {
        let key = dedup_key(&signal.title);
        if key.is_empty() {
            continue;
        }
        let score = clamp_score(signal.raw_score);

        if let Some(&idx) = index_by_key.get(&key) {
            let draft = &mut drafts[idx];
            draft.score = draft.score.max(score);
            draft.keywords.extend(normalize_tags(&signal.tags));
            if draft.description.is_empty() {
                draft.description = signal.description.trim().to_string();
            }
            if draft.url.is_empty() {
                draft.url = signal.url;
            }
            if !draft.sources.contains(&signal.source) {
                draft.sources.push(signal.source);
            }
            continue;
        }

        index_by_key.insert(key.clone(), drafts.len());
        drafts.push(Draft {
            key,
            title: collapse_whitespace(&signal.title),
            description: signal.description.trim().to_string(),
            url: signal.url,
            sources: vec![signal.source],
            score,
            keywords: normalize_tags(&signal.tags).collect(),
        });
    }

    let mut topics: Vec<Topic> = drafts.into_iter().map(Draft::into_topic).collect();
    topics.sort_by(|a, b| b.score.total_cmp(&a.score));
    topics.truncate(max_topics);

    tracing::debug!(topics = topics.len(), "aggregated trending topics");

    topics
}

impl Draft {
    fn into_topic(self) -> Topic {
        let source = self.sources[0].clone();
        Topic {
            id: topic_id(&self.key, &source),
            source,
            sources: self.sources,
            title: self.title,
            description: self.description,
            url: self.url,
            score: self.score,
            keywords: self.keywords,
        }
    }
}

/// Case-folded, whitespace-collapsed title.
fn dedup_key(title: &str) -> String {
    collapse_whitespace(title).to_lowercase()
}

fn clamp_score(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn normalize_tags(tags: &[String]) -> impl Iterator<Item = String> + '_ {
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
}

fn topic_id(key: &str, source: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(format!("{key}|{source}").as_bytes()));
    digest[..TOPIC_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(source: &str, title: &str, score: f64, tags: &[&str]) -> RawSignal {
        RawSignal {
            source: source.to_string(),
            title: title.to_string(),
            description: String::new(),
            url: format!("https://example.com/{}", title.len()),
            raw_score: score,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn empty_input_yields_no_topics() {
        assert!(aggregate(Vec::new(), 6).is_empty());
    }

    #[test]
    fn merges_case_and_whitespace_variants() {
        let topics = aggregate(
            vec![
                signal("X", "GPT agents", 80.0, &["gpt"]),
                signal("Y", "gpt   agents", 60.0, &["agents"]),
            ],
            6,
        );
        assert_eq!(topics.len(), 1);
        let topic = &topics[0];
        assert!((topic.score - 80.0).abs() < f64::EPSILON);
        assert_eq!(topic.source, "X");
        assert_eq!(topic.sources, vec!["X", "Y"]);
        assert_eq!(topic.title, "GPT agents");
        assert_eq!(
            topic.keywords.iter().cloned().collect::<Vec<_>>(),
            vec!["agents", "gpt"]
        );
    }

    #[test]
    fn merged_score_is_max_even_when_later_signal_is_higher() {
        let topics = aggregate(
            vec![
                signal("X", "Robot chefs", 40.0, &[]),
                signal("Y", "robot chefs", 95.0, &[]),
            ],
            6,
        );
        assert!((topics[0].score - 95.0).abs() < f64::EPSILON);
        assert_eq!(topics[0].source, "X");
    }

    #[test]
    fn duplicate_signal_is_idempotent() {
        let s = signal("X", "Vision models", 70.0, &["vision"]);
        let once = aggregate(vec![s.clone()], 6);
        let twice = aggregate(vec![s.clone(), s], 6);
        assert_eq!(once, twice);
    }

    #[test]
    fn ranks_by_descending_score() {
        let topics = aggregate(
            vec![
                signal("X", "low", 10.0, &[]),
                signal("X", "high", 90.0, &[]),
                signal("X", "mid", 50.0, &[]),
            ],
            6,
        );
        let titles: Vec<&str> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let topics = aggregate(
            vec![
                signal("A", "first", 50.0, &[]),
                signal("B", "second", 50.0, &[]),
                signal("C", "third", 50.0, &[]),
            ],
            6,
        );
        let titles: Vec<&str> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn truncates_to_max_topics() {
        let signals = (0..10)
            .map(|i| signal("X", &format!("topic {i}"), f64::from(i), &[]))
            .collect();
        let topics = aggregate(signals, 3);
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].title, "topic 9");
    }

    #[test]
    fn blank_titles_are_dropped() {
        assert!(aggregate(vec![signal("X", "   ", 50.0, &[])], 6).is_empty());
    }

    #[test]
    fn scores_are_clamped_and_nan_is_zero() {
        let topics = aggregate(
            vec![
                signal("X", "too hot", 250.0, &[]),
                signal("X", "negative", -5.0, &[]),
                signal("X", "nan", f64::NAN, &[]),
            ],
            6,
        );
        assert!((topics[0].score - 100.0).abs() < f64::EPSILON);
        assert!(topics[1].score.abs() < f64::EPSILON);
        assert!(topics[2].score.abs() < f64::EPSILON);
    }

    #[test]
    fn first_non_empty_description_wins() {
        let mut a = signal("X", "LLM pricing war", 50.0, &[]);
        let mut b = signal("Y", "llm pricing war", 50.0, &[]);
        let mut c = signal("Z", "LLM Pricing War", 50.0, &[]);
        a.description = String::new();
        b.description = "Prices fall again".to_string();
        c.description = "Ignored".to_string();
        let topics = aggregate(vec![a, b, c], 6);
        assert_eq!(topics[0].description, "Prices fall again");
    }

    #[test]
    fn ids_are_stable_and_unique() {
        let build = || {
            aggregate(
                vec![
                    signal("X", "Alpha", 50.0, &[]),
                    signal("X", "Beta", 40.0, &[]),
                ],
                6,
            )
        };
        let first = build();
        let second = build();
        assert_eq!(first[0].id, second[0].id);
        assert_ne!(first[0].id, first[1].id);
        assert_eq!(first[0].id.len(), TOPIC_ID_LEN);
    }

    #[test]
    fn tags_are_lowercased_and_blank_tags_dropped() {
        let topics = aggregate(vec![signal("X", "t", 1.0, &["  LLM ", "", "Agents"])], 6);
        assert_eq!(
            topics[0].keywords.iter().cloned().collect::<Vec<_>>(),
            vec!["agents", "llm"]
        );
    }
}
