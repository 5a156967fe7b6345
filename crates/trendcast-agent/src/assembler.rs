//! Final response assembly.

use chrono::{DateTime, Utc};

use crate::blueprint::build_landing_page;
use crate::error::AgentError;
use crate::roadmap::build_roadmap;
use crate::synthesizer::synthesize;
use crate::types::{AgentResponse, Topic, TopicCampaign};

/// Build the full campaign payload for a ranked topic list, stamped now.
///
/// # Errors
///
/// Returns [`AgentError::NoDataAvailable`] for an empty topic list and
/// propagates [`AgentError::SynthesisDefect`] from synthesis.
pub fn build_agent_response(topics: &[Topic]) -> Result<AgentResponse, AgentError> {
    assemble_at(topics, Utc::now())
}

/// Same as [`build_agent_response`] with an explicit generation timestamp.
///
/// # Errors
///
/// See [`build_agent_response`].
pub fn assemble_at(
    topics: &[Topic],
    generated_at: DateTime<Utc>,
) -> Result<AgentResponse, AgentError> {
    if topics.is_empty() {
        return Err(AgentError::NoDataAvailable);
    }

    let campaigns = topics
        .iter()
        .map(synthesize)
        .collect::<Result<Vec<TopicCampaign>, _>>()?;
    let landing_page = build_landing_page(topics);
    let roadmap = build_roadmap(topics);

    Ok(AgentResponse {
        generated_at,
        topics: campaigns,
        landing_page,
        runway_plan: roadmap.runway_plan,
        community_growth_loops: roadmap.community_growth_loops,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use trendcast_feeds::RawSignal;

    use super::*;
    use crate::aggregator::aggregate;
    use crate::platforms::Platform;

    fn signal(source: &str, title: &str, score: f64, tags: &[&str]) -> RawSignal {
        RawSignal {
            source: source.to_string(),
            title: title.to_string(),
            description: format!("{title} from {source}"),
            url: format!("https://{source}.example.com"),
            raw_score: score,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn empty_topics_is_no_data() {
        assert_eq!(build_agent_response(&[]), Err(AgentError::NoDataAvailable));
    }

    #[test]
    fn merged_signals_produce_one_campaign() {
        let topics = aggregate(
            vec![
                signal("feed_x", "GPT agents", 80.0, &["gpt", "agents"]),
                signal("feed_y", "gpt   agents", 60.0, &["gpt"]),
            ],
            6,
        );
        let response = build_agent_response(&topics).expect("topics present");

        assert_eq!(response.topics.len(), 1);
        let campaign = &response.topics[0];
        assert!((campaign.topic.score - 80.0).abs() < f64::EPSILON);
        assert_eq!(campaign.topic.source, "feed_x");
        assert_eq!(campaign.topic.sources, vec!["feed_x", "feed_y"]);
        assert_eq!(campaign.platform_plans.len(), Platform::ALL.len());
        assert_eq!(response.runway_plan.len(), 6);
        assert_eq!(response.community_growth_loops.len(), 4);
    }

    #[test]
    fn output_is_byte_identical_for_same_input() {
        let topics = aggregate(
            vec![
                signal("hacker_news_ai", "Open model tops benchmark", 91.0, &["llm"]),
                signal("reddit_artificial", "Agents replace support desks", 70.0, &["agents"]),
                signal("google_news_ai", "Chip export rules tighten", 40.0, &["chips"]),
            ],
            6,
        );
        let first = serde_json::to_string(&assemble_at(&topics, fixed_time()).expect("ok"))
            .expect("serialize");
        let second = serde_json::to_string(&assemble_at(&topics, fixed_time()).expect("ok"))
            .expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn payload_uses_camel_case_and_iso_timestamp() {
        let topics = aggregate(vec![signal("hn", "Agents everywhere", 50.0, &[])], 6);
        let json = serde_json::to_value(assemble_at(&topics, fixed_time()).expect("ok"))
            .expect("serialize");
        assert_eq!(json["generatedAt"], "2025-01-02T03:04:05Z");
        assert!(json["landingPage"]["leadMagnet"].is_string());
        assert!(json["runwayPlan"].is_array());
        assert!(json["communityGrowthLoops"].is_array());
        assert_eq!(json["topics"][0]["topic"]["title"], "Agents everywhere");
    }

    #[test]
    fn campaigns_follow_topic_rank_order() {
        let topics = aggregate(
            vec![
                signal("hn", "Low", 10.0, &[]),
                signal("hn", "High", 90.0, &[]),
            ],
            6,
        );
        let response = assemble_at(&topics, fixed_time()).expect("ok");
        let titles: Vec<&str> = response
            .topics
            .iter()
            .map(|c| c.topic.title.as_str())
            .collect();
        assert_eq!(titles, vec!["High", "Low"]);
        assert!(response.landing_page.headline.starts_with("High"));
    }
}
