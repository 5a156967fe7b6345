//! Per-topic campaign synthesis.

use std::sync::LazyLock;

use regex::Regex;
use trendcast_feeds::text::truncate_chars;

use crate::error::AgentError;
use crate::platforms::Platform;
use crate::rules::{classify, keyword_phrase, summary, Angle};
use crate::types::{PlatformPlan, Topic, TopicCampaign};

/// Everything except lowercase ASCII letters and digits.
static HASHTAG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid hashtag regex"));

/// Build the campaign for one topic.
///
/// Pure and independent per topic, so callers may run it in any order or in
/// parallel.
///
/// # Errors
///
/// Returns [`AgentError::SynthesisDefect`] if no rule matches the topic. The
/// rule table ends in a catch-all, so this indicates a broken table rather
/// than bad input.
pub fn synthesize(topic: &Topic) -> Result<TopicCampaign, AgentError> {
    let rule = classify(topic).ok_or_else(|| AgentError::SynthesisDefect {
        topic_id: topic.id.clone(),
    })?;
    let framing = rule.render(topic);

    let platform_plans: Vec<PlatformPlan> = Platform::ALL
        .iter()
        .map(|&platform| build_plan(topic, rule.angle, platform))
        .collect();
    let repurposing_ideas = repurposing_ideas(topic, &Platform::ALL);

    tracing::debug!(
        topic = %topic.id,
        rule = rule.name,
        plans = platform_plans.len(),
        "synthesized topic campaign"
    );

    Ok(TopicCampaign {
        topic: topic.clone(),
        positioning: framing.positioning,
        revenue_angle: framing.revenue_angle,
        platform_plans,
        repurposing_ideas,
    })
}

fn build_plan(topic: &Topic, angle: Angle, platform: Platform) -> PlatformPlan {
    let hook = hook(platform, angle, &topic.title);
    let short_form_copy = truncate_chars(
        &format!("{hook}. {}", angle.call_to_action()),
        platform.short_copy_limit(),
    );

    PlatformPlan {
        platform_id: platform.id().to_string(),
        platform_name: platform.name().to_string(),
        kpi: platform.kpi().to_string(),
        long_form_copy: long_form_copy(topic, angle, platform, &hook),
        short_form_copy,
        hashtags: hashtags(topic, platform),
        posting_window: posting_window(angle, platform),
        booster_actions: booster_actions(topic, platform),
        creative_brief: format!(
            "{} about \"{}\": {}. On-screen keywords: {}. End card points to the free automation playbook.",
            platform.creative_format(),
            topic.title,
            angle.visual_motif(),
            keyword_phrase(topic)
        ),
        hook,
    }
}

fn hook(platform: Platform, angle: Angle, title: &str) -> String {
    let lead = angle.hook_lead();
    match platform {
        Platform::LinkedIn => {
            format!("{lead}: what \"{title}\" means for your operations this quarter")
        }
        Platform::TikTok => format!("POV: {lead}. \"{title}\" in 30 seconds"),
        Platform::YouTubeShorts => format!("{lead} | {title}"),
        Platform::Pinterest => format!("{title}: {lead} (save this checklist)"),
        Platform::Instagram => format!("{lead}. Swipe for the {title} breakdown"),
        Platform::Facebook => format!("{lead}. Let's talk about \"{title}\""),
        Platform::GoogleSearch => format!("{title}: a practical guide"),
    }
}

fn long_form_copy(topic: &Topic, angle: Angle, platform: Platform, hook: &str) -> String {
    format!(
        "{hook}\n\n{}\n\nWhy it matters for {}: the {} wave rewards whoever acts first.\n\n\
         Playbook:\n\
         1. Spot one manual task \"{}\" touches in your week.\n\
         2. Prototype the automation with free tools before Friday.\n\
         3. Measure the hours saved and share the numbers.\n\n{}",
        summary(topic),
        platform.audience(),
        keyword_phrase(topic),
        topic.title,
        angle.call_to_action()
    )
}

/// Topic keywords first, then platform boosters; unique, lowercase, capped.
fn hashtags(topic: &Topic, platform: Platform) -> Vec<String> {
    let from_keywords = topic.keywords.iter().filter_map(|keyword| {
        let slug = HASHTAG_STRIP.replace_all(&keyword.to_lowercase(), "").into_owned();
        (!slug.is_empty()).then(|| format!("#{slug}"))
    });
    let generic = platform.generic_hashtags().iter().map(|t| (*t).to_string());

    let mut tags: Vec<String> = Vec::new();
    for tag in from_keywords.chain(generic) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags.truncate(platform.hashtag_limit());
    tags
}

fn posting_window(angle: Angle, platform: Platform) -> String {
    if angle == Angle::Breakout {
        format!(
            "Within 2 hours of detection while the story is breaking, then {}",
            platform.posting_window()
        )
    } else {
        platform.posting_window().to_string()
    }
}

fn booster_actions(topic: &Topic, platform: Platform) -> Vec<String> {
    platform
        .booster_actions()
        .iter()
        .map(|action| (*action).to_string())
        .chain(std::iter::once(format!(
            "Link the original \"{}\" source in the first comment to earn trust",
            topic.title
        )))
        .collect()
}

/// Four cross-format ideas for channels the platform plans do not cover.
fn repurposing_ideas(topic: &Topic, platforms: &[Platform]) -> Vec<String> {
    let covered = platforms
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ");
    let keywords = keyword_phrase(topic);

    vec![
        format!(
            "Bundle the best-performing {} posts ({covered}) into a weekly email digest on {keywords}",
            platforms.len()
        ),
        format!(
            "Record a 10-minute live teardown of \"{}\" and cut it into three podcast-style audio clips",
            topic.title
        ),
        format!(
            "Turn the {keywords} talking points into a downloadable prompt pack for the lead magnet"
        ),
        format!(
            "Run a community Q&A thread on \"{}\" and mine the replies for next week's hooks",
            topic.title
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    fn topic(title: &str, description: &str, keywords: &[&str], score: f64) -> Topic {
        Topic {
            id: format!("id-{title}"),
            source: "hacker_news_ai".to_string(),
            sources: vec!["hacker_news_ai".to_string()],
            title: title.to_string(),
            description: description.to_string(),
            url: "https://example.com".to_string(),
            score,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn fixtures() -> Vec<Topic> {
        vec![
            topic("Bare topic", "", &[], 0.0),
            topic("Partial topic", "", &["vision"], 42.0),
            topic("Described topic", "Details here", &[], 70.0),
            topic(
                "Full topic with a deliberately long title that will not fit in short copy ceilings anywhere",
                "A long description of an agent launch",
                &["agents", "open-source", "llm", "funding", "gpt", "vision"],
                99.0,
            ),
        ]
    }

    #[test]
    fn one_plan_per_platform_with_hashtags() {
        for t in fixtures() {
            let campaign = synthesize(&t).expect("catch-all guarantees a match");
            assert_eq!(campaign.platform_plans.len(), Platform::ALL.len(), "{}", t.title);
            let ids: Vec<&str> = campaign
                .platform_plans
                .iter()
                .map(|p| p.platform_id.as_str())
                .collect();
            let expected: Vec<&str> = Platform::ALL.iter().map(|p| p.id()).collect();
            assert_eq!(ids, expected);
            for plan in &campaign.platform_plans {
                assert!(!plan.hashtags.is_empty(), "{} / {}", t.title, plan.platform_id);
            }
        }
    }

    #[test]
    fn hashtags_are_unique_lowercase_and_capped() {
        for t in fixtures() {
            let campaign = synthesize(&t).expect("synthesized");
            for (plan, platform) in campaign.platform_plans.iter().zip(Platform::ALL) {
                let unique: HashSet<&String> = plan.hashtags.iter().collect();
                assert_eq!(unique.len(), plan.hashtags.len());
                assert!(plan.hashtags.len() <= platform.hashtag_limit());
                for tag in &plan.hashtags {
                    assert!(tag.starts_with('#'));
                    assert_eq!(*tag, tag.to_lowercase());
                }
            }
        }
    }

    #[test]
    fn keyword_hashtags_come_first_and_strip_punctuation() {
        let t = topic("T", "", &["open-source"], 10.0);
        let tags = hashtags(&t, Platform::LinkedIn);
        assert_eq!(tags[0], "#opensource");
        assert!(tags.contains(&"#ai".to_string()));
    }

    #[test]
    fn keyword_matching_generic_tag_is_not_duplicated() {
        let t = topic("T", "", &["ai", "automation"], 10.0);
        let tags = hashtags(&t, Platform::LinkedIn);
        assert_eq!(tags, vec!["#ai", "#automation", "#futureofwork"]);
    }

    #[test]
    fn short_copy_respects_platform_ceiling() {
        for t in fixtures() {
            let campaign = synthesize(&t).expect("synthesized");
            for (plan, platform) in campaign.platform_plans.iter().zip(Platform::ALL) {
                assert!(
                    plan.short_form_copy.chars().count() <= platform.short_copy_limit(),
                    "{}: {}",
                    plan.platform_id,
                    plan.short_form_copy
                );
            }
        }
    }

    #[test]
    fn missing_fields_degrade_to_generic_copy() {
        let campaign = synthesize(&topic("Bare topic", "", &[], 0.0)).expect("synthesized");
        let plan = &campaign.platform_plans[0];
        assert!(plan.long_form_copy.contains("AI, automation, growth"));
        assert!(campaign.positioning.contains("Bare topic"));
    }

    #[test]
    fn breakout_topics_get_urgent_posting_window() {
        let campaign = synthesize(&topic("Hot", "", &["video"], 95.0)).expect("synthesized");
        assert!(campaign.platform_plans[0]
            .posting_window
            .starts_with("Within 2 hours"));

        let calm = synthesize(&topic("Calm", "", &["video"], 20.0)).expect("synthesized");
        assert_eq!(
            calm.platform_plans[0].posting_window,
            Platform::LinkedIn.posting_window()
        );
    }

    #[test]
    fn repurposing_ideas_never_restate_a_plan() {
        for t in fixtures() {
            let campaign = synthesize(&t).expect("synthesized");
            assert_eq!(campaign.repurposing_ideas.len(), 4);
            for idea in &campaign.repurposing_ideas {
                for plan in &campaign.platform_plans {
                    assert_ne!(idea, &plan.hook);
                    assert_ne!(idea, &plan.short_form_copy);
                    assert_ne!(idea, &plan.long_form_copy);
                    assert_ne!(idea, &plan.creative_brief);
                }
            }
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        for t in fixtures() {
            assert_eq!(synthesize(&t), synthesize(&t));
        }
    }

    #[test]
    fn campaign_serializes_with_camel_case_fields() {
        let campaign = synthesize(&topic("T", "", &["agents"], 50.0)).expect("synthesized");
        let json = serde_json::to_value(&campaign).expect("serialize");
        assert!(json["revenueAngle"].is_string());
        assert!(json["repurposingIdeas"].is_array());
        let plan = &json["platformPlans"][0];
        for field in [
            "platformId",
            "platformName",
            "kpi",
            "hook",
            "longFormCopy",
            "shortFormCopy",
            "hashtags",
            "postingWindow",
            "boosterActions",
            "creativeBrief",
        ] {
            assert!(!plan[field].is_null(), "missing {field}");
        }
    }
}
