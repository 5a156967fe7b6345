//! Cross-topic landing-page blueprint.

use crate::platforms::Platform;
use crate::rules::keyword_phrase;
use crate::types::{KeySection, LandingPageBlueprint, Topic};

const FALLBACK_HEADLINE: &str = "Turn this week's AI trends into booked automation projects";
const FALLBACK_LEAD_MAGNET: &str =
    "Free AI Automation Playbook: 10 workflows any small team can automate this month";

const AUTOMATION_STACK: &[&str] = &[
    "Trend radar: this agent's feed aggregation refreshed on every request",
    "Content studio: per-platform copy, hooks and hashtags generated from the campaign plans",
    "Scheduler: native platform schedulers or a free-tier social queue",
    "Capture: landing page form connected to an email list with a welcome sequence",
    "Follow-up: CRM pipeline with automated discovery-call booking",
];

const FUNNEL_PROMPTS: &[&str] = &[
    "Which manual task eats the most hours in your week?",
    "What would you build first if an AI agent handled your admin for free?",
    "How many leads slip through because nobody follows up within a day?",
    "Want the exact workflow map we use? Drop your email and it's yours.",
];

/// Builds the single blueprint shared by every topic in a response.
///
/// Headline copy comes from the top-ranked topic; everything else is stable
/// across requests apart from the counts.
#[must_use]
pub fn build_landing_page(topics: &[Topic]) -> LandingPageBlueprint {
    let platform_count = Platform::ALL.len();
    let topic_count = topics.len();

    let (headline, subheadline, lead_magnet) = match topics.first() {
        Some(top) => (
            format!("{}: turn the trend into revenue before it peaks", top.title),
            format!(
                "{topic_count} trending AI {} turned into ready-to-post campaigns across {platform_count} platforms, with the automation playbook to monetize them.",
                plural(topic_count, "topic", "topics")
            ),
            format!(
                "Free AI Automation Playbook: the {} workflows behind \"{}\"",
                keyword_phrase(top),
                top.title
            ),
        ),
        None => (
            FALLBACK_HEADLINE.to_string(),
            format!(
                "Ready-to-post AI campaigns across {platform_count} platforms, with the automation playbook to monetize them."
            ),
            FALLBACK_LEAD_MAGNET.to_string(),
        ),
    };

    LandingPageBlueprint {
        headline,
        subheadline,
        lead_magnet,
        automation_stack: to_strings(AUTOMATION_STACK),
        credibility_boosters: vec![
            format!("Tracking {topic_count} live AI trend signals refreshed on every visit"),
            format!("Campaign templates tuned for {platform_count} distribution platforms"),
            "Every play is built on free or free-tier tools".to_string(),
            "Case-study slots for the first three automation clients".to_string(),
        ],
        funnel_prompts: to_strings(FUNNEL_PROMPTS),
        key_sections: vec![
            KeySection {
                title: "What you get".to_string(),
                bullets: vec![
                    format!("{topic_count} trend-backed campaign angles"),
                    format!("Hooks, copy and hashtags for {platform_count} platforms"),
                    "A repurposing plan that stretches each idea across formats".to_string(),
                ],
            },
            KeySection {
                title: "How it works".to_string(),
                bullets: vec![
                    "We watch the AI conversation across news and community feeds".to_string(),
                    "Each trend is matched to a proven campaign angle".to_string(),
                    "You post, capture leads and book automation calls".to_string(),
                ],
            },
            KeySection {
                title: "Who it's for".to_string(),
                bullets: vec![
                    "Founders who want inbound without an agency".to_string(),
                    "Consultants packaging AI automation offers".to_string(),
                    "Creators building an audience around AI".to_string(),
                ],
            },
        ],
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
