use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A deduplicated, scored trending subject. Immutable once aggregated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable id derived from the normalized title and first-seen source.
    pub id: String,
    /// First feed that reported this topic.
    pub source: String,
    /// Every contributing feed, in first-seen order.
    pub sources: Vec<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    /// In `[0, 100]`; comparable across feeds.
    pub score: f64,
    pub keywords: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPlan {
    pub platform_id: String,
    pub platform_name: String,
    pub kpi: String,
    pub hook: String,
    pub long_form_copy: String,
    pub short_form_copy: String,
    pub hashtags: Vec<String>,
    pub posting_window: String,
    pub booster_actions: Vec<String>,
    pub creative_brief: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCampaign {
    pub topic: Topic,
    pub positioning: String,
    pub revenue_angle: String,
    pub platform_plans: Vec<PlatformPlan>,
    pub repurposing_ideas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySection {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageBlueprint {
    pub headline: String,
    pub subheadline: String,
    pub lead_magnet: String,
    pub automation_stack: Vec<String>,
    pub credibility_boosters: Vec<String>,
    pub funnel_prompts: Vec<String>,
    pub key_sections: Vec<KeySection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub runway_plan: Vec<String>,
    pub community_growth_loops: Vec<String>,
}

/// The full payload served by `GET /api/agent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub generated_at: DateTime<Utc>,
    pub topics: Vec<TopicCampaign>,
    pub landing_page: LandingPageBlueprint,
    pub runway_plan: Vec<String>,
    pub community_growth_loops: Vec<String>,
}
