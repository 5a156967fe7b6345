//! Runway milestones and community growth loops.

use crate::platforms::Platform;
use crate::rules::classify;
use crate::types::{Roadmap, Topic};

const RUNWAY_PLAN: [&str; 6] = [
    "Today: publish the top-ranked campaign on its lead platform and pin the playbook link",
    "Days 2-3: roll the remaining campaigns out across every platform plan and reply to every comment",
    "Week 1: ship the landing page and lead magnet, then route all bios and pinned posts to it",
    "Week 2: turn the best-performing post into a repurposed carousel, Short and article",
    "Month 1: package the top automation into a fixed-price offer and book ten discovery calls",
    "Months 2-3: publish two client case studies and launch a paid community or cohort",
];

const GROWTH_LOOPS: [&str; 4] = [
    "Comment-to-DM loop: every post asks for a keyword comment, every comment gets the playbook by DM",
    "Collaboration loop: co-create one post per week with an operator in the audience and cross-share it",
    "User-generated loop: feature subscriber automations and invite the next person to share theirs",
    "Referral loop: each lead-magnet download unlocks a bonus template for inviting a peer",
];

/// Builds the roadmap for a ranked topic list.
///
/// Milestones never depend on the topics. Growth loops are annotated with the
/// platform(s) most topics' angles lead on, when there are topics at all.
#[must_use]
pub fn build_roadmap(topics: &[Topic]) -> Roadmap {
    let focus = dominant_platforms(topics);
    let community_growth_loops = GROWTH_LOOPS
        .iter()
        .map(|tactic| {
            if focus.is_empty() {
                (*tactic).to_string()
            } else {
                let names: Vec<&str> = focus.iter().map(|p| p.name()).collect();
                format!("{tactic} [focus: {}]", names.join(" + "))
            }
        })
        .collect();

    Roadmap {
        runway_plan: RUNWAY_PLAN.iter().map(|m| (*m).to_string()).collect(),
        community_growth_loops,
    }
}

/// Most frequent lead platform(s) across topics, ties kept in platform order.
fn dominant_platforms(topics: &[Topic]) -> Vec<Platform> {
    let mut counts = [0usize; Platform::ALL.len()];
    for topic in topics {
        if let Some(rule) = classify(topic) {
            let lead = rule.angle.lead_platform();
            if let Some(pos) = Platform::ALL.iter().position(|p| *p == lead) {
                counts[pos] += 1;
            }
        }
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    Platform::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count == max)
        .map(|(platform, _)| *platform)
        .collect()
}
