//! Campaign rule table.
//!
//! An ordered list of `(predicate, template)` pairs evaluated top-down; the
//! first rule whose predicate holds frames the topic. The last rule always
//! matches, so every topic gets a framing.

use crate::platforms::Platform;
use crate::types::Topic;

/// Score at or above which a topic is treated as breaking news.
pub const BREAKOUT_SCORE: f64 = 85.0;

const FALLBACK_KEYWORDS: &str = "AI, automation, growth";
const FALLBACK_SUMMARY: &str =
    "A fast-rising AI conversation that most teams have not turned into action yet.";

/// Campaign framing selected by a rule. Keys the per-platform templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Automation,
    Breakout,
    MarketShift,
    Builder,
    Community,
    Evergreen,
}

impl Angle {
    /// Opening line shared by every platform hook for this angle.
    #[must_use]
    pub fn hook_lead(self) -> &'static str {
        match self {
            Angle::Automation => "Your next hire might be an AI agent",
            Angle::Breakout => "This AI story is blowing up right now",
            Angle::MarketShift => "The AI market just shifted",
            Angle::Builder => "Builders, this changes your stack",
            Angle::Community => "The AI community can't agree on this",
            Angle::Evergreen => "One AI idea worth stealing today",
        }
    }

    #[must_use]
    pub fn call_to_action(self) -> &'static str {
        match self {
            Angle::Automation => "Comment AGENT for the free workflow map.",
            Angle::Breakout => "Follow for the next update before it trends.",
            Angle::MarketShift => "Grab the free readiness checklist in my bio.",
            Angle::Builder => "Comment STACK and I'll send the template.",
            Angle::Community => "Pick a side in the comments.",
            Angle::Evergreen => "Save this and grab the free playbook.",
        }
    }

    #[must_use]
    pub fn visual_motif(self) -> &'static str {
        match self {
            Angle::Automation => "before/after of a manual task replaced by an agent",
            Angle::Breakout => "bold headline card with a live timestamp",
            Angle::MarketShift => "simple chart showing who wins and who loses",
            Angle::Builder => "screen capture of the tool doing the work",
            Angle::Community => "split-screen of the two loudest opinions",
            Angle::Evergreen => "clean three-step diagram",
        }
    }

    /// Platform where this angle performs best; drives roadmap emphasis.
    #[must_use]
    pub fn lead_platform(self) -> Platform {
        match self {
            Angle::Automation | Angle::MarketShift => Platform::LinkedIn,
            Angle::Breakout => Platform::TikTok,
            Angle::Builder => Platform::YouTubeShorts,
            Angle::Community => Platform::Facebook,
            Angle::Evergreen => Platform::GoogleSearch,
        }
    }
}

/// Positioning and revenue framing rendered for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framing {
    pub positioning: String,
    pub revenue_angle: String,
}

pub struct Rule {
    pub name: &'static str,
    pub angle: Angle,
    applies: fn(&Topic) -> bool,
    render: fn(&Topic) -> Framing,
}

impl Rule {
    #[must_use]
    pub fn applies(&self, topic: &Topic) -> bool {
        (self.applies)(topic)
    }

    #[must_use]
    pub fn render(&self, topic: &Topic) -> Framing {
        (self.render)(topic)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("angle", &self.angle)
            .finish_non_exhaustive()
    }
}

/// Rules in priority order. `evergreen` must stay last.
pub static RULES: &[Rule] = &[
    Rule {
        name: "agentic_automation",
        angle: Angle::Automation,
        applies: is_automation,
        render: render_automation,
    },
    Rule {
        name: "breakout_momentum",
        angle: Angle::Breakout,
        applies: is_breakout,
        render: render_breakout,
    },
    Rule {
        name: "market_shift",
        angle: Angle::MarketShift,
        applies: is_market_shift,
        render: render_market_shift,
    },
    Rule {
        name: "builder_stack",
        angle: Angle::Builder,
        applies: is_builder,
        render: render_builder,
    },
    Rule {
        name: "community_pulse",
        angle: Angle::Community,
        applies: is_community,
        render: render_community,
    },
    Rule {
        name: "evergreen",
        angle: Angle::Evergreen,
        applies: always,
        render: render_evergreen,
    },
];

/// First rule in [`RULES`] that applies to `topic`.
#[must_use]
pub fn classify(topic: &Topic) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.applies(topic))
}

/// Comma-separated keywords, or a generic phrase when there are none.
#[must_use]
pub fn keyword_phrase(topic: &Topic) -> String {
    if topic.keywords.is_empty() {
        FALLBACK_KEYWORDS.to_string()
    } else {
        topic
            .keywords
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Topic description, or a generic sentence when the feed gave none.
#[must_use]
pub fn summary(topic: &Topic) -> &str {
    let trimmed = topic.description.trim();
    if trimmed.is_empty() {
        FALLBACK_SUMMARY
    } else {
        trimmed
    }
}

fn has_any(topic: &Topic, words: &[&str]) -> bool {
    words.iter().any(|w| topic.keywords.contains(*w))
}

fn is_automation(t: &Topic) -> bool {
    has_any(t, &["agents", "automation", "workflows", "copilots", "chatbots"])
}

fn is_breakout(t: &Topic) -> bool {
    t.score >= BREAKOUT_SCORE
}

fn is_market_shift(t: &Topic) -> bool {
    has_any(
        t,
        &["funding", "regulation", "policy", "acquisition", "lawsuit", "chips"],
    )
}

fn is_builder(t: &Topic) -> bool {
    has_any(
        t,
        &[
            "llm", "models", "open-source", "api", "rag", "gpt", "chatgpt", "openai", "anthropic",
            "claude", "gemini", "llama", "mistral", "deepseek", "coding",
        ],
    )
}

fn is_community(t: &Topic) -> bool {
    t.source.starts_with("reddit")
}

fn always(_: &Topic) -> bool {
    true
}

fn render_automation(t: &Topic) -> Framing {
    Framing {
        positioning: format!(
            "Position \"{}\" as proof that {} can run real work today, then show the one workflow you would hand to an agent first.",
            t.title,
            keyword_phrase(t)
        ),
        revenue_angle: format!(
            "Sell a fixed-scope agent build: map one manual process inspired by \"{}\", automate it with free tooling, and upsell a monthly optimisation retainer.",
            t.title
        ),
    }
}

fn render_breakout(t: &Topic) -> Framing {
    Framing {
        positioning: format!(
            "Be first with a plain-English explainer of \"{}\" while attention peaks (momentum {:.0}/100).",
            t.title, t.score
        ),
        revenue_angle: "Capture the spike with a free \"what this means for your business\" audit that books automation discovery calls.".to_string(),
    }
}

fn render_market_shift(t: &Topic) -> Framing {
    Framing {
        positioning: format!(
            "Frame \"{}\" as a market shift operators have to respond to: {}",
            t.title,
            summary(t)
        ),
        revenue_angle: format!(
            "Offer a paid readiness assessment that turns the {} shift into a prioritised automation backlog.",
            keyword_phrase(t)
        ),
    }
}

fn render_builder(t: &Topic) -> Framing {
    Framing {
        positioning: format!(
            "Translate \"{}\" into a hands-on build that shows what the {} stack unlocks for non-technical teams.",
            t.title,
            keyword_phrase(t)
        ),
        revenue_angle: format!(
            "Give away a template pack built on {} and sell done-for-you implementation to the teams who download it.",
            keyword_phrase(t)
        ),
    }
}

fn render_community(t: &Topic) -> Framing {
    Framing {
        positioning: format!(
            "Turn the community debate around \"{}\" into a clear stance that invites replies.",
            t.title
        ),
        revenue_angle: "Convert the most engaged commenters with a free live workshop that ends in an automation sprint offer.".to_string(),
    }
}

fn render_evergreen(t: &Topic) -> Framing {
    Framing {
        positioning: format!("Use \"{}\" as a teachable moment: {}", t.title, summary(t)),
        revenue_angle: "Route readers to the free automation playbook and nurture them toward a paid implementation sprint.".to_string(),
    }
}
