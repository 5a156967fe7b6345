//! Trend aggregation and campaign synthesis.
//!
//! Merges raw feed signals into ranked [`Topic`]s, then derives per-topic
//! campaigns, one landing-page blueprint and a growth roadmap, assembled into
//! a single [`AgentResponse`]. Every stage after the feed fan-out is a pure
//! function of its inputs.

pub mod aggregator;
pub mod assembler;
pub mod blueprint;
pub mod error;
pub mod pipeline;
pub mod platforms;
pub mod roadmap;
pub mod rules;
pub mod synthesizer;
pub mod types;

pub use aggregator::aggregate;
pub use assembler::{assemble_at, build_agent_response};
pub use blueprint::build_landing_page;
pub use error::AgentError;
pub use pipeline::{feed_deadline, Pipeline};
pub use platforms::Platform;
pub use roadmap::build_roadmap;
pub use synthesizer::synthesize;
pub use types::{
    AgentResponse, KeySection, LandingPageBlueprint, PlatformPlan, Roadmap, Topic, TopicCampaign,
};
