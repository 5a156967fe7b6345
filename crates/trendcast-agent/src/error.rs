use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// Aggregation produced no topics. Expected and transient, not a failure.
    #[error("no trending topics available")]
    NoDataAvailable,

    /// The rule table matched nothing for a topic, catch-all included.
    #[error("no campaign rule matched topic {topic_id}")]
    SynthesisDefect { topic_id: String },
}
