//! Shared configuration for the trendcast workspace.
//!
//! Holds the env-driven [`AppConfig`] and the feed list loaded from
//! `config/feeds.yaml`. Every other crate depends on this one.

pub mod app_config;
pub mod config;
pub mod feeds;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_MAX_TOPICS};
pub use feeds::{load_feeds, FeedKind, FeedSpec, FeedsFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read feeds file {path}: {source}")]
    FeedsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feeds file: {0}")]
    FeedsFileParse(#[from] serde_yaml::Error),

    #[error("feeds validation failed: {0}")]
    Validation(String),
}
