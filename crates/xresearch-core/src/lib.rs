//! Shared types for X research tooling: the post record model, environment
//! configuration, and loading of saved post batches.

pub mod app_config;
pub mod config;
pub mod load;
pub mod post;

use thiserror::Error;

pub use app_config::{AppConfig, DisplayLimits, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use load::{dedupe_by_id, load_posts, parse_posts};
pub use post::{MediaItem, MediaKind, Post, PostMetrics, UrlMeta};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read posts file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse posts file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
