//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, scenario parsing and game setup so
//! callers can bubble them up with consistent context.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read scenario file {path}")]
    ReadScenario {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario RON")]
    ParseScenario(#[from] ron::error::SpannedError),

    #[error("scenario '{name}' has no steps")]
    EmptyScenario { name: String },

    #[error("invalid session configuration")]
    InvalidConfig(#[from] sentinel_core::ConfigError),

    #[error("failed to load content: {0:#}")]
    Content(anyhow::Error),

    #[error("failed to encode transcript")]
    Encode(#[from] serde_json::Error),
}
