// File: crates/graph-core/src/error.rs
// Summary: Error type for configuration boundaries. Compute paths never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
