//! Error types for the collision simulation

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running a simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// Two trajectories compared step by step were built with different step counts
    #[error("trajectories must have the same number of time steps ({left} vs {right} poses)")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
