//! Error types
//!
//! The simulation itself never fails once a session exists; everything that
//! can go wrong is caught while loading and validating configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("min_gap_margin must be non-negative and finite, got {0}")]
    NegativeMargin(f32),

    #[error("actor ({width}x{height}) does not fit in the world")]
    ActorTooLarge { width: f32, height: f32 },

    #[error(
        "gap of {gap_size} with margin {min_margin} leaves no room in a world {world_height} high"
    )]
    EmptyGapRange {
        gap_size: f32,
        min_margin: f32,
        world_height: f32,
    },
}
