//! Generation and configuration errors

use thiserror::Error;

/// Errors surfaced by the generation pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("No floor region reached the room threshold of {threshold} tiles")]
    NoSurvivingRooms { threshold: usize },

    #[error("{remaining} room(s) could not be connected to the main room")]
    DisconnectedRooms { remaining: usize },

    #[error("No walkable tiles are registered")]
    EmptyRegistry,
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerationError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] GenerationError),
}
