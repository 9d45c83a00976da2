//! Checkpoint error types.

use crate::machine::AutomatonError;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint was taken from a different automaton
    #[error("Checkpoint belongs to automaton '{found}', expected '{expected}'")]
    AutomatonMismatch { found: String, expected: String },

    /// A stored state is not a member of the automaton's state set
    #[error("Checkpoint state rejected: {0}")]
    InvalidState(#[from] AutomatonError),
}
