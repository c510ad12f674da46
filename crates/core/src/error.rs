//! Core error types

use thiserror::Error;

/// Errors raised while canonicalizing a payload for hashing.
#[derive(Debug, Error)]
pub enum CanonicalError {
    /// The payload could not be converted to a JSON value
    #[error("Failed to serialize payload for hashing: {reason}")]
    Serialization { reason: String },
}
