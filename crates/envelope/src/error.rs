//! Envelope error types

use provenant_core::CanonicalError;
use thiserror::Error;

/// Errors that can occur during envelope operations.
///
/// Structural verification never surfaces here - a malformed or tampered
/// envelope yields a [`crate::envelope::VerificationResult`] instead. These
/// variants cover identity and precondition failures, which represent caller
/// misuse rather than untrusted data.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// No identity is available to sign or endorse
    #[error("No identity available")]
    NoIdentity,

    /// Endorsement was attempted on an envelope that fails verification
    #[error("Cannot endorse an invalid envelope")]
    InvalidEnvelope,

    /// The calling identity already endorsed this envelope
    #[error("Current user has already endorsed this envelope")]
    AlreadyEndorsed,

    /// Payload could not be canonicalized for hashing
    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    /// Envelope could not be (de)serialized for storage
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Key material was malformed
    #[error("Cryptographic error: {reason}")]
    Crypto { reason: String },

    /// The key/value bridge failed
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
