//! Third-party endorsements.
//!
//! An endorsement is a co-signature over an envelope's original content
//! hash, expressing vouching without altering authorship. Endorsing never
//! mutates the input envelope: a new value is returned with the endorsement
//! appended. At most one endorsement per endorser fingerprint.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::envelope::{AuthorRef, Endorsement, SignedEnvelope};
use crate::error::EnvelopeError;
use crate::identity::IdentitySource;
use crate::verifier::EnvelopeVerifier;

/// Appends co-signatures to existing valid envelopes.
pub struct EndorsementManager {
    identities: Arc<dyn IdentitySource>,
    verifier: EnvelopeVerifier,
}

impl EndorsementManager {
    pub fn new(identities: Arc<dyn IdentitySource>) -> Self {
        Self {
            identities,
            verifier: EnvelopeVerifier::new(),
        }
    }

    /// Returns a new envelope equal to `envelope` plus one endorsement by
    /// the current identity.
    ///
    /// # Errors
    /// [`EnvelopeError::NoIdentity`] without an identity;
    /// [`EnvelopeError::InvalidEnvelope`] when the envelope fails
    /// verification; [`EnvelopeError::AlreadyEndorsed`] when the current
    /// identity's fingerprint is already among the endorsers.
    pub fn endorse<T: Serialize + Clone>(
        &self,
        envelope: &SignedEnvelope<T>,
        comment: Option<String>,
    ) -> Result<SignedEnvelope<T>, EnvelopeError> {
        let identity = self.identities.current().ok_or(EnvelopeError::NoIdentity)?;

        if !self.verifier.verify(envelope).valid {
            return Err(EnvelopeError::InvalidEnvelope);
        }
        if envelope.endorsed_by(&identity.fingerprint) {
            return Err(EnvelopeError::AlreadyEndorsed);
        }

        // The endorsement signs the original content hash, not a hash of the
        // endorsement itself.
        let signature = BASE64.encode(identity.sign(envelope.content_hash.as_bytes()).to_bytes());

        let endorsement = Endorsement {
            endorser: AuthorRef {
                pub_key: identity.public_key.clone(),
                fingerprint: identity.fingerprint.clone(),
                resonance: identity.resonance,
                sea_pub: identity.sea_public_key(),
            },
            signature,
            timestamp: current_timestamp_ms(),
            comment,
        };

        info!(
            content_hash = %envelope.content_hash,
            endorser = %identity.fingerprint,
            "Envelope endorsed"
        );

        let mut endorsed = envelope.clone();
        endorsed.endorsements.push(endorsement);
        Ok(endorsed)
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
