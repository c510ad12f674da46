//! Envelope creation.
//!
//! Builds a [`SignedEnvelope`] from a payload and the current identity:
//! canonical content hash, Ed25519 signature over the hash, resonance proof
//! binding, and a best-effort sea signature when the identity carries a
//! secondary keypair.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use provenant_core::{compute_content_hash, ArtifactType, Capability};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::envelope::{AuthorRef, SignedEnvelope};
use crate::error::EnvelopeError;
use crate::identity::IdentitySource;
use crate::resonance;

/// Builds signed envelopes from payloads using the current identity.
pub struct EnvelopeSigner {
    identities: Arc<dyn IdentitySource>,
}

impl EnvelopeSigner {
    pub fn new(identities: Arc<dyn IdentitySource>) -> Self {
        Self { identities }
    }

    /// Creates a fully populated signed envelope around `payload`.
    ///
    /// # Errors
    /// [`EnvelopeError::NoIdentity`] when the identity source is empty;
    /// [`EnvelopeError::Canonical`] when the payload cannot be serialized.
    pub fn create<T: Serialize>(
        &self,
        payload: T,
        artifact_type: ArtifactType,
        version: impl Into<String>,
        capabilities: Vec<Capability>,
        parent_envelope_hash: Option<String>,
    ) -> Result<SignedEnvelope<T>, EnvelopeError> {
        let identity = self.identities.current().ok_or(EnvelopeError::NoIdentity)?;

        let content_hash = compute_content_hash(&payload)?;
        let signature = BASE64.encode(identity.sign(content_hash.as_bytes()).to_bytes());

        let created_at = current_timestamp_ms();
        let resonance_proof = resonance::build_proof(&identity.resonance, &content_hash, created_at);

        // Best-effort secondary signature; absence of a sea keypair is normal
        // and never fails envelope creation.
        let sea_signature = identity
            .sea_sign(content_hash.as_bytes())
            .map(|sig| BASE64.encode(sig.to_bytes()));

        debug!(
            content_hash = %content_hash,
            artifact_type = %artifact_type,
            sea = sea_signature.is_some(),
            "Envelope created"
        );

        Ok(SignedEnvelope {
            content_hash,
            payload,
            artifact_type,
            author: AuthorRef {
                pub_key: identity.public_key.clone(),
                fingerprint: identity.fingerprint.clone(),
                resonance: identity.resonance,
                sea_pub: identity.sea_public_key(),
            },
            created_at,
            version: version.into(),
            signature,
            resonance_proof,
            endorsements: Vec::new(),
            requested_capabilities: capabilities,
            parent_envelope_hash,
            sea_signature,
        })
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
