//! Envelope verification.
//!
//! Verification runs against untrusted input constantly, so it never errors:
//! malformed or tampered envelopes always yield a structured
//! [`VerificationResult`]. Checks run in order - content hash, Ed25519
//! signature, resonance binding - short-circuiting on the first structural
//! failure; checks that never ran report `None` instead of `false`. The sea
//! signature check is advisory and never affects `valid`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use provenant_core::compute_content_hash;
use serde::Serialize;
use tracing::warn;

use crate::envelope::{SignedEnvelope, VerificationResult};
use crate::resonance;

/// Stateless envelope verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeVerifier;

impl EnvelopeVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verifies an envelope's content hash, Ed25519 signature, resonance
    /// binding, and (best-effort) sea signature.
    pub fn verify<T: Serialize>(&self, envelope: &SignedEnvelope<T>) -> VerificationResult {
        // 1. Content hash must match the recomputed canonical hash.
        let computed_hash = match compute_content_hash(&envelope.payload) {
            Ok(hash) => hash,
            Err(e) => {
                return VerificationResult::structural_failure(format!(
                    "Content hash computation failed: {e}"
                ));
            }
        };
        if computed_hash != envelope.content_hash {
            return VerificationResult::structural_failure("Content hash mismatch");
        }

        // 2. Ed25519 signature over the content hash bytes.
        if !verify_detached(
            &envelope.author.pub_key,
            computed_hash.as_bytes(),
            &envelope.signature,
        ) {
            return VerificationResult {
                valid: false,
                ed25519_valid: Some(false),
                sea_valid: None,
                resonance_valid: None,
                error: Some("Ed25519 signature verification failed".to_string()),
            };
        }

        // 3. Resonance proof binding.
        if !resonance::verify_proof(&envelope.resonance_proof, &computed_hash) {
            return VerificationResult {
                valid: false,
                ed25519_valid: Some(true),
                sea_valid: None,
                resonance_valid: Some(false),
                error: Some("Resonance proof verification failed".to_string()),
            };
        }

        // 4. Sea signature, advisory only: a failure is logged, never fatal.
        let sea_valid = envelope.sea_signature.as_ref().map(|sea_signature| {
            let ok = envelope
                .author
                .sea_pub
                .as_ref()
                .map(|sea_pub| verify_detached(sea_pub, computed_hash.as_bytes(), sea_signature))
                .unwrap_or(false);
            if !ok {
                warn!(
                    content_hash = %envelope.content_hash,
                    "Sea signature verification failed (advisory)"
                );
            }
            ok
        });

        VerificationResult {
            valid: true,
            ed25519_valid: Some(true),
            sea_valid,
            resonance_valid: Some(true),
            error: None,
        }
    }
}

/// Verifies a detached base64 Ed25519 signature made by the hex-encoded
/// public key over `message`. Malformed keys or signatures simply fail.
pub fn verify_detached(pub_key_hex: &str, message: &[u8], signature_b64: &str) -> bool {
    let Ok(key_bytes) = hex::decode(pub_key_hex) else {
        return false;
    };
    let Ok(key_array) = <[u8; 32]>::try_from(key_bytes.as_slice()) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_array) else {
        return false;
    };

    let Ok(sig_bytes) = BASE64.decode(signature_b64) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&sig_bytes) else {
        return false;
    };

    verifying_key.verify(message, &signature).is_ok()
}
