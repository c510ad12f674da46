//! Signed envelope data model.
//!
//! A [`SignedEnvelope`] is a cryptographically signed, content-addressed
//! wrapper around an arbitrary artifact payload. Envelope values are
//! immutable once created: endorsement produces a new value, never a
//! mutation. The wire form is camelCase for compatibility with
//! envelopes produced by peer implementations.

use provenant_core::{ArtifactType, Capability};
use serde::{Deserialize, Serialize};

use crate::identity::RESONANCE_DIMENSIONS;
use crate::verifier;

/// Author (or endorser) reference carried on an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Hex-encoded Ed25519 public key
    #[serde(rename = "pub")]
    pub pub_key: String,

    /// Hex SHA-256 fingerprint of the public key
    pub fingerprint: String,

    /// 16-dimensional resonance vector
    pub resonance: [f64; RESONANCE_DIMENSIONS],

    /// Hex public key of the secondary (sea) keypair, when present
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sea_pub: Option<String>,
}

/// Secondary integrity binding derived from the author's resonance vector,
/// independent of the Ed25519 signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResonanceProof {
    /// Primes derived from the author's resonance vector
    pub primes: Vec<u64>,

    /// Hex SHA-256 binding of primes, content hash, and timestamp
    pub hash: String,

    /// Unix timestamp in milliseconds at proof creation
    pub timestamp: u64,
}

/// A third party's co-signature over an envelope's content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    /// Identity of the endorser
    pub endorser: AuthorRef,

    /// Base64 Ed25519 signature over the envelope's original content hash
    pub signature: String,

    /// Unix timestamp in milliseconds at endorsement
    pub timestamp: u64,

    /// Optional free-form comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

impl Endorsement {
    /// Checks this endorsement's signature against the envelope content hash
    /// it claims to vouch for.
    pub fn verify(&self, content_hash: &str) -> bool {
        verifier::verify_detached(&self.endorser.pub_key, content_hash.as_bytes(), &self.signature)
    }
}

/// A signed, content-addressed envelope around an artifact payload.
///
/// Invariant: `content_hash` always equals the canonical content hash of
/// `payload`, and `signature` is the author's Ed25519 signature over the
/// UTF-8 bytes of `content_hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedEnvelope<T> {
    /// Hex SHA-256 of the canonicalized payload
    pub content_hash: String,

    /// The wrapped artifact
    pub payload: T,

    /// Kind of artifact wrapped by this envelope
    pub artifact_type: ArtifactType,

    /// Envelope author
    pub author: AuthorRef,

    /// Unix timestamp in milliseconds at creation
    pub created_at: u64,

    /// Artifact version string
    pub version: String,

    /// Base64 Ed25519 signature over the UTF-8 content hash
    pub signature: String,

    /// Resonance binding independent of the Ed25519 signature
    pub resonance_proof: ResonanceProof,

    /// Third-party co-signatures, insertion-ordered and append-only
    pub endorsements: Vec<Endorsement>,

    /// Capabilities the artifact requests from its host
    pub requested_capabilities: Vec<Capability>,

    /// Content hash of the envelope this one derives from, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_envelope_hash: Option<String>,

    /// Advisory secondary signature, verified best-effort
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sea_signature: Option<String>,
}

impl<T> SignedEnvelope<T> {
    /// Whether the given fingerprint already appears among the endorsers.
    pub fn endorsed_by(&self, fingerprint: &str) -> bool {
        self.endorsements
            .iter()
            .any(|e| e.endorser.fingerprint == fingerprint)
    }
}

/// Structured outcome of envelope verification.
///
/// `valid` is the conjunction of the content hash, Ed25519, and resonance
/// checks. Checks run in order and stop at the first failure; a check that
/// never ran reports `None` rather than `false`, so consumers can tell
/// "failed" from "not reached". The sea check is advisory: its failure is
/// reported but never flips `valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Overall verdict (hash && ed25519 && resonance)
    pub valid: bool,

    /// Ed25519 signature check outcome; `None` when the check never ran
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ed25519_valid: Option<bool>,

    /// Sea signature check outcome; `None` when no sea signature is present
    /// or the check never ran
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sea_valid: Option<bool>,

    /// Resonance proof binding check outcome; `None` when the check never
    /// ran
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resonance_valid: Option<bool>,

    /// Reason for the first failed check, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl VerificationResult {
    /// Result for an envelope that failed before any component check ran.
    pub(crate) fn structural_failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            ed25519_valid: None,
            sea_valid: None,
            resonance_valid: None,
            error: Some(error.into()),
        }
    }
}
