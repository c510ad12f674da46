//! Signed Envelope Service
//!
//! This crate implements the content-addressed envelope layer that provides:
//! - Envelope creation with Ed25519 signing over canonical content hashes
//! - Structural verification of hash, signature, and resonance binding
//! - Append-only third-party endorsements
//! - Path-addressed persistence through an opaque key/value bridge
//!
//! Envelopes are the unit of provenance for higher-level trust scoring.

pub mod endorse;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod resonance;
pub mod signer;
pub mod store;
pub mod verifier;

pub use endorse::EndorsementManager;
pub use envelope::{AuthorRef, Endorsement, ResonanceProof, SignedEnvelope, VerificationResult};
pub use error::EnvelopeError;
pub use identity::{Identity, IdentitySource};
pub use resonance::{build_proof, derive_primes, verify_proof};
pub use signer::EnvelopeSigner;
pub use store::{EnvelopeStore, KvBridge, MemoryBridge};
pub use verifier::EnvelopeVerifier;
