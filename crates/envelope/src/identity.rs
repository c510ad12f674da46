//! Identity material for signing and endorsing envelopes.
//!
//! An [`Identity`] bundles an Ed25519 keypair with the author metadata that
//! travels on every envelope: the hex public key, its fingerprint, the
//! 16-dimensional resonance vector, and the body primes derived from it.
//! An optional secondary ("sea") keypair provides the advisory second
//! signature scheme.

use ed25519_dalek::{Signature, Signer, SigningKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::EnvelopeError;
use crate::resonance;

/// Number of dimensions in a resonance vector.
pub const RESONANCE_DIMENSIONS: usize = 16;

/// A local identity capable of signing envelopes and endorsements.
pub struct Identity {
    /// Ed25519 signing key. Zeroized on drop by ed25519-dalek.
    signing_key: SigningKey,

    /// Optional secondary signing key for the advisory sea signature
    sea_key: Option<SigningKey>,

    /// Hex-encoded Ed25519 public key
    pub public_key: String,

    /// Hex SHA-256 of the raw public key bytes
    pub fingerprint: String,

    /// 16-dimensional resonance vector
    pub resonance: [f64; RESONANCE_DIMENSIONS],

    /// Primes deterministically derived from the resonance vector
    pub body_primes: Vec<u64>,
}

impl Identity {
    /// Generates a fresh identity from OS randomness.
    ///
    /// The resonance vector is derived from the public key so that an
    /// identity is fully reproducible from its signing key alone.
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut rng = rand::rngs::OsRng;
        let mut secret_key_bytes = [0u8; 32];
        rng.fill_bytes(&mut secret_key_bytes);

        let identity = Self::from_key(secret_key_bytes);
        secret_key_bytes.zeroize();
        identity
    }

    /// Builds an identity from existing Ed25519 private key bytes.
    pub fn from_signing_key_bytes(key_bytes: &[u8]) -> Result<Self, EnvelopeError> {
        if key_bytes.len() != 32 {
            return Err(EnvelopeError::Crypto {
                reason: format!("Invalid key length: {} (expected 32)", key_bytes.len()),
            });
        }

        let mut key_array = [0u8; 32];
        key_array.copy_from_slice(key_bytes);
        let identity = Self::from_key(key_array);
        key_array.zeroize();

        Ok(identity)
    }

    fn from_key(key_bytes: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&key_bytes);
        let public_key_bytes = signing_key.verifying_key().to_bytes();
        let public_key = hex::encode(public_key_bytes);
        let fingerprint = fingerprint_of(&public_key_bytes);
        let resonance = derive_resonance(&public_key_bytes);
        let body_primes = resonance::derive_primes(&resonance);

        Self {
            signing_key,
            sea_key: None,
            public_key,
            fingerprint,
            resonance,
            body_primes,
        }
    }

    /// Replaces the derived resonance vector (and re-derives body primes).
    pub fn with_resonance(mut self, resonance: [f64; RESONANCE_DIMENSIONS]) -> Self {
        self.resonance = resonance;
        self.body_primes = resonance::derive_primes(&self.resonance);
        self
    }

    /// Attaches a secondary keypair used for the advisory sea signature.
    pub fn with_sea_key(mut self, key_bytes: &[u8]) -> Result<Self, EnvelopeError> {
        if key_bytes.len() != 32 {
            return Err(EnvelopeError::Crypto {
                reason: format!("Invalid sea key length: {} (expected 32)", key_bytes.len()),
            });
        }

        let mut key_array = [0u8; 32];
        key_array.copy_from_slice(key_bytes);
        self.sea_key = Some(SigningKey::from_bytes(&key_array));
        key_array.zeroize();

        Ok(self)
    }

    /// Signs a message with the primary Ed25519 key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Signs a message with the sea key, if one is attached.
    pub fn sea_sign(&self, message: &[u8]) -> Option<Signature> {
        self.sea_key.as_ref().map(|key| key.sign(message))
    }

    /// Hex public key of the sea keypair, if one is attached.
    pub fn sea_public_key(&self) -> Option<String> {
        self.sea_key
            .as_ref()
            .map(|key| hex::encode(key.verifying_key().to_bytes()))
    }

    pub fn has_sea_key(&self) -> bool {
        self.sea_key.is_some()
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose key material in debug output
        f.debug_struct("Identity")
            .field("public_key", &self.public_key)
            .field("fingerprint", &self.fingerprint)
            .field("has_sea_key", &self.sea_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Source of the current signing identity.
///
/// Envelope creation and endorsement fail with
/// [`EnvelopeError::NoIdentity`] when the source is empty.
pub trait IdentitySource: Send + Sync {
    fn current(&self) -> Option<&Identity>;
}

impl IdentitySource for Identity {
    fn current(&self) -> Option<&Identity> {
        Some(self)
    }
}

/// An identity source that is always empty.
#[derive(Debug, Default)]
pub struct NoIdentitySource;

impl IdentitySource for NoIdentitySource {
    fn current(&self) -> Option<&Identity> {
        None
    }
}

/// Computes the hex SHA-256 fingerprint of raw public key bytes.
pub fn fingerprint_of(public_key_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(public_key_bytes);
    hex::encode(hasher.finalize())
}

/// Derives a default resonance vector from public key bytes: the first 16
/// bytes of SHA-256(pub), each scaled into [0, 1].
fn derive_resonance(public_key_bytes: &[u8]) -> [f64; RESONANCE_DIMENSIONS] {
    let mut hasher = Sha256::new();
    hasher.update(public_key_bytes);
    let digest = hasher.finalize();

    let mut resonance = [0.0; RESONANCE_DIMENSIONS];
    for (i, byte) in digest[..RESONANCE_DIMENSIONS].iter().enumerate() {
        resonance[i] = f64::from(*byte) / 255.0;
    }
    resonance
}
