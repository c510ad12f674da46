//! Resonance proof binding.
//!
//! The resonance proof ties an envelope's content hash to primes derived
//! from the author's resonance vector. The verifiable contract is the
//! binding hash: SHA-256 over the canonical rendering of
//! `{contentHash, primes, timestamp}`. Prime derivation is local and
//! deterministic (hash-seeded trial division); wire compatibility with any
//! particular derivation is not part of the contract, only the binding is.

use provenant_core::canonicalize;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::envelope::ResonanceProof;
use crate::identity::RESONANCE_DIMENSIONS;

/// Derives 16 distinct primes from a resonance vector.
///
/// The vector's canonical rendering is hashed to a seed; seed bytes are
/// consumed pairwise as 16-bit candidates and rounded up to the next prime.
/// The seed is re-hashed whenever more candidates are needed, so the
/// derivation always terminates with a full set.
pub fn derive_primes(resonance: &[f64; RESONANCE_DIMENSIONS]) -> Vec<u64> {
    let rendered = canonicalize(&json!(resonance.as_slice()));

    let mut seed: Vec<u8> = {
        let mut hasher = Sha256::new();
        hasher.update(rendered.as_bytes());
        hasher.finalize().to_vec()
    };

    let mut primes = Vec::with_capacity(RESONANCE_DIMENSIONS);
    while primes.len() < RESONANCE_DIMENSIONS {
        for chunk in seed.chunks_exact(2) {
            let candidate = u64::from(u16::from_be_bytes([chunk[0], chunk[1]])).max(2);
            let prime = next_prime(candidate);
            if !primes.contains(&prime) {
                primes.push(prime);
            }
            if primes.len() == RESONANCE_DIMENSIONS {
                break;
            }
        }

        let mut hasher = Sha256::new();
        hasher.update(&seed);
        seed = hasher.finalize().to_vec();
    }

    primes
}

/// Computes the binding hash over primes, content hash, and timestamp.
pub fn proof_hash(content_hash: &str, primes: &[u64], timestamp: u64) -> String {
    let binding = json!({
        "contentHash": content_hash,
        "primes": primes,
        "timestamp": timestamp,
    });

    let mut hasher = Sha256::new();
    hasher.update(canonicalize(&binding).as_bytes());
    hex::encode(hasher.finalize())
}

/// Builds a resonance proof binding the given content hash at `timestamp`.
pub fn build_proof(
    resonance: &[f64; RESONANCE_DIMENSIONS],
    content_hash: &str,
    timestamp: u64,
) -> ResonanceProof {
    let primes = derive_primes(resonance);
    let hash = proof_hash(content_hash, &primes, timestamp);

    ResonanceProof {
        primes,
        hash,
        timestamp,
    }
}

/// Recomputes the binding hash for a proof and compares it to the stored one.
pub fn verify_proof(proof: &ResonanceProof, content_hash: &str) -> bool {
    proof_hash(content_hash, &proof.primes, proof.timestamp) == proof.hash
}

fn next_prime(mut n: u64) -> u64 {
    while !is_prime(n) {
        n += 1;
    }
    n
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
