//! End-to-End Trust Flow Integration Tests
//!
//! This test suite validates the complete provenance workflow:
//! 1. Envelope creation and storage through the key/value bridge
//! 2. Retrieval and structural verification
//! 3. Third-party endorsement of the stored envelope
//! 4. Trust evaluation from social, reputation, and endorsement signals
//! 5. Override handling on top of the algorithmic score

use crate::test_utils::{FixtureReputation, FixtureSocialGraph};
use provenant_core::{ArtifactType, Capability, TrustLevel};
use provenant_envelope::{
    EndorsementManager, EnvelopeSigner, EnvelopeStore, EnvelopeVerifier, Identity, MemoryBridge,
    SignedEnvelope,
};
use provenant_trust::{OverrideTarget, StakingTier, TrustEvaluator};
use serde_json::{json, Value};
use std::sync::Arc;

fn plugin_payload() -> Value {
    json!({
        "name": "weather-widget",
        "entry": "main.lua",
        "permissions": ["net:fetch"],
    })
}

#[tokio::test]
async fn test_end_to_end_trust_flow() {
    provenant_core::logging::try_init();

    // Setup: author, two endorsers, and the local evaluating identity
    let author = Identity::from_signing_key_bytes(&[1u8; 32]).unwrap();
    let author_pub = author.public_key.clone();
    let local = Identity::from_signing_key_bytes(&[2u8; 32]).unwrap();

    // Step 1: Author creates and stores a signed plugin envelope
    tracing::info!("Step 1: Creating and storing envelope");

    let signer = EnvelopeSigner::new(Arc::new(author));
    let envelope = signer
        .create(
            plugin_payload(),
            ArtifactType::Plugin,
            "1.2.0",
            vec![Capability::new("net:fetch"), Capability::new("fs:write")],
            None,
        )
        .expect("Failed to create envelope");

    let store = EnvelopeStore::new(Arc::new(MemoryBridge::new()));
    store.save(&envelope).await.expect("Failed to store envelope");

    // Step 2: Retrieve and verify structurally
    tracing::info!("Step 2: Loading and verifying envelope");

    let loaded: SignedEnvelope<Value> = store
        .load(ArtifactType::Plugin, &envelope.content_hash)
        .await
        .expect("Bridge failure")
        .expect("Envelope should be present");

    let verification = EnvelopeVerifier::new().verify(&loaded);
    assert!(verification.valid, "Stored envelope should verify");
    assert_eq!(verification.ed25519_valid, Some(true));
    assert_eq!(verification.resonance_valid, Some(true));

    // Step 3: Two peers endorse the envelope
    tracing::info!("Step 3: Endorsing envelope");

    let mut endorsed = loaded;
    for key in [10u8, 11u8] {
        let endorser = Identity::from_signing_key_bytes(&[key; 32]).unwrap();
        endorsed = EndorsementManager::new(Arc::new(endorser))
            .endorse(&endorsed, Some("verified locally".to_string()))
            .expect("Endorsement should succeed");
    }
    assert_eq!(endorsed.endorsements.len(), 2);
    assert!(EnvelopeVerifier::new().verify(&endorsed).valid);

    // Step 4: Evaluate trust for the endorsed envelope
    tracing::info!("Step 4: Evaluating trust");

    let evaluator = TrustEvaluator::new(
        local.public_key.clone(),
        Arc::new(FixtureSocialGraph::with_friend(&author_pub)),
        Arc::new(FixtureReputation {
            reputation: 0.9,
            tier: StakingTier::Archon,
            coherence: 0.8,
        }),
    );

    let assessment = evaluator.evaluate(&endorsed).await.expect("Evaluation failed");
    // 0.24 + 0.18 + 0.20*(2/5) + 0.15 + 0.12 = 0.77
    assert!((assessment.score - 0.77).abs() < 1e-9);
    assert_eq!(assessment.level, TrustLevel::Vouched);
    assert!((assessment.factors.endorsement_quality - 0.4).abs() < 1e-9);

    // Step 5: A revoking override floors the author regardless of score
    tracing::info!("Step 5: Applying revocation override");

    evaluator.set_override(
        OverrideTarget::Author {
            fingerprint: endorsed.author.fingerprint.clone(),
        },
        TrustLevel::Revoked,
    );
    evaluator.clear_cache();

    let revoked = evaluator.evaluate(&endorsed).await.expect("Evaluation failed");
    assert_eq!(revoked.level, TrustLevel::Revoked);
    assert_eq!(revoked.score, -1.0);

    tracing::info!("End-to-end trust flow complete");
}

#[tokio::test]
async fn test_self_authored_flow_skips_providers() {
    provenant_core::logging::try_init();

    let local = Identity::from_signing_key_bytes(&[3u8; 32]).unwrap();
    let local_pub = local.public_key.clone();

    let signer = EnvelopeSigner::new(Arc::new(local));
    let envelope = signer
        .create(plugin_payload(), ArtifactType::Plugin, "0.1.0", vec![], None)
        .unwrap();

    // Providers that would tank the score if they were consulted.
    let evaluator = TrustEvaluator::new(
        local_pub,
        Arc::new(FixtureSocialGraph::default()),
        Arc::new(FixtureReputation {
            reputation: 0.0,
            tier: StakingTier::Neophyte,
            coherence: 0.0,
        }),
    );

    let assessment = evaluator.evaluate(&envelope).await.unwrap();
    assert_eq!(assessment.level, TrustLevel::Self_);
    assert_eq!(assessment.score, 1.0);
}

#[tokio::test]
async fn test_tampered_envelope_is_revoked_end_to_end() {
    provenant_core::logging::try_init();

    let author = Identity::from_signing_key_bytes(&[4u8; 32]).unwrap();
    let local = Identity::from_signing_key_bytes(&[5u8; 32]).unwrap();

    let signer = EnvelopeSigner::new(Arc::new(author));
    let mut envelope = signer
        .create(plugin_payload(), ArtifactType::Plugin, "1.0.0", vec![], None)
        .unwrap();

    // Simulate in-transit payload tampering.
    envelope.payload["entry"] = json!("backdoor.lua");

    let verification = EnvelopeVerifier::new().verify(&envelope);
    assert!(!verification.valid);
    assert_eq!(verification.error.as_deref(), Some("Content hash mismatch"));

    let evaluator = TrustEvaluator::new(
        local.public_key.clone(),
        Arc::new(FixtureSocialGraph::default()),
        Arc::new(FixtureReputation {
            reputation: 1.0,
            tier: StakingTier::Archon,
            coherence: 1.0,
        }),
    );

    let assessment = evaluator.evaluate(&envelope).await.unwrap();
    assert_eq!(assessment.level, TrustLevel::Revoked);
    assert_eq!(assessment.score, -1.0);
    assert!(!assessment.factors.signature_valid);
}
