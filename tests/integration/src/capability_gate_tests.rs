//! Capability Gate Consumer Tests
//!
//! The trust core only exposes `TrustAssessment`; the per-capability
//! allow/deny/confirm mapping belongs to the consumer (e.g. a plugin
//! loader). This suite exercises that contract with a reference consumer to
//! pin the data shapes both sides agree on.

use crate::test_utils::{FixtureReputation, FixtureSocialGraph};
use provenant_core::{ArtifactType, Capability, CapabilityDecision, TrustLevel};
use provenant_envelope::{EnvelopeSigner, Identity};
use provenant_trust::{StakingTier, TrustAssessment, TrustEvaluator};
use serde_json::json;
use std::sync::Arc;

/// Reference gate: the mapping a plugin loader would own. Sensitive
/// capabilities require a VOUCHED author; community-level authors are asked;
/// revoked authors are always refused.
fn gate(capability: &Capability, assessment: &TrustAssessment) -> CapabilityDecision {
    let sensitive = capability.as_str().starts_with("fs:")
        || capability.as_str().starts_with("process:");

    match assessment.level {
        TrustLevel::Self_ => CapabilityDecision::Allow,
        TrustLevel::Revoked => CapabilityDecision::Deny {
            reason: format!("author trust revoked (score {})", assessment.score),
        },
        TrustLevel::Vouched => CapabilityDecision::Allow,
        TrustLevel::Community if !sensitive => CapabilityDecision::Allow,
        TrustLevel::Community => CapabilityDecision::Confirm,
        TrustLevel::Unknown => CapabilityDecision::Confirm,
    }
}

async fn assessment_for(tier: StakingTier, friend: bool) -> TrustAssessment {
    let author = Identity::from_signing_key_bytes(&[7u8; 32]).unwrap();
    let author_pub = author.public_key.clone();
    let local = Identity::from_signing_key_bytes(&[8u8; 32]).unwrap();

    let envelope = EnvelopeSigner::new(Arc::new(author))
        .create(
            json!({"name": "widget"}),
            ArtifactType::Plugin,
            "1.0.0",
            vec![Capability::new("fs:write"), Capability::new("ui:render")],
            None,
        )
        .unwrap();

    let social = if friend {
        FixtureSocialGraph::with_friend(&author_pub)
    } else {
        FixtureSocialGraph::default()
    };

    let evaluator = TrustEvaluator::new(
        local.public_key.clone(),
        Arc::new(social),
        Arc::new(FixtureReputation {
            reputation: 0.9,
            tier,
            coherence: 0.8,
        }),
    );

    evaluator.evaluate(&envelope).await.unwrap()
}

#[tokio::test]
async fn test_community_author_confirms_sensitive_capabilities() {
    provenant_core::logging::try_init();

    // The 0.69 reference fixture: just under the VOUCHED boundary.
    let assessment = assessment_for(StakingTier::Archon, true).await;
    assert_eq!(assessment.level, TrustLevel::Community);

    let decision = gate(&Capability::new("fs:write"), &assessment);
    assert_eq!(decision, CapabilityDecision::Confirm);

    let decision = gate(&Capability::new("ui:render"), &assessment);
    assert_eq!(decision, CapabilityDecision::Allow);
}

#[tokio::test]
async fn test_unknown_author_requires_confirmation() {
    let assessment = assessment_for(StakingTier::Neophyte, false).await;
    assert_eq!(assessment.level, TrustLevel::Unknown);

    let decision = gate(&Capability::new("ui:render"), &assessment);
    assert_eq!(decision, CapabilityDecision::Confirm);
}

#[tokio::test]
async fn test_decision_serializes_for_ipc_consumers() {
    let deny = CapabilityDecision::Deny {
        reason: "author trust revoked (score -1)".to_string(),
    };

    let wire = serde_json::to_value(&deny).unwrap();
    assert_eq!(wire["decision"], "DENY");

    let confirm = serde_json::to_value(&CapabilityDecision::Confirm).unwrap();
    assert_eq!(confirm["decision"], "CONFIRM");
}
