//! Trust assessment and override data model.

use provenant_core::TrustLevel;
use serde::{Deserialize, Serialize};

/// The five factors feeding the weighted trust score, plus the signature
/// gate outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustFactors {
    /// Whether the envelope passed structural verification
    pub signature_valid: bool,

    /// 1-hop friend 0.8, 2-hop 0.5, unreachable 0.0
    pub social_distance: f64,

    /// Author reputation in [0, 1]
    pub author_reputation: f64,

    /// Staking tier weight in [0.25, 1.0]
    pub staking_tier: f64,

    /// min(endorsement count / saturation, 1.0)
    pub endorsement_quality: f64,

    /// Coherence score in [0, 1]
    pub coherence_score: f64,
}

impl TrustFactors {
    /// All factors at their maximum - used for self-authored envelopes.
    pub fn maxed() -> Self {
        Self {
            signature_valid: true,
            social_distance: 1.0,
            author_reputation: 1.0,
            staking_tier: 1.0,
            endorsement_quality: 1.0,
            coherence_score: 1.0,
        }
    }

    /// All factors zeroed with the signature gate failed.
    pub fn signature_failed() -> Self {
        Self {
            signature_valid: false,
            social_distance: 0.0,
            author_reputation: 0.0,
            staking_tier: 0.0,
            endorsement_quality: 0.0,
            coherence_score: 0.0,
        }
    }

    /// Zeroed factors behind a valid signature - used for override results,
    /// where no provider evidence was gathered.
    pub fn ungathered() -> Self {
        Self {
            signature_valid: true,
            social_distance: 0.0,
            author_reputation: 0.0,
            staking_tier: 0.0,
            endorsement_quality: 0.0,
            coherence_score: 0.0,
        }
    }
}

/// A continuous trust score plus discrete level for an envelope's author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustAssessment {
    /// Continuous score in [-1, 1]
    pub score: f64,

    /// Discrete trust level
    pub level: TrustLevel,

    /// The factor values the score was computed from
    pub factors: TrustFactors,

    /// Unix timestamp in milliseconds at evaluation
    pub evaluated_at: u64,

    /// Advisory time-to-live; `u64::MAX` means never expires. The cache
    /// itself is only invalidated by an explicit clear.
    pub ttl_ms: u64,
}

/// Target of a manual trust override: a specific artifact by content hash,
/// or every artifact by an author fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OverrideTarget {
    #[serde(rename_all = "camelCase")]
    Artifact { content_hash: String },
    #[serde(rename_all = "camelCase")]
    Author { fingerprint: String },
}

/// A manually configured trust decision that bypasses the weighted
/// algorithm for its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustOverride {
    pub target: OverrideTarget,
    pub trust_level: TrustLevel,
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_target_wire_form() {
        let target = OverrideTarget::Artifact {
            content_hash: "abc".to_string(),
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["type"], "artifact");
        assert_eq!(json["contentHash"], "abc");

        let author = OverrideTarget::Author {
            fingerprint: "def".to_string(),
        };
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["type"], "author");
        assert_eq!(json["fingerprint"], "def");
    }

    #[test]
    fn test_override_targets_are_distinct_map_keys() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(
            OverrideTarget::Artifact {
                content_hash: "x".to_string(),
            },
            1,
        );
        map.insert(
            OverrideTarget::Author {
                fingerprint: "x".to_string(),
            },
            2,
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_assessment_round_trips_through_json() {
        let assessment = TrustAssessment {
            score: 0.69,
            level: TrustLevel::Community,
            factors: TrustFactors::maxed(),
            evaluated_at: 1_700_000_000_000,
            ttl_ms: 3_600_000,
        };

        let json = serde_json::to_string(&assessment).unwrap();
        assert!(json.contains("\"evaluatedAt\""));
        let parsed: TrustAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assessment);
    }
}
