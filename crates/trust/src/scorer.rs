//! Weighted trust scoring.
//!
//! The scorer is the pure part of trust evaluation: factors in, score and
//! level out. The evaluator layers the self-check, the signature gate,
//! caching, and overrides on top of it by delegation.

use provenant_core::{TrustConfig, TrustLevel};

use crate::assessment::TrustFactors;

/// Maps gathered factors to a continuous score and a discrete level.
pub trait TrustScorer: Send + Sync {
    fn score(&self, factors: &TrustFactors) -> f64;
    fn level_for(&self, score: f64) -> TrustLevel;
}

/// The standard five-factor weighted scorer.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    config: TrustConfig,
}

impl WeightedScorer {
    pub fn new(config: TrustConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(TrustConfig::default())
    }
}

impl TrustScorer for WeightedScorer {
    fn score(&self, factors: &TrustFactors) -> f64 {
        self.config.social_weight * factors.social_distance
            + self.config.reputation_weight * factors.author_reputation
            + self.config.endorsement_weight * factors.endorsement_quality
            + self.config.staking_weight * factors.staking_tier
            + self.config.coherence_weight * factors.coherence_score
    }

    fn level_for(&self, score: f64) -> TrustLevel {
        if score >= self.config.vouched_threshold {
            TrustLevel::Vouched
        } else if score >= self.config.community_threshold {
            TrustLevel::Community
        } else {
            TrustLevel::Unknown
        }
    }
}
