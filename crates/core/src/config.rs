//! Configuration for trust scoring.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scoring weights, level thresholds, and cache settings for the trust
/// evaluator. Defaults reproduce the reference weighting; weights sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Weight of the social-graph distance factor
    pub social_weight: f64,

    /// Weight of the author reputation factor
    pub reputation_weight: f64,

    /// Weight of the endorsement quality factor
    pub endorsement_weight: f64,

    /// Weight of the staking tier factor
    pub staking_weight: f64,

    /// Weight of the coherence score factor
    pub coherence_weight: f64,

    /// Minimum score for the VOUCHED level
    pub vouched_threshold: f64,

    /// Minimum score for the COMMUNITY level (below is UNKNOWN)
    pub community_threshold: f64,

    /// Endorsement count at which endorsement quality saturates at 1.0
    pub endorsement_saturation: usize,

    /// Advisory time-to-live attached to cached assessments (milliseconds)
    pub cache_ttl_ms: u64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            social_weight: 0.30,
            reputation_weight: 0.20,
            endorsement_weight: 0.20,
            staking_weight: 0.15,
            coherence_weight: 0.15,
            vouched_threshold: 0.7,
            community_threshold: 0.4,
            endorsement_saturation: 5,
            cache_ttl_ms: 3_600_000, // 1 hour
        }
    }
}

impl TrustConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
