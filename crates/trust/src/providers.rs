//! External data provider interfaces.
//!
//! The social graph and reputation systems live outside this crate; trust
//! evaluation only needs these two narrow async interfaces. Implementations
//! typically front network or disk I/O, so every method is fallible and a
//! failure rejects the evaluation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A peer in the social graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    /// Opaque peer identifier
    pub id: String,

    /// Hex-encoded Ed25519 public key
    pub public_key: String,
}

/// Staking tier of an author, mapped onto a scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingTier {
    Neophyte,
    Adept,
    Magus,
    Archon,
}

impl StakingTier {
    /// Scoring weight for this tier. Intermediate tiers interpolate
    /// linearly between Neophyte (0.25) and Archon (1.0).
    pub fn weight(&self) -> f64 {
        match self {
            StakingTier::Neophyte => 0.25,
            StakingTier::Adept => 0.50,
            StakingTier::Magus => 0.75,
            StakingTier::Archon => 1.0,
        }
    }
}

/// Supplies friend lists for social-distance computation.
#[async_trait]
pub trait SocialGraphProvider: Send + Sync {
    /// Direct (1-hop) friends of the local identity.
    async fn get_friends(&self) -> anyhow::Result<Vec<Peer>>;

    /// Friends of the given friend (2-hop candidates).
    async fn get_friends_of_friend(&self, friend_public_key: &str) -> anyhow::Result<Vec<Peer>>;
}

/// Supplies reputation, staking tier, and coherence for an author.
#[async_trait]
pub trait ReputationProvider: Send + Sync {
    /// Reputation in [0, 1].
    async fn get_reputation(&self, public_key: &str) -> anyhow::Result<f64>;

    async fn get_staking_tier(&self, public_key: &str) -> anyhow::Result<StakingTier>;

    /// Coherence score in [0, 1].
    async fn get_coherence_score(&self, public_key: &str) -> anyhow::Result<f64>;
}
