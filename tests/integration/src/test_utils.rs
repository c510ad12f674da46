//! Shared fixtures for integration tests.

use async_trait::async_trait;
use provenant_trust::{Peer, ReputationProvider, SocialGraphProvider, StakingTier};
use std::collections::HashMap;

/// Social graph fixture with a fixed friend list and second-hop map.
#[derive(Default)]
pub struct FixtureSocialGraph {
    pub friends: Vec<Peer>,
    pub friends_of: HashMap<String, Vec<Peer>>,
}

impl FixtureSocialGraph {
    /// Graph where the given public key is a direct friend.
    pub fn with_friend(public_key: &str) -> Self {
        Self {
            friends: vec![Peer {
                id: "friend-001".to_string(),
                public_key: public_key.to_string(),
            }],
            friends_of: HashMap::new(),
        }
    }
}

#[async_trait]
impl SocialGraphProvider for FixtureSocialGraph {
    async fn get_friends(&self) -> anyhow::Result<Vec<Peer>> {
        Ok(self.friends.clone())
    }

    async fn get_friends_of_friend(&self, friend_public_key: &str) -> anyhow::Result<Vec<Peer>> {
        Ok(self
            .friends_of
            .get(friend_public_key)
            .cloned()
            .unwrap_or_default())
    }
}

/// Reputation fixture returning fixed values for every author.
pub struct FixtureReputation {
    pub reputation: f64,
    pub tier: StakingTier,
    pub coherence: f64,
}

#[async_trait]
impl ReputationProvider for FixtureReputation {
    async fn get_reputation(&self, _public_key: &str) -> anyhow::Result<f64> {
        Ok(self.reputation)
    }

    async fn get_staking_tier(&self, _public_key: &str) -> anyhow::Result<StakingTier> {
        Ok(self.tier)
    }

    async fn get_coherence_score(&self, _public_key: &str) -> anyhow::Result<f64> {
        Ok(self.coherence)
    }
}
