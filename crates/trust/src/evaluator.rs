//! Trust evaluator.
//!
//! Computes a [`TrustAssessment`] for an envelope's author, short-circuiting
//! in priority order: self-authorship, cache, the signature gate, manual
//! overrides, and finally the weighted five-factor algorithm. All state
//! (cache and override set) is owned by the evaluator instance; separate
//! evaluators never interfere.

use provenant_core::{TrustConfig, TrustLevel};
use provenant_envelope::{EnvelopeVerifier, SignedEnvelope};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::assessment::{OverrideTarget, TrustAssessment, TrustFactors, TrustOverride};
use crate::error::TrustError;
use crate::providers::{ReputationProvider, SocialGraphProvider};
use crate::scorer::{TrustScorer, WeightedScorer};

/// Social distance weight for a direct (1-hop) friend.
const DISTANCE_FRIEND: f64 = 0.8;

/// Social distance weight for a friend-of-friend (2-hop).
const DISTANCE_FRIEND_OF_FRIEND: f64 = 0.5;

/// Computes and caches trust assessments for envelope authors.
///
/// Provider calls happen at most once per distinct content hash until
/// [`TrustEvaluator::clear_cache`] runs. Concurrent first evaluations of the
/// same content hash may each query providers once; callers expecting that
/// pattern should add their own in-flight guard.
pub struct TrustEvaluator {
    verifier: EnvelopeVerifier,
    social: Arc<dyn SocialGraphProvider>,
    reputation: Arc<dyn ReputationProvider>,
    own_public_key: String,
    scorer: WeightedScorer,
    cache: Mutex<HashMap<String, TrustAssessment>>,
    overrides: Mutex<HashMap<OverrideTarget, TrustOverride>>,
}

impl TrustEvaluator {
    pub fn new(
        own_public_key: impl Into<String>,
        social: Arc<dyn SocialGraphProvider>,
        reputation: Arc<dyn ReputationProvider>,
    ) -> Self {
        Self::with_config(own_public_key, social, reputation, TrustConfig::default())
    }

    pub fn with_config(
        own_public_key: impl Into<String>,
        social: Arc<dyn SocialGraphProvider>,
        reputation: Arc<dyn ReputationProvider>,
        config: TrustConfig,
    ) -> Self {
        Self {
            verifier: EnvelopeVerifier::new(),
            social,
            reputation,
            own_public_key: own_public_key.into(),
            scorer: WeightedScorer::new(config),
            cache: Mutex::new(HashMap::new()),
            overrides: Mutex::new(HashMap::new()),
        }
    }

    /// Evaluates trust for an envelope's author.
    ///
    /// # Errors
    /// [`TrustError::Provider`] when a social-graph or reputation call
    /// fails; a provider outage is never converted into UNKNOWN trust.
    pub async fn evaluate<T: Serialize + Sync>(
        &self,
        envelope: &SignedEnvelope<T>,
    ) -> Result<TrustAssessment, TrustError> {
        // 1. Envelopes we authored are fully trusted, no cache entry needed.
        if envelope.author.pub_key == self.own_public_key {
            return Ok(self.self_assessment());
        }

        // 2. Cached assessment wins until an explicit clear.
        if let Some(cached) = self
            .cache
            .lock()
            .unwrap()
            .get(&envelope.content_hash)
            .cloned()
        {
            debug!(content_hash = %envelope.content_hash, "Trust cache hit");
            return Ok(cached);
        }

        // 3. Signature gate: a failed verification floors the score before
        // any provider is queried.
        if !self.verifier.verify(envelope).valid {
            info!(
                content_hash = %envelope.content_hash,
                author = %envelope.author.fingerprint,
                "Envelope failed verification, trust revoked"
            );
            return Ok(self.cache_and_return(
                &envelope.content_hash,
                self.assessment(-1.0, TrustLevel::Revoked, TrustFactors::signature_failed()),
            ));
        }

        // 4. Manual overrides bypass the weighted algorithm; an
        // artifact-targeted override shadows an author-targeted one.
        if let Some(trust_level) = self.override_for(envelope) {
            let (score, level) = match trust_level {
                TrustLevel::Revoked => (-1.0, TrustLevel::Revoked),
                _ => (0.9, TrustLevel::Vouched),
            };
            info!(
                content_hash = %envelope.content_hash,
                level = ?level,
                "Trust override applied"
            );
            return Ok(self.cache_and_return(
                &envelope.content_hash,
                self.assessment(score, level, TrustFactors::ungathered()),
            ));
        }

        // 5. Weighted scoring over the five gathered factors.
        let author_pub = &envelope.author.pub_key;
        let factors = TrustFactors {
            signature_valid: true,
            social_distance: self.social_distance(author_pub).await?,
            author_reputation: self.reputation.get_reputation(author_pub).await?,
            staking_tier: self.reputation.get_staking_tier(author_pub).await?.weight(),
            endorsement_quality: self.endorsement_quality(envelope.endorsements.len()),
            coherence_score: self.reputation.get_coherence_score(author_pub).await?,
        };

        let score = self.scorer.score(&factors);
        let level = self.scorer.level_for(score);
        debug!(
            content_hash = %envelope.content_hash,
            score,
            level = ?level,
            "Trust factors scored"
        );

        Ok(self.cache_and_return(&envelope.content_hash, self.assessment(score, level, factors)))
    }

    /// Installs or replaces an override for the target.
    ///
    /// Takes effect on the next evaluation; already-cached assessments are
    /// not retroactively invalidated.
    pub fn set_override(&self, target: OverrideTarget, trust_level: TrustLevel) {
        let entry = TrustOverride {
            target: target.clone(),
            trust_level,
            created_at: current_timestamp_ms(),
        };
        self.overrides.lock().unwrap().insert(target, entry);
    }

    /// Removes an override, returning it if one was present.
    pub fn remove_override(&self, target: &OverrideTarget) -> Option<TrustOverride> {
        self.overrides.lock().unwrap().remove(target)
    }

    /// Snapshot of all configured overrides.
    pub fn overrides(&self) -> Vec<TrustOverride> {
        self.overrides.lock().unwrap().values().cloned().collect()
    }

    /// Drops every cached assessment. Provider queries resume on the next
    /// evaluation of each content hash.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    fn override_for<T>(&self, envelope: &SignedEnvelope<T>) -> Option<TrustLevel> {
        let overrides = self.overrides.lock().unwrap();

        let by_artifact = OverrideTarget::Artifact {
            content_hash: envelope.content_hash.clone(),
        };
        if let Some(entry) = overrides.get(&by_artifact) {
            return Some(entry.trust_level);
        }

        let by_author = OverrideTarget::Author {
            fingerprint: envelope.author.fingerprint.clone(),
        };
        overrides.get(&by_author).map(|entry| entry.trust_level)
    }

    async fn social_distance(&self, author_pub: &str) -> Result<f64, TrustError> {
        let friends = self.social.get_friends().await?;
        if friends.iter().any(|peer| peer.public_key == author_pub) {
            return Ok(DISTANCE_FRIEND);
        }

        for friend in &friends {
            let second_hop = self.social.get_friends_of_friend(&friend.public_key).await?;
            if second_hop.iter().any(|peer| peer.public_key == author_pub) {
                return Ok(DISTANCE_FRIEND_OF_FRIEND);
            }
        }

        Ok(0.0)
    }

    fn endorsement_quality(&self, count: usize) -> f64 {
        let saturation = self.scorer.config().endorsement_saturation.max(1);
        (count as f64 / saturation as f64).min(1.0)
    }

    fn self_assessment(&self) -> TrustAssessment {
        TrustAssessment {
            score: 1.0,
            level: TrustLevel::Self_,
            factors: TrustFactors::maxed(),
            evaluated_at: current_timestamp_ms(),
            ttl_ms: u64::MAX,
        }
    }

    fn assessment(&self, score: f64, level: TrustLevel, factors: TrustFactors) -> TrustAssessment {
        TrustAssessment {
            score,
            level,
            factors,
            evaluated_at: current_timestamp_ms(),
            ttl_ms: self.scorer.config().cache_ttl_ms,
        }
    }

    fn cache_and_return(&self, content_hash: &str, assessment: TrustAssessment) -> TrustAssessment {
        self.cache
            .lock()
            .unwrap()
            .insert(content_hash.to_string(), assessment.clone());
        assessment
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
