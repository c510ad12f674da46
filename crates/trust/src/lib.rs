//! Trust Evaluation Service
//!
//! This crate computes trust assessments for envelope authors from five
//! weighted factors: social-graph distance, reputation, endorsement quality,
//! staking tier, and coherence. Assessments are cached by content hash and
//! can be bypassed by manual per-artifact or per-author overrides.
//!
//! The assessment is the boundary: downstream capability gates map
//! `(capability, assessment)` to allow/deny/confirm decisions on their own.

pub mod assessment;
pub mod error;
pub mod evaluator;
pub mod providers;
pub mod scorer;

pub use assessment::{OverrideTarget, TrustAssessment, TrustFactors, TrustOverride};
pub use error::TrustError;
pub use evaluator::TrustEvaluator;
pub use providers::{Peer, ReputationProvider, SocialGraphProvider, StakingTier};
pub use scorer::{TrustScorer, WeightedScorer};
