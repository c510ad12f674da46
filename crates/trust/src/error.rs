//! Trust evaluation error types

use thiserror::Error;

/// Errors that can occur while evaluating trust.
///
/// Provider failures propagate instead of silently defaulting to UNKNOWN
/// trust: a downgrade without evidence would be a security decision made on
/// no data.
#[derive(Debug, Error)]
pub enum TrustError {
    /// A social-graph or reputation provider call failed
    #[error("Provider failure: {0}")]
    Provider(#[from] anyhow::Error),
}
