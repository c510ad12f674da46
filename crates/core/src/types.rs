//! Shared domain types for artifacts, capabilities, and trust levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of artifact wrapped by a signed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactType {
    Prompt,
    Plugin,
    Skill,
    Service,
    AgentTemplate,
    Process,
    FenceHandler,
    ModelConfig,
}

impl ArtifactType {
    /// Wire/storage path segment for this artifact type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Prompt => "prompt",
            ArtifactType::Plugin => "plugin",
            ArtifactType::Skill => "skill",
            ArtifactType::Service => "service",
            ArtifactType::AgentTemplate => "agent-template",
            ArtifactType::Process => "process",
            ArtifactType::FenceHandler => "fence-handler",
            ArtifactType::ModelConfig => "model-config",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named permission an artifact requests, e.g. `fs:write` or `net:fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(pub String);

impl Capability {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-capability decision produced by a downstream gate.
///
/// This core only exposes trust assessments; the mapping from an assessment
/// to a decision is owned by the consumer (e.g. a plugin loader). The
/// variants are carried here as plain data so producers and consumers agree
/// on the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "UPPERCASE")]
pub enum CapabilityDecision {
    /// Grant the capability without interaction
    Allow,
    /// Refuse the capability
    Deny { reason: String },
    /// Ask the user before granting
    Confirm,
}

/// Discrete trust level attached to a trust assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrustLevel {
    /// Authored by the local identity
    #[serde(rename = "SELF")]
    Self_,
    /// Explicitly trusted, by override or high score
    Vouched,
    /// Moderately trusted via community signals
    Community,
    /// No evidence either way - zero trust default
    Unknown,
    /// Explicitly distrusted or failed verification
    Revoked,
}
