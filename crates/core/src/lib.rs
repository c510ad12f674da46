//! Core functionality for the Provenant trust-and-provenance layer.
//!
//! This crate provides the fundamental types and utilities shared across the
//! Provenant ecosystem: canonical content hashing, artifact and capability
//! types, scoring configuration, and logging initialization.

pub mod canonical;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use canonical::{canonicalize, compute_content_hash, ContentHash};
pub use config::TrustConfig;
pub use error::CanonicalError;
pub use types::{ArtifactType, Capability, CapabilityDecision, TrustLevel};
