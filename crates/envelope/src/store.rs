//! Envelope persistence through an opaque key/value bridge.
//!
//! Envelopes are stored path-addressed as `envelopes/<type>/<content-hash>`.
//! The bridge is treated as an opaque store: no transactional semantics are
//! assumed across keys.

use async_trait::async_trait;
use provenant_core::ArtifactType;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::envelope::SignedEnvelope;
use crate::error::EnvelopeError;

/// Path-addressed key/value persistence boundary.
#[async_trait]
pub trait KvBridge: Send + Sync {
    async fn get(&self, path: &str) -> anyhow::Result<Option<Value>>;
    async fn put(&self, path: &str, value: Value) -> anyhow::Result<()>;
}

/// Stores and retrieves envelopes through a [`KvBridge`].
pub struct EnvelopeStore {
    bridge: Arc<dyn KvBridge>,
}

impl EnvelopeStore {
    pub fn new(bridge: Arc<dyn KvBridge>) -> Self {
        Self { bridge }
    }

    fn path_for(artifact_type: ArtifactType, content_hash: &str) -> String {
        format!("envelopes/{}/{}", artifact_type.as_str(), content_hash)
    }

    /// Persists an envelope under its content-addressed path.
    pub async fn save<T: Serialize + Send + Sync>(
        &self,
        envelope: &SignedEnvelope<T>,
    ) -> Result<(), EnvelopeError> {
        let path = Self::path_for(envelope.artifact_type, &envelope.content_hash);
        let value = serde_json::to_value(envelope).map_err(|e| EnvelopeError::Serialization {
            reason: e.to_string(),
        })?;

        self.bridge.put(&path, value).await?;
        debug!(path = %path, "Envelope stored");
        Ok(())
    }

    /// Loads an envelope by artifact type and content hash.
    ///
    /// Returns `Ok(None)` when no envelope is stored at that address. The
    /// loaded value is only structurally decoded; callers gate trust through
    /// the verifier.
    pub async fn load<T: DeserializeOwned>(
        &self,
        artifact_type: ArtifactType,
        content_hash: &str,
    ) -> Result<Option<SignedEnvelope<T>>, EnvelopeError> {
        let path = Self::path_for(artifact_type, content_hash);

        let Some(value) = self.bridge.get(&path).await? else {
            return Ok(None);
        };

        let envelope =
            serde_json::from_value(value).map_err(|e| EnvelopeError::Serialization {
                reason: e.to_string(),
            })?;
        Ok(Some(envelope))
    }
}

/// In-memory bridge for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryBridge {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvBridge for MemoryBridge {
    async fn get(&self, path: &str) -> anyhow::Result<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory bridge poisoned"))?;
        Ok(entries.get(path).cloned())
    }

    async fn put(&self, path: &str, value: Value) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory bridge poisoned"))?;
        entries.insert(path.to_string(), value);
        Ok(())
    }
}
