//! Remote resource store abstraction.
//!
//! The deployment target exposes a flat key→content namespace per entity.
//! Transport lives behind this trait; the engine only ever sees the three
//! operations below. Writing empty content removes the key — that is how
//! deploy plans express stale-key deletion.

use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Abstract remote resource store.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Reads one resource. Missing keys are a `Remote` error.
    async fn get(&self, entity_id: &str, key: &str) -> SyncResult<String>;

    /// Writes one resource. Empty content removes the key.
    async fn set(&self, entity_id: &str, key: &str, content: &str) -> SyncResult<()>;

    /// Lists the keys currently present for an entity.
    async fn list_keys(&self, entity_id: &str) -> SyncResult<Vec<String>>;
}

/// In-memory resource store, for tests and offline work.
#[derive(Debug, Default, Clone)]
pub struct MemoryResourceStore {
    entities: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
}

impl MemoryResourceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one resource, bypassing the empty-content-deletes rule.
    pub async fn seed(&self, entity_id: &str, key: &str, content: &str) {
        self.entities
            .write()
            .await
            .entry(entity_id.to_string())
            .or_default()
            .insert(key.to_string(), content.to_string());
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn get(&self, entity_id: &str, key: &str) -> SyncResult<String> {
        self.entities
            .read()
            .await
            .get(entity_id)
            .and_then(|resources| resources.get(key))
            .cloned()
            .ok_or_else(|| SyncError::Remote(format!("resource not found: {entity_id}/{key}")))
    }

    async fn set(&self, entity_id: &str, key: &str, content: &str) -> SyncResult<()> {
        let mut entities = self.entities.write().await;
        let resources = entities.entry(entity_id.to_string()).or_default();
        if content.is_empty() {
            resources.remove(key);
        } else {
            resources.insert(key.to_string(), content.to_string());
        }
        Ok(())
    }

    async fn list_keys(&self, entity_id: &str) -> SyncResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .entities
            .read()
            .await
            .get(entity_id)
            .map(|resources| resources.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    }
}
