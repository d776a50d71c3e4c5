//! Key-Value Storage backed by a JSON file
//!
//! Desktop stand-in for the browser's localStorage: a flat string map
//! persisted as one JSON object, rewritten on every mutation. Small by
//! design; the core stores a single credential under one key.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::KeyValueStore,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// JSON-file-backed key-value store
pub struct JsonFileStore {
    path: Option<PathBuf>,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) a store at the given file path.
    pub async fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(BridgeError::Io)?;
        }

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<HashMap<String, String>>(&bytes)
                .map_err(|e| BridgeError::OperationFailed(format!("Corrupt store file: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(BridgeError::Io(e)),
        };

        debug!(path = ?path, keys = entries.len(), "Opened key-value store");

        Ok(Self {
            path: Some(path),
            entries: Mutex::new(entries),
        })
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let map: Map<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let json = serde_json::to_vec_pretty(&Value::Object(map))
            .map_err(|e| BridgeError::OperationFailed(format!("Serialization failed: {}", e)))?;

        // Write-then-rename keeps a crash from truncating the store
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await.map_err(BridgeError::Io)?;
        tokio::fs::rename(&tmp, path).await.map_err(BridgeError::Io)?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await?;
        debug!(key = key, "Stored value");
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        self.persist(&entries).await?;
        debug!(key = key, "Deleted value");
        Ok(())
    }

    async fn has_key(&self, key: &str) -> Result<bool> {
        let entries = self.entries.lock().await;
        Ok(entries.contains_key(key))
    }

    async fn list_keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock().await;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn clear_all(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.persist(&entries).await?;
        debug!("Cleared store");
        Ok(())
    }
}
