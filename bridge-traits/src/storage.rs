//! Durable Key-Value Storage Abstraction
//!
//! Platform-agnostic contract for the browser-scoped, synchronous-feeling
//! string store the credential persists in:
//! - Web: localStorage
//! - Desktop: a JSON settings file or OS preference store
//! - Tests: an in-memory map
//!
//! The store is a passthrough. It performs no validation, expiry, or
//! encryption; confidentiality of the medium is the host's concern.

use async_trait::async_trait;

use crate::error::Result;

/// String key-value storage trait
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store a string value, replacing any previous value under the key.
    async fn set_string(&self, key: &str, value: &str) -> Result<()>;

    /// Retrieve a string value. Returns `Ok(None)` when the key is absent.
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Delete a key. Succeeds when the key is already absent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists without retrieving it.
    async fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get_string(key).await?.is_some())
    }

    /// List all stored keys.
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Remove every stored key.
    async fn clear_all(&self) -> Result<()>;
}
