//! Durable credential persistence.
//!
//! Stores the single opaque bearer token in the host's key-value medium
//! under one fixed key. Passthrough only: no validation, expiry, or
//! encryption. The token value itself is never logged.

use crate::error::{ApiError, Result};
use crate::types::Credential;
use bridge_traits::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed storage key for the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "sched_admin_token";

/// Durable store for the single bearer credential.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted credential, if any.
    pub async fn read(&self) -> Result<Option<Credential>> {
        let value = self.store.get_string(TOKEN_STORAGE_KEY).await.map_err(|e| {
            warn!(error = %e, "Failed to read credential from storage");
            ApiError::Config(e.to_string())
        })?;

        match value {
            Some(token) => Ok(Some(Credential::new(token))),
            None => {
                debug!("No credential in storage");
                Ok(None)
            }
        }
    }

    /// Persist the credential, replacing any previous one.
    pub async fn write(&self, credential: &Credential) -> Result<()> {
        self.store
            .set_string(TOKEN_STORAGE_KEY, credential.as_str())
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to persist credential");
                ApiError::Config(e.to_string())
            })?;

        info!("Credential persisted");
        Ok(())
    }

    /// Remove the persisted credential. Idempotent.
    pub async fn clear(&self) -> Result<()> {
        self.store.delete(TOKEN_STORAGE_KEY).await.map_err(|e| {
            warn!(error = %e, "Failed to clear credential");
            ApiError::Config(e.to_string())
        })?;

        info!("Credential cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemoryStore;

    #[tokio::test]
    async fn write_then_read_returns_the_token() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));

        let credential = Credential::new("tok123");
        store.write(&credential).await.unwrap();

        let read = store.read().await.unwrap().unwrap();
        assert_eq!(read, credential);
    }

    #[tokio::test]
    async fn clear_then_read_returns_absent() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));

        store.write(&Credential::new("tok123")).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.read().await.unwrap().is_none());

        // Clearing again is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn read_of_empty_store_is_absent() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn uses_the_fixed_storage_key() {
        let backing = Arc::new(MemoryStore::new());
        let store = CredentialStore::new(backing.clone());

        store.write(&Credential::new("tok123")).await.unwrap();
        assert_eq!(
            backing.get_string(TOKEN_STORAGE_KEY).await.unwrap(),
            Some("tok123".to_string())
        );
    }
}
