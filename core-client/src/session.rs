//! In-memory session state.
//!
//! One `SessionService` exists per running client. It is constructed
//! explicitly at startup and injected wherever the session is read (the
//! request pipeline, the navigation guard) or mutated (the auth service, the
//! 401 handler). There is no hidden global.
//!
//! Lifecycle: `rehydrate` at startup, `adopt` after a profile fetch, `reset`
//! on logout or authentication failure. Reads are synchronous and return a
//! snapshot by value.

use crate::credentials::CredentialStore;
use crate::error::{ApiError, Result};
use crate::types::{Credential, Principal, Role, Session};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Process-wide session instance.
///
/// Cloning is cheap and every clone observes the same session.
#[derive(Clone)]
pub struct SessionService {
    credentials: CredentialStore,
    inner: Arc<RwLock<Session>>,
}

impl SessionService {
    /// Create an empty (unauthenticated) session over the given store.
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            credentials,
            inner: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.inner.read().clone()
    }

    /// Access the underlying credential store.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Install a credential and its principal, recomputing the role set.
    ///
    /// The roles are derived only from the principal supplied here; nothing
    /// carries over from a prior session. Rejects an empty credential.
    pub fn adopt(&self, credential: Credential, principal: Principal) -> Result<()> {
        if credential.is_empty() {
            return Err(ApiError::Config(
                "cannot adopt a session with an empty credential".to_string(),
            ));
        }

        let roles = Role::derive(&principal);
        let mut session = self.inner.write();
        *session = Session {
            credential: Some(credential),
            principal: Some(principal),
            roles,
        };

        info!(username = %session.principal.as_ref().map(|p| p.username.as_str()).unwrap_or(""),
              roles = ?session.roles, "Session adopted");
        Ok(())
    }

    /// Clear credential, principal, and roles, and drop the persisted
    /// credential. Unconditional and idempotent; safe to invoke from several
    /// in-flight 401 handlers at once.
    pub async fn reset(&self) {
        {
            let mut session = self.inner.write();
            if session.credential.is_none() && session.principal.is_none() {
                debug!("Session already empty");
            }
            *session = Session::default();
        }

        // A storage failure must not keep the in-memory session alive
        if let Err(e) = self.credentials.clear().await {
            warn!(error = %e, "Failed to clear persisted credential during reset");
        }

        info!("Session reset");
    }

    /// Startup initialization: load the persisted credential, leaving the
    /// principal and role set empty. The profile is re-fetched lazily, never
    /// restored from persistence.
    pub async fn rehydrate(&self) -> Result<()> {
        let credential = self.credentials.read().await?;
        let restored = credential.is_some();

        let mut session = self.inner.write();
        *session = Session {
            credential,
            principal: None,
            roles: Vec::new(),
        };
        drop(session);

        debug!(restored, "Session rehydrated");
        Ok(())
    }
}
