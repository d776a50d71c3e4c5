//! Login orchestration.
//!
//! `AuthService` drives the login handshake on top of the request pipeline
//! and the session service: credential submission, token extraction and
//! persistence, profile fetch, and (purely local) logout.

use crate::credentials::CredentialStore;
use crate::error::{ApiError, Result};
use crate::pipeline::RequestPipeline;
use crate::session::SessionService;
use crate::types::{Credential, LoginState, Principal, TokenResponse};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const TEST_TOKEN_ENDPOINT: &str = "/api/v1/auth/test-token";
pub const PROFILE_ENDPOINT: &str = "/api/v1/users/me";

/// Form-encoded login submission.
///
/// The counterpart service implements the OAuth2 password form contract, so
/// this endpoint alone uses `application/x-www-form-urlencoded`; every other
/// call exchanges JSON.
#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

/// Orchestrates login, profile fetch, and logout.
#[derive(Clone)]
pub struct AuthService {
    pipeline: RequestPipeline,
    session: SessionService,
    state: Arc<RwLock<LoginState>>,
}

impl AuthService {
    pub fn new(pipeline: RequestPipeline, session: SessionService) -> Self {
        Self {
            pipeline,
            session,
            state: Arc::new(RwLock::new(LoginState::Idle)),
        }
    }

    /// Current position in the login state machine.
    pub fn login_state(&self) -> LoginState {
        *self.state.read()
    }

    fn credentials(&self) -> &CredentialStore {
        self.session.credentials()
    }

    /// Exchange credentials for a bearer token.
    ///
    /// On success the token is persisted, the session picks it up (profile
    /// still empty until [`fetch_profile`](Self::fetch_profile)), and the
    /// credential is returned. On failure the classified error is re-raised
    /// for the login form to render inline.
    pub async fn login(&self, username: &str, password: &str) -> Result<Credential> {
        {
            let mut state = self.state.write();
            if state.is_in_progress() {
                return Err(ApiError::Config("a sign-in is already in progress".to_string()));
            }
            *state = LoginState::Submitting;
        }

        let result = self.submit(username, password).await;

        *self.state.write() = match &result {
            Ok(_) => LoginState::Authenticated,
            Err(_) => LoginState::Failed,
        };

        result
    }

    async fn submit(&self, username: &str, password: &str) -> Result<Credential> {
        let response: TokenResponse = self
            .pipeline
            .post_form(LOGIN_ENDPOINT, &LoginForm { username, password })
            .await
            .map_err(|e| {
                warn!(username, "Login failed");
                e
            })?;

        let credential = Credential::new(response.access_token);
        self.credentials().write(&credential).await?;
        self.session.rehydrate().await?;

        info!(username, "Signed in");
        Ok(credential)
    }

    /// Fetch the current principal and install it in the session.
    ///
    /// If the call fails with a 401, the pipeline's handler has already
    /// reset the session; the caller observes the reverted state.
    pub async fn fetch_profile(&self) -> Result<Principal> {
        let principal: Principal = self.pipeline.get(PROFILE_ENDPOINT).await?;

        let credential = self
            .session
            .current()
            .credential
            .ok_or(ApiError::Auth)?;
        self.session.adopt(credential, principal.clone())?;

        Ok(principal)
    }

    /// Ask the service to validate the stored bearer token, returning the
    /// principal it resolves to. Used at startup after `rehydrate`.
    pub async fn validate_token(&self) -> Result<Principal> {
        self.pipeline.post_empty(TEST_TOKEN_ENDPOINT).await
    }

    /// Purely local logout: clears the session and the persisted
    /// credential. Calls no endpoint.
    pub async fn logout(&self) {
        self.session.reset().await;
        *self.state.write() = LoginState::Idle;
        info!("Signed out");
    }
}
