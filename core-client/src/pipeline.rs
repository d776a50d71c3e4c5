//! Outbound request pipeline.
//!
//! Every call the console makes to the service runs through here:
//!
//! - Outbound: if the session holds a credential, attach it as a bearer
//!   authorization header; nothing else about the request is touched. The
//!   fixed timeout is applied to every call.
//! - Inbound, success: decode the JSON payload to the caller's type.
//! - Inbound, failure: classify (pure, see [`ApiError::from_response`]),
//!   surface one transient notification, then re-raise to the caller.
//!
//! The 401 reaction (session reset plus forced navigation to login) is kept
//! out of classification: it lives in an injected [`UnauthorizedHandler`]
//! the pipeline invokes unconditionally whenever a call classifies as
//! [`ApiError::Auth`]. Callers cannot suppress it. The handler performs no
//! HTTP of its own, so concurrent 401s cannot recurse; reset and redirect
//! are both idempotent. No call is ever retried.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::guard::login_redirect;
use crate::session::SessionService;
use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bridge_traits::ui::{Navigator, Notifier};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reaction to an authentication failure on any outbound call.
#[async_trait]
pub trait UnauthorizedHandler: Send + Sync {
    /// Invoked once per 401-classified call. Must be idempotent.
    async fn on_unauthorized(&self);
}

/// Default 401 reaction: reset the session and force navigation to the
/// login entry point, carrying the interrupted path as the resumption
/// parameter when the shell can report one.
pub struct SessionExpiryRedirect {
    session: SessionService,
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiryRedirect {
    pub fn new(session: SessionService, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

#[async_trait]
impl UnauthorizedHandler for SessionExpiryRedirect {
    async fn on_unauthorized(&self) {
        self.session.reset().await;
        let target = login_redirect(&self.navigator.current_path());
        self.navigator.redirect(&target);
        warn!(target = %target, "Session expired, redirected to login");
    }
}

/// 401 reaction that does nothing beyond the classification itself.
///
/// For headless callers (scripts, tests of the view layer) that have no
/// navigation surface; the session is left to the caller.
pub struct NoopUnauthorizedHandler;

#[async_trait]
impl UnauthorizedHandler for NoopUnauthorizedHandler {
    async fn on_unauthorized(&self) {}
}

/// The HTTP client wrapper every endpoint client is built on.
#[derive(Clone)]
pub struct RequestPipeline {
    http: Arc<dyn HttpClient>,
    session: SessionService,
    notifier: Arc<dyn Notifier>,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
    config: ClientConfig,
}

impl RequestPipeline {
    pub fn new(
        http: Arc<dyn HttpClient>,
        session: SessionService,
        notifier: Arc<dyn Notifier>,
        on_unauthorized: Arc<dyn UnauthorizedHandler>,
        config: ClientConfig,
    ) -> Self {
        Self {
            http,
            session,
            notifier,
            on_unauthorized,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(HttpMethod::Get, path)?;
        self.send(request).await
    }

    /// GET with a serialized query string. `None` fields are omitted.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(query)
            .map_err(|e| ApiError::Config(format!("Invalid query parameters: {}", e)))?;

        let path = if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        };
        let request = self.request(HttpMethod::Get, &path)?;
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(HttpMethod::Post, path)?
            .json(body)
            .map_err(ApiError::from)?;
        self.send(request).await
    }

    /// POST without a body (state-transition endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(HttpMethod::Post, path)?;
        self.send(request).await
    }

    /// POST a form-encoded body. Only the login handshake uses this; every
    /// other endpoint exchanges JSON.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(HttpMethod::Post, path)?
            .form(form)
            .map_err(ApiError::from)?;
        self.send(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(HttpMethod::Put, path)?
            .json(body)
            .map_err(ApiError::from)?;
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(HttpMethod::Delete, path)?;
        self.send(request).await
    }

    fn request(&self, method: HttpMethod, path: &str) -> Result<HttpRequest> {
        let url = self.config.endpoint(path)?;
        Ok(HttpRequest::new(method, url).timeout(self.config.timeout()))
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        // Outbound stage: credential injection is the only mutation
        let request = match self.session.current().credential {
            Some(credential) => request.bearer_token(credential.as_str()),
            None => request,
        };

        debug!(url = %request.url, method = ?request.method, "Dispatching request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => return Err(self.report(ApiError::from(e)).await),
        };

        if response.is_success() {
            match serde_json::from_slice(&response.body) {
                Ok(payload) => Ok(payload),
                Err(e) => {
                    let err = ApiError::Config(format!("Unexpected response shape: {}", e));
                    Err(self.report(err).await)
                }
            }
        } else {
            let err = ApiError::from_response(response.status, &response.body);
            Err(self.report(err).await)
        }
    }

    /// Failure policy: notify once, run the 401 reaction when applicable,
    /// re-raise.
    async fn report(&self, err: ApiError) -> ApiError {
        warn!(error = %err, "Request failed");
        self.notifier.notify_error(&err.to_string());

        if err.is_auth() {
            self.on_unauthorized.on_unauthorized().await;
        }

        err
    }
}
