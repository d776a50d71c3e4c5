//! HTTP Transport Abstraction
//!
//! Provides the async transport contract the core issues every outbound call
//! through. Implementations handle TLS, connection pooling, and timeouts; the
//! core layers credential injection and error classification on top.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{BridgeError, Result};

/// HTTP method types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// HTTP request builder
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    /// Set a JSON body and the matching content type.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)
            .map_err(|e| BridgeError::InvalidRequest(format!("JSON serialization failed: {}", e)))?;
        self.body = Some(Bytes::from(json));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set a form-encoded body and the matching content type.
    ///
    /// Used for endpoints that take `application/x-www-form-urlencoded`
    /// submissions rather than JSON.
    pub fn form<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(body)
            .map_err(|e| BridgeError::InvalidRequest(format!("Form encoding failed: {}", e)))?;
        self.body = Some(Bytes::from(encoded));
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        Ok(self)
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client trait
///
/// Host platforms provide the transport; the core never touches sockets
/// directly. Implementations must:
/// - Honor the per-request timeout and report expiry as [`BridgeError::Timeout`]
/// - Report unreachable hosts as [`BridgeError::Connection`]
/// - Report requests that cannot be built or sent as [`BridgeError::InvalidRequest`]
/// - Return every received response, whatever its status, as `Ok`
///
/// Implementations must not retry; the core reports each failed call exactly
/// once.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the received response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
