//! Request failure taxonomy.
//!
//! Every failed outbound call is classified into exactly one [`ApiError`]
//! kind with a fixed user-facing message. Classification is pure: it looks at
//! the transport outcome or the response status and body, and nothing else.
//! Reacting to a classified error (notifying the user, resetting the session
//! on 401) happens in the pipeline, not here.

use bridge_traits::BridgeError;
use serde::Deserialize;
use thiserror::Error;

/// Classified outcome of a failed outbound call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 400; carries the server's `detail` when present.
    #[error("{0}")]
    Validation(String),

    /// HTTP 401; the pipeline resets the session and redirects to login.
    #[error("unauthorized, please sign in again")]
    Auth,

    /// HTTP 403.
    #[error("access denied")]
    Forbidden,

    /// HTTP 404.
    #[error("resource not found")]
    NotFound,

    /// HTTP 500.
    #[error("internal server error")]
    Server,

    /// Any other HTTP status.
    #[error("request failed ({status})")]
    Unknown { status: u16 },

    /// The request went out but no response arrived (timeout, dead socket).
    #[error("server not responding")]
    Network,

    /// The request could not be constructed or its response not decoded.
    #[error("{0}")]
    Config(String),
}

/// Error body shape used by the counterpart service for 4xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Classify a received non-success response.
    ///
    /// Pure function of status and body; performs no side effects.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match status {
            400 => {
                let detail = serde_json::from_slice::<ErrorBody>(body)
                    .ok()
                    .and_then(|b| b.detail)
                    .unwrap_or_else(|| "invalid request".to_string());
                ApiError::Validation(detail)
            }
            401 => ApiError::Auth,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            status => ApiError::Unknown { status },
        }
    }

    /// True for the kind whose side effect (session reset + redirect) the
    /// pipeline must run.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        if err.is_no_response() {
            ApiError::Network
        } else {
            // Unbuildable requests and bridge faults surface verbatim
            ApiError::Config(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
