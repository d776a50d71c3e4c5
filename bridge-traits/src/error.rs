use thiserror::Error;

/// Errors produced by host bridge implementations.
///
/// The variants deliberately separate "the request went out and nothing came
/// back" (`Timeout`, `Connection`) from "the request could never be sent"
/// (`InvalidRequest`), because the core classifies those outcomes differently.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// True when the request was handed to the transport but no response
    /// arrived (timeout, refused connection, dropped socket).
    pub fn is_no_response(&self) -> bool {
        matches!(self, BridgeError::Timeout | BridgeError::Connection(_))
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
