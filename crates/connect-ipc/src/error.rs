//! IPC error types.

use thiserror::Error;

/// IPC error type.
#[derive(Error, Debug)]
pub enum IpcError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with something that does not fit the protocol
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Could not reach the service socket
    #[error("Socket error: {0}")]
    Socket(String),

    /// Service closed the connection before answering
    #[error("Connection closed")]
    ConnectionClosed,

    /// Deadline passed before the call completed
    #[error("Deadline exceeded waiting for the service")]
    Timeout,

    /// The service reported an error for the request
    #[error("Service error {code}: {message}")]
    Remote { code: i32, message: String },
}

/// Result type alias using IpcError.
pub type IpcResult<T> = Result<T, IpcError>;
