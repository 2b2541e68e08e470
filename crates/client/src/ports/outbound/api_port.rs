//! Transport errors raised by the HTTP boundary.

/// Failure talking to the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, I/O).
    #[error("Request failed: {0}")]
    Request(String),

    /// The engine answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
