//! Source error types.
//!
//! Every error variant carries enough context to diagnose the problem
//! without a debugger.

/// Errors that can occur while fetching the sheet.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    Client { reason: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("failed to fetch '{url}': {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetch of '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read to the end.
    #[error("failed to read body of '{url}': {reason}")]
    Body { url: String, reason: String },
}
