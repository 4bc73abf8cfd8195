//! Error types for figsheet-figma.

use thiserror::Error;

/// All errors that can arise from design-file API fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status from the design-file API.
    #[error("design-file API error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("design-file API unreachable: {0}")]
    Transport(String),

    /// Response body did not match the expected shape.
    #[error("malformed design-file API response: {0}")]
    Decode(#[source] std::io::Error),
}
