//! Error types for figsheet-sheets.

use thiserror::Error;

/// All errors that can arise from spreadsheet publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The credential document could not be parsed.
    #[error("malformed service-account credentials: {0}")]
    Credentials(#[from] serde_json::Error),

    /// The private key was unusable or the token exchange was rejected.
    #[error("service-account auth failed for {identity}: {reason}")]
    Auth { identity: String, reason: String },

    /// The spreadsheet is unreachable or the credential lacks permission.
    /// Carries the caller identity so an operator can grant access to it.
    #[error("spreadsheet access check failed for {identity}: {reason}")]
    Access { identity: String, reason: String },

    /// A clear or write call failed after access was established. The range
    /// may already have been cleared; the run must be reported as failed so
    /// the operator re-runs it.
    #[error("spreadsheet write error: {status} {status_text}")]
    Write { status: u16, status_text: String },

    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("spreadsheet API unreachable: {0}")]
    Transport(String),
}
