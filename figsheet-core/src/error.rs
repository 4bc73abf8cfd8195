//! Error types for figsheet-core.

use thiserror::Error;

/// All errors that can arise from credential sourcing.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The environment variable is unset or blank.
    #[error("missing credential: environment variable {var} is not set")]
    Missing { var: &'static str },
}
