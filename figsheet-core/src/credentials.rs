//! Credential sourcing.
//!
//! Production reads two environment variables; tests inject
//! [`StaticCredentials`] so no test ever depends on real environment state.

use crate::error::CredentialError;

/// Environment variable holding the design-file API token.
pub const FIGMA_TOKEN_VAR: &str = "FIGMA_TOKEN";
/// Environment variable holding the service-account credential document.
pub const GOOGLE_CREDENTIALS_VAR: &str = "GOOGLE_CREDENTIALS";

/// Capability interface for obtaining the two out-of-band credentials.
pub trait CredentialSource {
    /// Bearer-style token for the design-file API.
    fn figma_token(&self) -> Result<String, CredentialError>;

    /// Service-account credential JSON for the spreadsheet API.
    fn sheets_credentials(&self) -> Result<String, CredentialError>;
}

/// Reads credentials from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn figma_token(&self) -> Result<String, CredentialError> {
        read_var(FIGMA_TOKEN_VAR)
    }

    fn sheets_credentials(&self) -> Result<String, CredentialError> {
        read_var(GOOGLE_CREDENTIALS_VAR)
    }
}

fn read_var(var: &'static str) -> Result<String, CredentialError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CredentialError::Missing { var }),
    }
}

/// Fixed in-memory credentials for tests.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub figma_token: String,
    pub sheets_credentials: String,
}

impl CredentialSource for StaticCredentials {
    fn figma_token(&self) -> Result<String, CredentialError> {
        Ok(self.figma_token.clone())
    }

    fn sheets_credentials(&self) -> Result<String, CredentialError> {
        Ok(self.sheets_credentials.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
