//! Blocking client for the spreadsheet values API.
//!
//! Three calls, always in this order when used by the pipeline: metadata
//! probe (`verify_access`), range clear, range write. The client is bound to
//! a single spreadsheet for its lifetime.

use std::time::Duration;

use figsheet_core::types::{PublishBatch, SpreadsheetId};

use crate::auth::{AccessToken, ServiceAccount};
use crate::error::PublishError;

const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Value-interpretation mode for the range-write call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Store cell strings literally.
    Raw,
    /// Let the spreadsheet evaluate formula strings.
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Authenticated client bound to one spreadsheet.
pub struct SheetsClient {
    agent: ureq::Agent,
    api_base: String,
    token: String,
    identity: String,
    spreadsheet_id: SpreadsheetId,
}

impl SheetsClient {
    /// Exchange the service account for a token and bind to a spreadsheet.
    pub fn authorize(
        account: &ServiceAccount,
        spreadsheet_id: SpreadsheetId,
    ) -> Result<Self, PublishError> {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        let token = account.fetch_access_token(&agent)?;
        Ok(Self::with_token(
            agent,
            token,
            account.client_email.clone(),
            spreadsheet_id,
            DEFAULT_API_BASE,
        ))
    }

    /// Client with an already-issued token (stub servers in tests).
    pub fn with_token(
        agent: ureq::Agent,
        token: AccessToken,
        identity: String,
        spreadsheet_id: SpreadsheetId,
        api_base: &str,
    ) -> Self {
        Self {
            agent,
            api_base: api_base.trim_end_matches('/').to_owned(),
            token: token.access_token,
            identity,
            spreadsheet_id,
        }
    }

    /// The credential identity this client acts as (`client_email`).
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Lightweight metadata read proving the spreadsheet is reachable and the
    /// credential has permission. Any failure here is an access error naming
    /// the identity, so the operator knows which account to grant.
    pub fn verify_access(&self) -> Result<(), PublishError> {
        let url = format!(
            "{}/v4/spreadsheets/{}?fields=spreadsheetId",
            self.api_base, self.spreadsheet_id
        );
        match self.agent.get(&url).set("Authorization", &self.bearer()).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, resp)) => Err(PublishError::Access {
                identity: self.identity.clone(),
                reason: format!("{status} {}", resp.status_text()),
            }),
            Err(ureq::Error::Transport(t)) => Err(PublishError::Access {
                identity: self.identity.clone(),
                reason: t.to_string(),
            }),
        }
    }

    /// Clear a cell range. The pipeline passes its fixed maximal range so
    /// prior content beyond the new batch never survives.
    pub fn clear(&self, range: &str) -> Result<(), PublishError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:clear",
            self.api_base, self.spreadsheet_id, range
        );
        self.check(
            self.agent
                .post(&url)
                .set("Authorization", &self.bearer())
                .send_json(serde_json::json!({})),
        )
    }

    /// Write the batch starting at `origin` with the given interpretation
    /// mode. The mode must match how the batch's link cells were rendered.
    pub fn write(
        &self,
        origin: &str,
        batch: &PublishBatch,
        mode: ValueInputOption,
    ) -> Result<(), PublishError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?valueInputOption={}",
            self.api_base,
            self.spreadsheet_id,
            origin,
            mode.as_str()
        );
        self.check(
            self.agent
                .put(&url)
                .set("Authorization", &self.bearer())
                .send_json(update_body(origin, batch)),
        )
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn check(&self, resp: Result<ureq::Response, ureq::Error>) -> Result<(), PublishError> {
        match resp {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, r)) => Err(PublishError::Write {
                status,
                status_text: r.status_text().to_owned(),
            }),
            Err(ureq::Error::Transport(t)) => Err(PublishError::Transport(t.to_string())),
        }
    }
}

/// Request body for the range-write call.
fn update_body(origin: &str, batch: &PublishBatch) -> serde_json::Value {
    serde_json::json!({
        "range": origin,
        "majorDimension": "ROWS",
        "values": batch,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use figsheet_core::types::{CellValue, SheetRow};

    use super::*;

    #[test]
    fn value_input_option_wire_strings() {
        assert_eq!(ValueInputOption::Raw.as_str(), "RAW");
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
    }

    #[test]
    fn update_body_wraps_batch_as_row_major_values() {
        let batch = PublishBatch {
            rows: vec![
                SheetRow(vec![CellValue::from("#"), CellValue::from("Component")]),
                SheetRow(vec![CellValue::Number(1), CellValue::from("Card")]),
            ],
        };
        let body = update_body("A1", &batch);
        assert_eq!(body["range"], "A1");
        assert_eq!(body["majorDimension"], "ROWS");
        assert_eq!(body["values"], serde_json::json!([["#", "Component"], [1, "Card"]]));
    }

    #[test]
    fn with_token_keeps_identity_and_trims_base() {
        let agent = ureq::AgentBuilder::new().build();
        let token = AccessToken {
            access_token: "ya29.test".into(),
            expires_in: 3600,
        };
        let client = SheetsClient::with_token(
            agent,
            token,
            "publisher@design-reports.iam.gserviceaccount.com".into(),
            SpreadsheetId::from("sheet-1"),
            "http://127.0.0.1:9/",
        );
        assert_eq!(client.identity(), "publisher@design-reports.iam.gserviceaccount.com");
        assert_eq!(client.api_base, "http://127.0.0.1:9");
        assert_eq!(client.bearer(), "Bearer ya29.test");
    }
}
